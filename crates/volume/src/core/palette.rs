// Palette construction: ordered color table plus reverse lookup

use super::volume::Volume;
use super::voxel::{Rgba, Voxel};
use std::collections::HashMap;

/// Number of color slots in the output format's palette.
pub const PALETTE_CAPACITY: usize = 256;

/// Ordered color table (at most [`PALETTE_CAPACITY`] entries) with a
/// color→slot reverse lookup.
///
/// Color id 0 means "empty cell" in the output format, so a color at
/// slot `i` here is referenced as id `i + 1` by the geometry encoder.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Rgba>,
    lookup: HashMap<Rgba, u8>,
}

impl Palette {
    /// Build the palette for a write operation.
    ///
    /// An explicit color list is used verbatim (shorter than the full
    /// capacity is fine). Otherwise the volume's voxels are scanned in
    /// their insertion order, collecting first-seen distinct colors
    /// until the capacity is reached; further distinct colors are
    /// dropped without error, and their voxels degrade to the default
    /// color id when encoded.
    pub fn build(explicit: Option<&[Rgba]>, volume: &Volume) -> Self {
        match explicit {
            Some(colors) => Self::from_colors(colors.iter().copied()),
            None => Self::scan_volume(volume),
        }
    }

    /// Build from an ordered color list used verbatim; duplicate
    /// entries keep their slots, the lookup resolves each color to its
    /// first slot.
    pub fn from_colors(colors: impl IntoIterator<Item = Rgba>) -> Self {
        let mut palette = Self::default();
        for color in colors.into_iter().take(PALETTE_CAPACITY) {
            let slot = palette.colors.len() as u8;
            palette.lookup.entry(color).or_insert(slot);
            palette.colors.push(color);
        }
        palette
    }

    fn scan_volume(volume: &Volume) -> Self {
        let mut palette = Self::default();
        for voxel in volume.voxels() {
            if palette.colors.len() >= PALETTE_CAPACITY {
                break;
            }
            palette.push_distinct(voxel.rgba());
        }
        palette
    }

    fn push_distinct(&mut self, color: Rgba) {
        if let std::collections::hash_map::Entry::Vacant(slot) = self.lookup.entry(color) {
            slot.insert(self.colors.len() as u8);
            self.colors.push(color);
        }
    }

    /// Colors in slot order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// 0-based slot of a color, if present.
    pub fn slot_of(&self, color: Rgba) -> Option<u8> {
        self.lookup.get(&color).copied()
    }

    /// 1-based color id written into voxel geometry.
    ///
    /// A pre-assigned palette slot takes precedence; otherwise the
    /// voxel's color is resolved through the lookup. Colors absent from
    /// the palette (dropped past the capacity, or simply unknown) fall
    /// back to id 1, the default material.
    pub fn color_id(&self, voxel: &Voxel) -> u8 {
        if let Some(index) = voxel.palette_index {
            return index.wrapping_add(1);
        }
        match self.slot_of(voxel.rgba()) {
            Some(slot) => slot.wrapping_add(1),
            None => 1,
        }
    }
}
