// Voxel and color types shared by the volume container and the writer

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// RGBA color as stored in the output palette.
///
/// Constructed from packed `0xAARRGGBB` values (alpha in the high byte),
/// the layout schematic color channels arrive in. Hashable so it can key
/// the palette's reverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the filler for unused palette slots.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}

/// A single colored cell of a [`Volume`](crate::Volume).
///
/// The color reference is either a palette slot pre-assigned upstream
/// (which takes precedence) or a packed `0xAARRGGBB` value resolved
/// through the palette at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voxel {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    /// Packed `0xAARRGGBB` color value.
    pub color: u32,
    /// 0-based palette slot assigned upstream, if any.
    pub palette_index: Option<u8>,
}

impl Voxel {
    pub fn new(x: u32, y: u32, z: u32, color: u32) -> Self {
        Self {
            x,
            y,
            z,
            color,
            palette_index: None,
        }
    }

    /// Pin this voxel to a palette slot, bypassing color resolution.
    pub fn with_palette_index(mut self, index: u8) -> Self {
        self.palette_index = Some(index);
        self
    }

    pub fn position(&self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }

    pub fn rgba(&self) -> Rgba {
        Rgba::from(self.color)
    }
}
