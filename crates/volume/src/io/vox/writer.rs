// Orchestrates a full export: preamble, chunk sequence, consistency check

use super::chunk;
use super::constants::{DEFAULT_REGION_EDGE, MAGIC, MAIN, MAX_REGION_EDGE, RGBA, VERSION};
use super::{estimate, geometry, material, region, scene, VoxError};
use crate::core::palette::PALETTE_CAPACITY;
use crate::core::{Palette, Progress, Rgba, SilentProgress, Volume};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Options for a write operation.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Edge length of the cubic regions the volume is split into.
    /// Must be in `1..=255`; local coordinates are stored as one byte.
    pub region_edge: u32,
    /// Palette used verbatim instead of scanning the volume's colors.
    /// At most 256 entries.
    pub palette: Option<Vec<Rgba>>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            region_edge: DEFAULT_REGION_EDGE,
            palette: None,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region_edge(mut self, edge: u32) -> Self {
        self.region_edge = edge;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Rgba>) -> Self {
        self.palette = Some(palette);
        self
    }

    fn validate(&self) -> Result<(), VoxError> {
        if self.region_edge == 0 || self.region_edge > MAX_REGION_EDGE {
            return Err(VoxError::InvalidRegionEdge {
                edge: self.region_edge,
            });
        }
        if let Some(palette) = &self.palette {
            if palette.len() > PALETTE_CAPACITY {
                return Err(VoxError::PaletteTooLarge {
                    len: palette.len(),
                });
            }
        }
        Ok(())
    }
}

/// Summary of a completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    /// Occupied regions emitted, the K of the scene graph.
    pub regions: usize,
    /// Voxels written across all region chunks.
    pub voxels_written: usize,
    /// Voxel count of the source volume.
    pub source_voxels: usize,
    /// Byte length declared in the MAIN chunk header.
    pub body_len: u32,
}

impl WriteReport {
    /// Whether every source voxel landed in exactly one region chunk.
    pub fn is_consistent(&self) -> bool {
        self.voxels_written == self.source_voxels
    }
}

/// Serialize `volume` as a `.vox` scene into `out`.
pub fn write_vox<W: Write>(
    volume: &Volume,
    options: &WriteOptions,
    out: W,
) -> Result<WriteReport, VoxError> {
    write_vox_with_progress(volume, options, out, &mut SilentProgress)
}

/// Serialize `volume` into a file at `path`.
///
/// The file handle is scoped to this call: it is flushed and closed on
/// success, and a failed write aborts and may leave a truncated file
/// behind; there is no temp-file-and-rename transaction.
pub fn write_vox_file<P: AsRef<Path>>(
    volume: &Volume,
    options: &WriteOptions,
    path: P,
) -> Result<WriteReport, VoxError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let report = write_vox_with_progress(volume, options, &mut out, &mut SilentProgress)?;
    out.flush()?;
    Ok(report)
}

/// Serialize `volume` into `out`, reporting completion fractions to
/// `progress` during the occupancy scan and the chunk-writing loop.
pub fn write_vox_with_progress<W: Write>(
    volume: &Volume,
    options: &WriteOptions,
    mut out: W,
    progress: &mut dyn Progress,
) -> Result<WriteReport, VoxError> {
    options.validate()?;

    let edge = options.region_edge;
    let palette = Palette::build(options.palette.as_deref(), volume);
    let regions = region::occupied_regions(volume, edge, progress);
    let body_len = estimate::body_len(&regions, volume.len(), edge);
    info!(
        "writing {} voxels in {} regions, body of {} bytes",
        volume.len(),
        regions.len(),
        body_len
    );

    out.write_all(MAGIC)?;
    chunk::write_u32(&mut out, VERSION)?;
    chunk::write_header(&mut out, MAIN, 0, body_len as i32)?;

    write_palette(&mut out, &palette)?;
    for id in 1..=PALETTE_CAPACITY as u32 {
        material::write_material(&mut out, id)?;
    }

    let mut voxels_written = 0;
    for (index, &origin) in regions.iter().enumerate() {
        geometry::write_region_size(&mut out, edge)?;
        voxels_written += geometry::write_region_voxels(&mut out, volume, &palette, origin, edge)?;
        progress.report(index as f32 / regions.len() as f32);
    }

    scene::write_root_transform(&mut out)?;
    scene::write_group(&mut out, regions.len() as u32)?;
    for (index, &origin) in regions.iter().enumerate() {
        scene::write_region_transform(&mut out, index as u32, origin, edge)?;
        scene::write_region_shape(&mut out, index as u32)?;
    }

    if voxels_written != volume.len() {
        warn!(
            "voxel count changed during conversion: {} written, {} in source",
            voxels_written,
            volume.len()
        );
    }

    Ok(WriteReport {
        regions: regions.len(),
        voxels_written,
        source_voxels: volume.len(),
        body_len,
    })
}

/// Write the palette chunk: stored colors first, remaining slots padded
/// with transparent black up to the format's 256 entries.
fn write_palette<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    chunk::write_header(out, RGBA, 1024, 0)?;
    for color in palette.colors() {
        out.write_all(&[color.r, color.g, color.b, color.a])?;
    }
    for _ in palette.len()..PALETTE_CAPACITY {
        out.write_all(&[0, 0, 0, 0])?;
    }
    Ok(())
}
