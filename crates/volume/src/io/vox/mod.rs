//! `.vox` scene export: chunk-based binary serialization for volumes
//! of any size.
//!
//! The target format caps each model at a small cubic edge, so a
//! volume is partitioned into fixed-edge cubic regions, each written as
//! its own model and repositioned in world space by a two-level scene
//! graph (root transform → group → per-region transform/shape). The
//! body's total byte length is computed in closed form before anything
//! is emitted, because the MAIN chunk header declares it up front and
//! the format has no way to resynchronize afterwards.
//!
//! # File Structure
//!
//! ```text
//! [Preamble: 20 bytes]
//!   Magic: 'VOX ' (4 bytes)
//!   Version: 150 (4 bytes, little-endian)
//!   MAIN chunk header: tag, payload size 0, child size = body total
//!
//! [Body]
//!   RGBA  palette chunk (12 + 1024 bytes)
//!   MATL  × 256 fixed material chunks
//!   (SIZE, XYZI) × K   per-region bounding box + voxel list
//!   nTRN  root transform
//!   nGRP  group of all region transforms
//!   (nTRN, nSHP) × K   per-region placement + model reference
//! ```
//!
//! Every chunk starts with a 4-byte ASCII tag, a 4-byte little-endian
//! payload size, and a 4-byte child payload size (zero everywhere but
//! MAIN).
//!
//! # Example
//!
//! ```
//! use volume::{write_vox, Volume, Voxel, WriteOptions};
//!
//! let mut volume = Volume::new(8, 8, 8);
//! volume.insert(Voxel::new(3, 0, 2, 0xFFD08030));
//!
//! let mut bytes = Vec::new();
//! let report = write_vox(&volume, &WriteOptions::default(), &mut bytes).unwrap();
//! assert_eq!(report.regions, 1);
//! assert!(report.is_consistent());
//! ```

mod chunk;
mod estimate;
mod geometry;
mod material;
mod region;
mod scene;
mod writer;

use thiserror::Error;

/// Errors surfaced by a write operation.
///
/// Color-resolution misses and palette overflow degrade silently by
/// design; only configuration mistakes and I/O failures are errors.
#[derive(Debug, Error)]
pub enum VoxError {
    /// The region edge cannot be encoded: local coordinates are stored
    /// as single bytes, so the edge must be in `1..=255`.
    #[error("invalid region edge {edge}: must be between 1 and 255")]
    InvalidRegionEdge { edge: u32 },

    /// An explicit palette exceeds the format's 256 color slots.
    #[error("palette has {len} colors, the format allows at most 256")]
    PaletteTooLarge { len: usize },

    /// Writing to the output failed; the file may be left truncated.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// `.vox` format constants
pub mod constants {
    /// File magic tag.
    pub const MAGIC: &[u8; 4] = b"VOX ";

    /// Format version written after the magic.
    pub const VERSION: u32 = 150;

    // Chunk tags
    pub const MAIN: &[u8; 4] = b"MAIN";
    pub const SIZE: &[u8; 4] = b"SIZE";
    pub const XYZI: &[u8; 4] = b"XYZI";
    pub const RGBA: &[u8; 4] = b"RGBA";
    pub const MATL: &[u8; 4] = b"MATL";
    pub const NTRN: &[u8; 4] = b"nTRN";
    pub const NGRP: &[u8; 4] = b"nGRP";
    pub const NSHP: &[u8; 4] = b"nSHP";

    /// Region edge used when the caller does not pick one.
    pub const DEFAULT_REGION_EDGE: u32 = 125;

    /// Largest encodable region edge (local coordinates are one byte).
    pub const MAX_REGION_EDGE: u32 = 255;

    /// Recenter constant subtracted from the X and Z world axes when a
    /// region origin becomes a transform translation.
    pub const WORLD_RECENTER: i32 = 938;
}

// Re-export public API
pub use scene::Rotation;
pub use writer::{write_vox, write_vox_file, write_vox_with_progress, WriteOptions, WriteReport};
