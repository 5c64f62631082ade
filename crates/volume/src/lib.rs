//! Voxel volume container and `.vox` scene export.
//!
//! The `core` module holds the data model: a bounded [`Volume`] of
//! colored [`Voxel`]s with O(1) coordinate lookup, and the [`Palette`]
//! built from it. The `io::vox` module serializes a volume into a
//! chunk-based `.vox` scene, splitting oversized volumes into cubic
//! regions positioned by a two-level scene graph.
//!
//! # Example
//!
//! ```
//! use volume::{write_vox, Volume, Voxel, WriteOptions};
//!
//! let mut volume = Volume::new(2, 2, 2);
//! volume.insert(Voxel::new(0, 0, 0, 0xFF336699));
//!
//! let mut bytes = Vec::new();
//! let report = write_vox(&volume, &WriteOptions::default(), &mut bytes).unwrap();
//! assert_eq!(report.voxels_written, 1);
//! ```

pub mod core;
pub mod io;

pub use crate::core::{Palette, Progress, ProgressFn, Rgba, SilentProgress, Volume, Voxel};
pub use crate::io::vox::{
    write_vox, write_vox_file, write_vox_with_progress, Rotation, VoxError, WriteOptions,
    WriteReport,
};

// Re-export glam for convenience
pub use glam;
