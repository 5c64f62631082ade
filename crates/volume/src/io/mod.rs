// Input/Output: scene serialization

pub mod vox;

// Re-export main entry points
pub use vox::{
    write_vox, write_vox_file, write_vox_with_progress, VoxError, WriteOptions, WriteReport,
};
