// Core voxel data structures

pub mod palette;
pub mod progress;
pub mod volume;
pub mod voxel;

// Re-export main types
pub use palette::Palette;
pub use progress::{Progress, ProgressFn, SilentProgress};
pub use volume::Volume;
pub use voxel::{Rgba, Voxel};
