// Closed-form body sizing; must match the encoders byte-for-byte

use super::material;
use super::scene;
use glam::IVec3;

/// Exact byte length of everything after the MAIN chunk header.
///
/// The format has no resynchronization: if this total diverges from the
/// bytes the encoders emit, a reader mis-parses the whole file. Every
/// term mirrors one encoder's output, and the per-region transform term
/// measures the decimal string lengths of the translation and rotation
/// attributes, which vary with digit count and are never constant.
pub(crate) fn body_len(regions: &[IVec3], voxel_count: usize, edge: u32) -> u32 {
    let k = regions.len() as u32;

    let size_chunks = 24 * k;
    let xyzi_chunks = 16 * k + 4 * voxel_count as u32;
    let root_transform = 40;
    let group = 24 + 4 * k;
    let shapes = 32 * k;
    let palette = 12 + 1024;
    let materials = 256 * material::chunk_len();

    let rotation_len = scene::EXPORT_ROTATION.to_decimal().len() as u32;
    let mut transforms = 60 * k;
    for &origin in regions {
        transforms += scene::world_pos_string(origin, edge).len() as u32 + rotation_len;
    }

    size_chunks
        + xyzi_chunks
        + root_transform
        + group
        + transforms
        + shapes
        + palette
        + materials
}
