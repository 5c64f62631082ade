// Per-region geometry: bounding-box chunk + voxel-list chunk

use super::chunk;
use super::constants::{SIZE, XYZI};
use crate::core::{Palette, Volume, Voxel};
use glam::IVec3;
use std::io::{self, Write};

/// Write the fixed-size bounding-box chunk for one region.
pub(crate) fn write_region_size<W: Write>(out: &mut W, edge: u32) -> io::Result<()> {
    chunk::write_header(out, SIZE, 12, 0)?;
    chunk::write_u32(out, edge)?;
    chunk::write_u32(out, edge)?;
    chunk::write_u32(out, edge)
}

/// Write the voxel-list chunk for the region at `origin`.
///
/// Voxels are collected by the same bounded scan as the occupancy test,
/// but exhaustively instead of short-circuiting. Each entry is the
/// local coordinate triple (`coordinate mod edge`, one byte each) and a
/// 1-based color id resolved through the palette. Returns how many
/// voxels the region contained so the writer can run its final count
/// check. Color misses never fail, they degrade to the default id.
pub(crate) fn write_region_voxels<W: Write>(
    out: &mut W,
    volume: &Volume,
    palette: &Palette,
    origin: IVec3,
    edge: u32,
) -> io::Result<usize> {
    let voxels = collect_region_voxels(volume, origin, edge);

    chunk::write_header(out, XYZI, (voxels.len() as i32) * 4 + 4, 0)?;
    chunk::write_u32(out, voxels.len() as u32)?;

    for voxel in &voxels {
        out.write_all(&[
            (voxel.x % edge) as u8,
            (voxel.y % edge) as u8,
            (voxel.z % edge) as u8,
            palette.color_id(voxel),
        ])?;
    }

    Ok(voxels.len())
}

/// All voxels inside the region cube at `origin`, in scan order.
fn collect_region_voxels<'a>(volume: &'a Volume, origin: IVec3, edge: u32) -> Vec<&'a Voxel> {
    let edge = edge as i32;
    let y_end = (origin.y + edge).min(volume.height() as i32);
    let z_end = (origin.z + edge).min(volume.length() as i32);
    let x_end = (origin.x + edge).min(volume.width() as i32);

    let mut voxels = Vec::new();
    for y in origin.y..y_end {
        for z in origin.z..z_end {
            for x in origin.x..x_end {
                if let Some(voxel) = volume.voxel_at(IVec3::new(x, y, z)) {
                    voxels.push(voxel);
                }
            }
        }
    }
    voxels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgba;

    #[test]
    fn collects_only_region_voxels() {
        let mut volume = Volume::new(100, 10, 10);
        volume.insert(Voxel::new(10, 0, 0, 1));
        volume.insert(Voxel::new(60, 0, 0, 2));

        let inside = collect_region_voxels(&volume, IVec3::new(50, 0, 0), 50);
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].x, 60);
    }

    #[test]
    fn local_coordinates_wrap_to_region() {
        let mut volume = Volume::new(100, 10, 10);
        volume.insert(Voxel::new(60, 3, 4, 0xFF101010));
        let palette = Palette::from_colors([Rgba::from(0xFF101010)]);

        let mut bytes = Vec::new();
        let count =
            write_region_voxels(&mut bytes, &volume, &palette, IVec3::new(50, 0, 0), 50).unwrap();

        assert_eq!(count, 1);
        // Header (12) + count (4) + one voxel entry.
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[16..20], &[10, 3, 4, 1]);
    }

    #[test]
    fn unmapped_color_degrades_to_default_id() {
        let mut volume = Volume::new(4, 4, 4);
        volume.insert(Voxel::new(0, 0, 0, 0xFFABCDEF));
        let palette = Palette::from_colors([Rgba::opaque(1, 2, 3)]);

        let mut bytes = Vec::new();
        write_region_voxels(&mut bytes, &volume, &palette, IVec3::new(0, 0, 0), 4).unwrap();
        assert_eq!(bytes[19], 1);
    }
}
