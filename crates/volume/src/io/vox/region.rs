// Region partitioning: fixed-edge cubes over the volume's bounding grid

use crate::core::{Progress, Volume};
use glam::IVec3;
use tracing::debug;

/// The bounding grid of candidate regions for a volume at a given edge.
///
/// Each axis spans `ceil(extent / edge) + 1` cells. The trailing cell
/// sits past the volume's extent and is always empty, so it never
/// materializes a region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionGrid {
    width: u32,
    height: u32,
    length: u32,
    edge: u32,
}

impl RegionGrid {
    pub(crate) fn new(volume: &Volume, edge: u32) -> Self {
        Self {
            width: volume.width().div_ceil(edge) + 1,
            height: volume.height().div_ceil(edge) + 1,
            length: volume.length().div_ceil(edge) + 1,
            edge,
        }
    }

    pub(crate) fn cell_count(&self) -> u32 {
        self.width * self.length * self.height
    }

    /// World origin of the cell at a linear index: x varies fastest,
    /// then y, then z.
    pub(crate) fn origin(&self, index: u32) -> IVec3 {
        let x = index % self.width;
        let y = (index / self.width) % self.height;
        let z = index / (self.width * self.height);
        IVec3::new(
            (x * self.edge) as i32,
            (y * self.edge) as i32,
            (z * self.edge) as i32,
        )
    }
}

/// Collect the world origins of all occupied regions in visitation
/// order.
///
/// The position of an origin in the returned list is the region's
/// index, the sole source of every scene-graph node id downstream.
pub(crate) fn occupied_regions(
    volume: &Volume,
    edge: u32,
    progress: &mut dyn Progress,
) -> Vec<IVec3> {
    let grid = RegionGrid::new(volume, edge);
    let cells = grid.cell_count();
    debug!("scanning {} candidate regions", cells);

    let mut origins = Vec::new();
    for index in 0..cells {
        let origin = grid.origin(index);
        if region_is_occupied(volume, origin, edge) {
            origins.push(origin);
        }
        progress.report(index as f32 / cells as f32);
    }

    debug!("{} occupied regions", origins.len());
    origins
}

/// Occupancy test: bounded scan of the region cube intersected with the
/// volume's extents, short-circuiting on the first stored voxel.
fn region_is_occupied(volume: &Volume, origin: IVec3, edge: u32) -> bool {
    let edge = edge as i32;
    let y_end = (origin.y + edge).min(volume.height() as i32);
    let z_end = (origin.z + edge).min(volume.length() as i32);
    let x_end = (origin.x + edge).min(volume.width() as i32);

    for y in origin.y..y_end {
        for z in origin.z..z_end {
            for x in origin.x..x_end {
                if volume.contains(IVec3::new(x, y, z)) {
                    return true;
                }
            }
        }
    }
    false
}
