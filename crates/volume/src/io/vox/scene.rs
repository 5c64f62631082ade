// Scene graph chunks: root transform, group, per-region transform/shape

use super::chunk;
use super::constants::{NGRP, NSHP, NTRN, WORLD_RECENTER};
use glam::IVec3;
use std::io::{self, Write};

/// Packed rotation byte in the format's row-permutation encoding: bits
/// 0-1 index the nonzero column of the matrix's first row, bits 2-3 the
/// second row, bits 4-6 carry the three row signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rotation {
    /// Identity orientation.
    PxPyPz = 4,
    /// Rows +Z, +X, +Y: the axis remap between schematic space
    /// (Y up) and the format's Z-up space.
    PzPxPy = 2,
}

impl Rotation {
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Decimal string written into the `_r` transform attribute. Its
    /// byte length feeds the size estimate, so it is measured wherever
    /// sizes are computed, never assumed to be one digit.
    pub fn to_decimal(self) -> String {
        (self as u8).to_string()
    }
}

/// Fixed orientation applied to every region model.
pub(crate) const EXPORT_ROTATION: Rotation = Rotation::PzPxPy;

/// Node id of the region transform at `index`.
pub(crate) fn transform_id(index: u32) -> i32 {
    (2 * index + 2) as i32
}

/// Node id of the region shape at `index`.
pub(crate) fn shape_id(index: u32) -> i32 {
    (2 * index + 3) as i32
}

/// Translation attribute for a region origin.
///
/// The axes are permuted to the format's (Z, X, Y) order; X and Z are
/// recentered by [`WORLD_RECENTER`] and the up axis is lifted by one
/// region edge. This remap is a format requirement; a wrong constant
/// here still parses, it just places every region at the wrong world
/// position.
pub(crate) fn world_pos_string(origin: IVec3, edge: u32) -> String {
    let x = origin.x - WORLD_RECENTER;
    let z = origin.z - WORLD_RECENTER;
    let y = origin.y + edge as i32;
    format!("{} {} {}", z, x, y)
}

/// Write the root transform node: id 0, pointing at the group node.
pub(crate) fn write_root_transform<W: Write>(out: &mut W) -> io::Result<()> {
    chunk::write_header(out, NTRN, 28, 0)?;
    chunk::write_i32(out, 0)?; // node id
    chunk::write_i32(out, 0)?; // attribute DICT: empty
    chunk::write_i32(out, 1)?; // child: the group node
    chunk::write_i32(out, -1)?; // reserved
    chunk::write_i32(out, 0)?; // layer
    chunk::write_i32(out, 1)?; // frame count
    chunk::write_i32(out, 0) // frame DICT: empty
}

/// Write the group node listing every region transform as a child.
pub(crate) fn write_group<W: Write>(out: &mut W, region_count: u32) -> io::Result<()> {
    chunk::write_header(out, NGRP, 16 + 4 * (region_count as i32 - 1), 0)?;
    chunk::write_i32(out, 1)?; // node id
    chunk::write_i32(out, 0)?; // attribute DICT: empty
    chunk::write_u32(out, region_count)?;
    for index in 0..region_count {
        chunk::write_i32(out, transform_id(index))?;
    }
    Ok(())
}

/// Write the transform node placing region `index` in world space.
pub(crate) fn write_region_transform<W: Write>(
    out: &mut W,
    index: u32,
    origin: IVec3,
    edge: u32,
) -> io::Result<()> {
    let rotation = EXPORT_ROTATION.to_decimal();
    let translation = world_pos_string(origin, edge);
    let payload = 48 + rotation.len() as i32 + translation.len() as i32;

    chunk::write_header(out, NTRN, payload, 0)?;
    chunk::write_i32(out, transform_id(index))?;
    chunk::write_i32(out, 0)?; // attribute DICT: empty
    chunk::write_i32(out, shape_id(index))?;
    chunk::write_i32(out, -1)?; // reserved
    chunk::write_i32(out, -1)?; // layer
    chunk::write_i32(out, 1)?; // frame count
    chunk::write_i32(out, 2)?; // frame DICT: rotation + translation
    chunk::write_dict_entry(out, "_r", &rotation)?;
    chunk::write_dict_entry(out, "_t", &translation)
}

/// Write the shape node binding region `index` to model `index`.
pub(crate) fn write_region_shape<W: Write>(out: &mut W, index: u32) -> io::Result<()> {
    chunk::write_header(out, NSHP, 20, 0)?;
    chunk::write_i32(out, shape_id(index))?;
    chunk::write_i32(out, 0)?; // attribute DICT: empty
    chunk::write_i32(out, 1)?; // model count
    chunk::write_i32(out, index as i32)?;
    chunk::write_i32(out, 0) // model DICT: empty
}
