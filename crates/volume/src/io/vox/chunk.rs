// Chunk primitives shared by every encoder

use std::io::{self, Write};

/// Write a chunk header: 4-byte tag, payload size, child payload size.
pub(crate) fn write_header<W: Write>(
    out: &mut W,
    tag: &[u8; 4],
    payload: i32,
    children: i32,
) -> io::Result<()> {
    out.write_all(tag)?;
    write_i32(out, payload)?;
    write_i32(out, children)
}

pub(crate) fn write_i32<W: Write>(out: &mut W, value: i32) -> io::Result<()> {
    out.write_all(&value.to_le_bytes())
}

pub(crate) fn write_u32<W: Write>(out: &mut W, value: u32) -> io::Result<()> {
    out.write_all(&value.to_le_bytes())
}

/// Write one DICT key/value pair: each string is length-prefixed with a
/// 4-byte little-endian count, no terminator.
pub(crate) fn write_dict_entry<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    write_u32(out, key.len() as u32)?;
    out.write_all(key.as_bytes())?;
    write_u32(out, value.len() as u32)?;
    out.write_all(value.as_bytes())
}

/// Byte length of one DICT key/value pair as written above.
pub(crate) fn dict_entry_len(key: &str, value: &str) -> u32 {
    8 + key.len() as u32 + value.len() as u32
}
