// Material catalog: 256 chunks with one constant attribute set

use super::chunk;
use super::constants::MATL;
use std::io::{self, Write};

/// Attribute set shared by every material slot; only the numeric id
/// differs between chunks.
pub(crate) const MATERIAL_PROPERTIES: [(&str, &str); 12] = [
    ("_type", "_diffuse"),
    ("_weight", "1"),
    ("_rough", "0.1"),
    ("_spec", "0.5"),
    ("_spec_p", "0.5"),
    ("_ior", "0.3"),
    ("_att", "0"),
    ("_g0", "-0.5"),
    ("_g1", "0.8"),
    ("_gw", "0.7"),
    ("_flux", "0"),
    ("_ldr", "0"),
];

fn dict_len() -> u32 {
    MATERIAL_PROPERTIES
        .iter()
        .map(|&(key, value)| chunk::dict_entry_len(key, value))
        .sum()
}

/// Total bytes of one material chunk, header included. Derived from the
/// attribute table so the size estimate can never drift from what
/// [`write_material`] emits.
pub(crate) fn chunk_len() -> u32 {
    12 + 8 + dict_len()
}

/// Write the material chunk for one slot (1-based id).
pub(crate) fn write_material<W: Write>(out: &mut W, id: u32) -> io::Result<()> {
    chunk::write_header(out, MATL, (8 + dict_len()) as i32, 0)?;
    chunk::write_u32(out, id)?;
    chunk::write_u32(out, MATERIAL_PROPERTIES.len() as u32)?;
    for (key, value) in MATERIAL_PROPERTIES {
        chunk::write_dict_entry(out, key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_len_is_constant_206() {
        assert_eq!(chunk_len(), 206);
    }

    #[test]
    fn written_bytes_match_chunk_len() {
        let mut bytes = Vec::new();
        write_material(&mut bytes, 1).unwrap();
        assert_eq!(bytes.len() as u32, chunk_len());
    }

    #[test]
    fn id_lands_after_header() {
        let mut bytes = Vec::new();
        write_material(&mut bytes, 256).unwrap();
        assert_eq!(&bytes[12..16], &256u32.to_le_bytes());
    }
}
