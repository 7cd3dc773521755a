// src/map/lump.rs

use std::fmt;
use std::io::{Cursor, Read};

use crate::error::{Result, WadError};

/// A fixed-size record stored back to back inside one named lump.
pub trait LumpRecord: Sized {
    /// Directory name of the lump holding these records, e.g. `"VERTEXES"`.
    const LUMP_NAME: &'static str;

    /// Size of one record in bytes.
    const SIZE: usize;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self>;
}

/// Decodes a whole lump into its records, in lump order.
///
/// The byte length must be an exact multiple of the record size; anything
/// else is reported as [`WadError::TruncatedLump`] before a single record is
/// read.
pub fn decode_lump<T: LumpRecord>(bytes: &[u8]) -> Result<Vec<T>> {
    if bytes.len() % T::SIZE != 0 {
        return Err(WadError::TruncatedLump {
            lump: T::LUMP_NAME.to_string(),
            len: bytes.len(),
            record_size: T::SIZE,
        });
    }

    let count = bytes.len() / T::SIZE;
    let mut cursor = Cursor::new(bytes);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(T::from_wad(&mut cursor)?);
    }
    Ok(records)
}

/// A wall or flat texture name. A sidedef slot holding `"-"` (or nothing at
/// all) has no texture and is represented as `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture(String);

impl Texture {
    pub fn from_name(name: String) -> Option<Texture> {
        if name.is_empty() || name == "-" {
            None
        } else {
            Some(Texture(name))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decodes an 8-byte name field: everything up to the first NUL, which must
/// be plain ASCII.
pub fn decode_name8(buf: &[u8; 8]) -> Result<String> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let raw = &buf[..end];
    if !raw.is_ascii() {
        return Err(WadError::malformed(format!(
            "name field {:?} is not ASCII",
            String::from_utf8_lossy(&buf[..])
        )));
    }
    Ok(raw.iter().map(|&c| c as char).collect())
}

/// Reads exactly 8 bytes of name field.
pub fn read_name8<R: Read>(reader: &mut R) -> Result<String> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    decode_name8(&buf)
}

/// Writes an 8-byte name field, zero-padded if shorter, truncated if longer.
#[cfg(test)]
pub(crate) fn write_name8<W: std::io::Write>(writer: &mut W, name: &str) -> std::io::Result<()> {
    let mut buf = [0u8; 8];
    for (i, &b) in name.as_bytes().iter().take(8).enumerate() {
        buf[i] = b;
    }
    writer.write_all(&buf)
}
