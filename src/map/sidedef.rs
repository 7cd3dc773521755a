// src/map/sidedef.rs

use std::io::Read;
use byteorder::{LE, ReadBytesExt};

use super::lump::{read_name8, LumpRecord, Texture};
use crate::error::Result;

/// A sidedef in classic DOOM format (30 bytes total).
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field       type / size
/// ------  ----------  ------------
///  0-1    x_offset    i16
///  2-3    y_offset    i16
///  4-11   upper_tex   [u8; 8]
/// 12-19   lower_tex   [u8; 8]
/// 20-27   mid_tex     [u8; 8]
/// 28-29   sector      u16  (index into sector list)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SideDef {
    /// Horizontal texture offset (signed 16-bit in a WAD).
    pub x_offset: i32,

    /// Vertical texture offset (signed 16-bit in a WAD).
    pub y_offset: i32,

    /// Upper texture, `None` when the slot holds `"-"`.
    pub upper_tex: Option<Texture>,

    /// Lower texture, `None` when the slot holds `"-"`.
    pub lower_tex: Option<Texture>,

    /// Middle (a.k.a. "mid" or "normal") texture.
    pub mid_tex: Option<Texture>,

    /// Sector this side faces. Not range-checked until the level is assembled.
    pub sector: usize,
}

impl SideDef {
    /// Writes this sidedef in the 30-byte classic format. Empty slots are
    /// written back as `"-"`.
    #[cfg(test)]
    pub(crate) fn to_wad<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        use super::lump::write_name8;
        use byteorder::WriteBytesExt;

        writer.write_i16::<LE>(self.x_offset as i16)?;
        writer.write_i16::<LE>(self.y_offset as i16)?;
        for tex in [&self.upper_tex, &self.lower_tex, &self.mid_tex] {
            write_name8(writer, tex.as_ref().map_or("-", |t| t.name()))?;
        }
        writer.write_u16::<LE>(self.sector as u16)
    }
}

impl LumpRecord for SideDef {
    const LUMP_NAME: &'static str = "SIDEDEFS";
    const SIZE: usize = 30;

    /// Reads a `SideDef` from the 30-byte classic format. Texture names are
    /// cut at the first NUL; `"-"` becomes `None`.
    fn from_wad<R: Read>(reader: &mut R) -> Result<Self> {
        let x_offset = reader.read_i16::<LE>()? as i32;
        let y_offset = reader.read_i16::<LE>()? as i32;

        let upper_tex = Texture::from_name(read_name8(reader)?);
        let lower_tex = Texture::from_name(read_name8(reader)?);
        let mid_tex   = Texture::from_name(read_name8(reader)?);

        let sector = reader.read_u16::<LE>()? as usize;

        Ok(SideDef {
            x_offset,
            y_offset,
            upper_tex,
            lower_tex,
            mid_tex,
            sector,
        })
    }
}
