// src/map/sector.rs

use std::io::Read;
use byteorder::{LE, ReadBytesExt};

use super::lump::{read_name8, LumpRecord};
use crate::error::Result;

/// A sector in classic DOOM format (26 bytes).
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field          type / size
/// ------  -------------  ------------
///  0-1    floor_height   i16
///  2-3    ceiling_height i16
///  4-11   floor_tex      [u8; 8]
/// 12-19   ceiling_tex    [u8; 8]
/// 20-21   light_level    i16
/// 22-23   special_type   i16
/// 24-25   tag            i16
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    /// The floor height (in map units).
    pub floor_height: i32,

    /// The ceiling height (in map units).
    pub ceiling_height: i32,

    /// The name of the floor flat, cut at the first NUL.
    pub floor_tex: String,

    /// The name of the ceiling flat.
    pub ceiling_tex: String,

    /// Light level (nominally 0-255).
    pub light: i32,

    /// Special type (a.k.a. "effect" or "sector type").
    pub sector_type: i32,

    /// Sector tag, used to link linedefs, etc.
    pub tag: i32,
}

impl Sector {
    /// Returns the difference between ceiling and floor height.
    pub fn headroom(&self) -> i32 {
        self.ceiling_height - self.floor_height
    }

    #[cfg(test)]
    pub(crate) fn to_wad<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        use super::lump::write_name8;
        use byteorder::WriteBytesExt;

        writer.write_i16::<LE>(self.floor_height as i16)?;
        writer.write_i16::<LE>(self.ceiling_height as i16)?;
        write_name8(writer, &self.floor_tex)?;
        write_name8(writer, &self.ceiling_tex)?;
        writer.write_i16::<LE>(self.light as i16)?;
        writer.write_i16::<LE>(self.sector_type as i16)?;
        writer.write_i16::<LE>(self.tag as i16)
    }
}

impl LumpRecord for Sector {
    const LUMP_NAME: &'static str = "SECTORS";
    const SIZE: usize = 26;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self> {
        let floor_height = reader.read_i16::<LE>()? as i32;
        let ceiling_height = reader.read_i16::<LE>()? as i32;
        let floor_tex = read_name8(reader)?;
        let ceiling_tex = read_name8(reader)?;
        let light = reader.read_i16::<LE>()? as i32;
        let sector_type = reader.read_i16::<LE>()? as i32;
        let tag = reader.read_i16::<LE>()? as i32;

        Ok(Sector {
            floor_height,
            ceiling_height,
            floor_tex,
            ceiling_tex,
            light,
            sector_type,
            tag,
        })
    }
}
