// src/map/thing.rs
use std::io::Read;
use byteorder::{LE, ReadBytesExt};

use super::lump::LumpRecord;
use crate::error::Result;

/// A point entity from the `THINGS` lump (10 bytes). Belongs to no room
/// until the level is classified.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    pub x: i32,
    pub y: i32,
    pub angle: i32,
    pub thing_type: i32,
    /// Skill and multiplayer visibility bits.
    pub flags: u16,
}

impl Thing {
    #[cfg(test)]
    pub(crate) fn to_wad<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        use byteorder::WriteBytesExt;
        writer.write_i16::<LE>(self.x as i16)?;
        writer.write_i16::<LE>(self.y as i16)?;
        writer.write_i16::<LE>(self.angle as i16)?;
        writer.write_i16::<LE>(self.thing_type as i16)?;
        writer.write_u16::<LE>(self.flags)
    }
}

impl LumpRecord for Thing {
    const LUMP_NAME: &'static str = "THINGS";
    const SIZE: usize = 10;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Thing {
            x: reader.read_i16::<LE>()? as i32,
            y: reader.read_i16::<LE>()? as i32,
            angle: reader.read_i16::<LE>()? as i32,
            thing_type: reader.read_i16::<LE>()? as i32,
            flags: reader.read_u16::<LE>()?,
        })
    }
}
