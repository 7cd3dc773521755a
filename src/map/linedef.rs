// src/map/linedef.rs
use std::io::Read;
use byteorder::{LE, ReadBytesExt};

use super::lump::LumpRecord;
use crate::error::Result;

/// Sidedef slot value meaning "this side has no sidedef".
const NO_SIDEDEF: u16 = 0xFFFF;

/// Which face of a linedef a sidedef sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Right => "Right",
            Side::Left => "Left",
        }
    }
}

/// A wall segment from the `LINEDEFS` lump (14 bytes).
///
/// ```text
///  0-1   start vertex  (u16)
///  2-3   end vertex    (u16)
///  4-5   flags         (i16)
///  6-7   special type  (i16)
///  8-9   tag           (i16)
/// 10-11  right sidedef (u16)
/// 12-13  left sidedef  (u16, 0xFFFF = none)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineDef {
    pub start: usize,
    pub end: usize,
    pub flags: i32,
    pub line_type: i32,
    pub tag: i32,
    /// Always present in a well-formed map; validated when the level is assembled.
    pub right: usize,
    pub left: Option<usize>,
}

impl LineDef {
    /// A one-sided line borders exactly one room.
    pub fn is_one_sided(&self) -> bool {
        self.left.is_none()
    }

    /// The sidedefs of this line, right side first.
    pub fn sides(&self) -> impl Iterator<Item = (Side, usize)> + '_ {
        std::iter::once((Side::Right, self.right))
            .chain(self.left.map(|left| (Side::Left, left)))
    }

    #[cfg(test)]
    pub(crate) fn to_wad<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        use byteorder::WriteBytesExt;
        writer.write_u16::<LE>(self.start as u16)?;
        writer.write_u16::<LE>(self.end as u16)?;
        writer.write_i16::<LE>(self.flags as i16)?;
        writer.write_i16::<LE>(self.line_type as i16)?;
        writer.write_i16::<LE>(self.tag as i16)?;
        writer.write_u16::<LE>(self.right as u16)?;
        writer.write_u16::<LE>(self.left.map_or(NO_SIDEDEF, |left| left as u16))
    }
}

impl LumpRecord for LineDef {
    const LUMP_NAME: &'static str = "LINEDEFS";
    const SIZE: usize = 14;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self> {
        let start = reader.read_u16::<LE>()? as usize;
        let end = reader.read_u16::<LE>()? as usize;
        let flags = reader.read_i16::<LE>()? as i32;
        let line_type = reader.read_i16::<LE>()? as i32;
        let tag = reader.read_i16::<LE>()? as i32;
        let right = reader.read_u16::<LE>()? as usize;
        let left = match reader.read_u16::<LE>()? {
            NO_SIDEDEF => None,
            index => Some(index as usize),
        };

        Ok(LineDef {
            start,
            end,
            flags,
            line_type,
            tag,
            right,
            left,
        })
    }
}
