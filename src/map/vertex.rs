// src/map/vertex.rs
use std::io::Read;
use byteorder::{LE, ReadBytesExt};

use super::lump::LumpRecord;
use crate::error::Result;

/// A map-space coordinate from the `VERTEXES` lump (4 bytes: x, y as i16).
/// Its index in the lump is its only identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Vertex { x, y }
    }

    #[cfg(test)]
    pub(crate) fn to_wad<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        use byteorder::WriteBytesExt;
        writer.write_i16::<LE>(self.x as i16)?;
        writer.write_i16::<LE>(self.y as i16)
    }
}

impl LumpRecord for Vertex {
    const LUMP_NAME: &'static str = "VERTEXES";
    const SIZE: usize = 4;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Vertex {
            x: reader.read_i16::<LE>()? as i32,
            y: reader.read_i16::<LE>()? as i32,
        })
    }
}
