// src/level/mod.rs
mod assembler;
mod classifier;
mod room;

pub use assembler::assemble_rooms;
pub use classifier::classify_things;
pub use room::{Containment, Room, Wall};

use log::info;

use crate::error::Result;
use crate::map::{LineDef, Sector, SideDef, Thing, Vertex};
use crate::wad::WadFile;

/// A rebuilt level: every room with its walls and things, plus the things
/// that could not be placed in any room.
#[derive(Debug, Clone)]
pub struct Level {
    /// Indexed by sector number.
    pub rooms: Vec<Room>,
    pub unassigned: Vec<Thing>,
}

impl Level {
    /// Reads the five level lumps, assembles the rooms, then classifies the
    /// things. Assembly completes before any thing is placed.
    pub fn load(wad: &WadFile, containment: Containment) -> Result<Self> {
        let vertices: Vec<Vertex> = wad.read_records()?;
        let linedefs: Vec<LineDef> = wad.read_records()?;
        let sidedefs: Vec<SideDef> = wad.read_records()?;
        let sectors: Vec<Sector> = wad.read_records()?;
        let things: Vec<Thing> = wad.read_records()?;

        let mut rooms = assemble_rooms(&vertices, &linedefs, &sidedefs, &sectors)?;
        let unassigned = classify_things(&mut rooms, things, containment);

        info!(
            "Rebuilt {} rooms from {} linedefs; {} things unassigned",
            rooms.len(),
            linedefs.len(),
            unassigned.len()
        );
        Ok(Level { rooms, unassigned })
    }
}
