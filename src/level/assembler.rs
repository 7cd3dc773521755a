// src/level/assembler.rs

use log::debug;

use super::room::Room;
use crate::error::{Result, WadError};
use crate::map::{LineDef, Sector, SideDef, Vertex};

/// Builds one room per sector and attaches every linedef side to the room
/// its sidedef faces.
///
/// Rooms are returned indexed by sector number. Linedefs are walked in lump
/// order, right side before left, so a two-sided line shows up once in each
/// bordering room (twice in the same room when both sides face it).
///
/// Any dangling reference (vertex, sidedef or sector index out of range)
/// aborts the whole assembly.
pub fn assemble_rooms(
    vertices: &[Vertex],
    linedefs: &[LineDef],
    sidedefs: &[SideDef],
    sectors: &[Sector],
) -> Result<Vec<Room>> {
    let mut rooms: Vec<Room> = sectors
        .iter()
        .enumerate()
        .map(|(id, sector)| Room::new(id, sector.clone()))
        .collect();

    for (index, line) in linedefs.iter().enumerate() {
        let start = vertex_at(vertices, index, line.start)?;
        let end = vertex_at(vertices, index, line.end)?;

        for (side, sidedef_index) in line.sides() {
            let sidedef = sidedefs.get(sidedef_index).ok_or_else(|| {
                WadError::malformed(format!(
                    "linedef {} {} side references sidedef {} of {}",
                    index,
                    side.label().to_lowercase(),
                    sidedef_index,
                    sidedefs.len()
                ))
            })?;
            let room = rooms.get_mut(sidedef.sector).ok_or_else(|| {
                WadError::malformed(format!(
                    "sidedef {} references sector {} of {}",
                    sidedef_index,
                    sidedef.sector,
                    sectors.len()
                ))
            })?;
            room.add_wall(index, line, side, sidedef, start, end);
        }
    }

    for room in &rooms {
        debug!("Room {} vertices: {:?}", room.id, room.vertices());
    }
    Ok(rooms)
}

fn vertex_at(vertices: &[Vertex], linedef: usize, index: usize) -> Result<Vertex> {
    vertices.get(index).copied().ok_or_else(|| {
        WadError::malformed(format!(
            "linedef {} references vertex {} of {}",
            linedef,
            index,
            vertices.len()
        ))
    })
}
