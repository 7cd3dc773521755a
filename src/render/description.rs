// src/render/description.rs

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::catalog::{TextureCatalog, ThingTypeCatalog};
use crate::error::Result;
use crate::level::{Room, Wall};

/// Renders one room as a text block:
///
/// ```text
/// <ROOM 0 FLOOR0_1/CEIL1_1>
/// FLOOR HEIGHT: 0, CEILING HEIGHT: 128
/// Floor: Unknown texture FLOOR0_1
/// Ceiling: Unknown texture CEIL1_1
/// Walls:
///  - Right: STARTAN3
/// Things:
///  - Unknown type 1 at (5, 5)
/// ```
///
/// Walls are listed by raw texture name; the floor, ceiling and things go
/// through the catalogs. The output depends only on its inputs.
pub fn describe_room(room: &Room, textures: &TextureCatalog, thing_types: &ThingTypeCatalog) -> String {
    RoomDescription { room, textures, thing_types }.to_string()
}

/// A room paired with the catalogs used to describe it.
pub struct RoomDescription<'a> {
    pub room: &'a Room,
    pub textures: &'a TextureCatalog,
    pub thing_types: &'a ThingTypeCatalog,
}

impl fmt::Display for RoomDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let room = self.room;
        let sector = &room.sector;

        writeln!(f, "<ROOM {} {}/{}>", room.id, sector.floor_tex, sector.ceiling_tex)?;
        writeln!(
            f,
            "FLOOR HEIGHT: {}, CEILING HEIGHT: {}",
            sector.floor_height, sector.ceiling_height
        )?;
        writeln!(f, "Floor: {}", self.textures.describe(&sector.floor_tex))?;
        writeln!(f, "Ceiling: {}", self.textures.describe(&sector.ceiling_tex))?;

        writeln!(f, "Walls:")?;
        for wall in room.walls() {
            writeln!(f, " - {}", wall_summary(wall))?;
        }

        writeln!(f, "Things:")?;
        for thing in room.things() {
            writeln!(
                f,
                " - {} at ({}, {})",
                self.thing_types.describe(thing.thing_type),
                thing.x,
                thing.y
            )?;
        }
        Ok(())
    }
}

/// `Right: UPPER, MIDDLE, LOWER` with empty slots left out.
fn wall_summary(wall: &Wall) -> String {
    let names: Vec<&str> = wall.textures().map(|t| t.name()).collect();
    if names.is_empty() {
        format!("{}: none", wall.side.label())
    } else {
        format!("{}: {}", wall.side.label(), names.join(", "))
    }
}

/// All rooms in sector order, each block followed by a blank line.
pub fn render_level(rooms: &[Room], textures: &TextureCatalog, thing_types: &ThingTypeCatalog) -> String {
    let mut out = String::new();
    for room in rooms {
        let block = describe_room(room, textures, thing_types);
        debug!("{}", block);
        out.push_str(&block);
        out.push('\n');
    }
    out
}

/// Renders the whole level in memory, then writes it out in one go.
pub fn write_level<P: AsRef<Path>>(
    path: P,
    rooms: &[Room],
    textures: &TextureCatalog,
    thing_types: &ThingTypeCatalog,
) -> Result<()> {
    let text = render_level(rooms, textures, thing_types);
    fs::write(path.as_ref(), text)?;
    info!("Room descriptions written to {}", path.as_ref().display());
    Ok(())
}
