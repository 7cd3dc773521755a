// src/level/room.rs

use std::collections::HashSet;

use crate::map::{LineDef, Sector, Side, SideDef, Texture, Thing, Vertex};
use crate::utils::geometry::{point_in_polygon, point_in_segments};

/// How a room decides whether it contains a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Containment {
    /// Even-odd test over the room's unique vertices, taken as one ring in
    /// first-seen order. The ring is not guaranteed to follow the real
    /// boundary walk, so this is an approximation; it is wrong for sectors
    /// made of more than one loop.
    #[default]
    VertexSet,
    /// Even-odd test over the room's attached wall segments.
    Boundary,
}

/// One side of a linedef attached to a room, with that side's textures.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Index of the linedef in the `LINEDEFS` lump.
    pub linedef_index: usize,
    pub linedef: LineDef,
    pub side: Side,
    pub start: Vertex,
    pub end: Vertex,
    pub upper: Option<Texture>,
    pub middle: Option<Texture>,
    pub lower: Option<Texture>,
}

impl Wall {
    /// Present textures in display order: upper, middle, lower.
    pub fn textures(&self) -> impl Iterator<Item = &Texture> {
        [&self.upper, &self.middle, &self.lower].into_iter().flatten()
    }
}

/// A sector together with the geometry and things that belong to it.
#[derive(Debug, Clone)]
pub struct Room {
    /// Index of the source sector.
    pub id: usize,
    pub sector: Sector,
    vertices: Vec<Vertex>,
    seen: HashSet<Vertex>,
    walls: Vec<Wall>,
    things: Vec<Thing>,
}

impl Room {
    pub fn new(id: usize, sector: Sector) -> Self {
        Room {
            id,
            sector,
            vertices: Vec::new(),
            seen: HashSet::new(),
            walls: Vec::new(),
            things: Vec::new(),
        }
    }

    /// Adds a vertex unless an equal one is already present. Returns true
    /// if it was new.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.seen.insert(vertex) {
            self.vertices.push(vertex);
            true
        } else {
            false
        }
    }

    /// Attaches one side of a linedef, recording that side's textures and
    /// both endpoints.
    pub fn add_wall(
        &mut self,
        linedef_index: usize,
        linedef: &LineDef,
        side: Side,
        sidedef: &SideDef,
        start: Vertex,
        end: Vertex,
    ) {
        self.add_vertex(start);
        self.add_vertex(end);
        self.walls.push(Wall {
            linedef_index,
            linedef: linedef.clone(),
            side,
            start,
            end,
            upper: sidedef.upper_tex.clone(),
            middle: sidedef.mid_tex.clone(),
            lower: sidedef.lower_tex.clone(),
        });
    }

    pub fn add_thing(&mut self, thing: Thing) {
        self.things.push(thing);
    }

    /// Unique vertices in first-seen order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// A room needs at least three distinct vertices to enclose anything.
    pub fn is_enclosed(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn contains(&self, x: i32, y: i32, containment: Containment) -> bool {
        if !self.is_enclosed() {
            return false;
        }
        match containment {
            Containment::VertexSet => point_in_polygon(x, y, &self.vertices),
            Containment::Boundary => {
                point_in_segments(x, y, self.walls.iter().map(|w| (&w.start, &w.end)))
            }
        }
    }
}
