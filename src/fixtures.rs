// src/fixtures.rs
// Test-only helpers for building WAD images out of typed records.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::map::{LineDef, Sector, SideDef, Texture, Thing, Vertex};

static NEXT_TEMP: AtomicUsize = AtomicUsize::new(0);

/// A unique path under the system temp directory.
pub fn temp_wad_path(name: &str) -> PathBuf {
    let n = NEXT_TEMP.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "wad_rooms_{}_{}_{}.wad",
        std::process::id(),
        name,
        n
    ))
}

/// Lays lumps out back to back after the header, followed by the directory.
pub struct WadBuilder {
    magic: [u8; 4],
    lumps: Vec<(String, Vec<u8>)>,
}

impl WadBuilder {
    pub fn iwad() -> Self {
        WadBuilder { magic: *b"IWAD", lumps: Vec::new() }
    }

    pub fn pwad() -> Self {
        WadBuilder { magic: *b"PWAD", lumps: Vec::new() }
    }

    pub fn lump(mut self, name: &str, data: Vec<u8>) -> Self {
        self.lumps.push((name.to_string(), data));
        self
    }

    /// Adds the five level lumps.
    pub fn level(self, level: &TestLevel) -> Self {
        self.lump("VERTEXES", encode(&level.vertices, |r, out| r.to_wad(out)))
            .lump("LINEDEFS", encode(&level.linedefs, |r, out| r.to_wad(out)))
            .lump("SIDEDEFS", encode(&level.sidedefs, |r, out| r.to_wad(out)))
            .lump("SECTORS", encode(&level.sectors, |r, out| r.to_wad(out)))
            .lump("THINGS", encode(&level.things, |r, out| r.to_wad(out)))
    }

    pub fn build(&self) -> Vec<u8> {
        let data_len: usize = self.lumps.iter().map(|(_, data)| data.len()).sum();
        let dir_offset = 12 + data_len;

        let mut out = Vec::with_capacity(dir_offset + self.lumps.len() * 16);
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&(self.lumps.len() as u32).to_le_bytes());
        out.extend_from_slice(&(dir_offset as u32).to_le_bytes());

        let mut entries = Vec::with_capacity(self.lumps.len() * 16);
        for (name, data) in &self.lumps {
            entries.extend_from_slice(&(out.len() as u32).to_le_bytes());
            entries.extend_from_slice(&(data.len() as u32).to_le_bytes());
            let mut name_buf = [0u8; 8];
            for (i, &b) in name.as_bytes().iter().take(8).enumerate() {
                name_buf[i] = b;
            }
            entries.extend_from_slice(&name_buf);
            out.extend_from_slice(data);
        }
        out.extend(entries);
        out
    }

    pub fn write_temp(&self, name: &str) -> PathBuf {
        let path = temp_wad_path(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

fn encode<T, F>(records: &[T], write: F) -> Vec<u8>
where
    F: Fn(&T, &mut Vec<u8>) -> std::io::Result<()>,
{
    let mut out = Vec::new();
    for record in records {
        write(record, &mut out).unwrap();
    }
    out
}

/// Typed level records, built up with the helpers below.
#[derive(Default, Clone)]
pub struct TestLevel {
    pub vertices: Vec<Vertex>,
    pub linedefs: Vec<LineDef>,
    pub sidedefs: Vec<SideDef>,
    pub sectors: Vec<Sector>,
    pub things: Vec<Thing>,
}

impl TestLevel {
    pub fn add_sector(&mut self, floor_tex: &str, ceiling_tex: &str) -> usize {
        self.sectors.push(Sector {
            floor_height: 0,
            ceiling_height: 128,
            floor_tex: floor_tex.to_string(),
            ceiling_tex: ceiling_tex.to_string(),
            light: 160,
            sector_type: 0,
            tag: 0,
        });
        self.sectors.len() - 1
    }

    pub fn add_vertex(&mut self, x: i32, y: i32) -> usize {
        self.vertices.push(Vertex::new(x, y));
        self.vertices.len() - 1
    }

    pub fn add_sidedef(&mut self, sector: usize, mid_tex: &str) -> usize {
        self.sidedefs.push(SideDef {
            x_offset: 0,
            y_offset: 0,
            upper_tex: None,
            lower_tex: None,
            mid_tex: Texture::from_name(mid_tex.to_string()),
            sector,
        });
        self.sidedefs.len() - 1
    }

    pub fn add_linedef(&mut self, start: usize, end: usize, right: usize, left: Option<usize>) -> usize {
        self.linedefs.push(LineDef {
            start,
            end,
            flags: if left.is_some() { 4 } else { 1 },
            line_type: 0,
            tag: 0,
            right,
            left,
        });
        self.linedefs.len() - 1
    }

    /// A closed loop of one-sided walls facing `sector`, walked in the given
    /// vertex order.
    pub fn add_loop(&mut self, sector: usize, points: &[(i32, i32)], mid_tex: &str) {
        let first = self.vertices.len();
        for &(x, y) in points {
            self.add_vertex(x, y);
        }
        for i in 0..points.len() {
            let start = first + i;
            let end = first + (i + 1) % points.len();
            let side = self.add_sidedef(sector, mid_tex);
            self.add_linedef(start, end, side, None);
        }
    }

    pub fn add_thing(&mut self, x: i32, y: i32, thing_type: i32) {
        self.things.push(Thing { x, y, angle: 0, thing_type, flags: 7 });
    }

    /// One 10x10 sector with floor `FLOOR0_1`, ceiling `CEIL1_1`, four
    /// one-sided walls and a player start at (5, 5).
    pub fn square_room() -> Self {
        let mut level = TestLevel::default();
        let sector = level.add_sector("FLOOR0_1", "CEIL1_1");
        level.add_loop(sector, &[(0, 0), (10, 0), (10, 10), (0, 10)], "STARTAN3");
        level.add_thing(5, 5, 1);
        level
    }
}
