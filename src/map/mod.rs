// src/map/mod.rs
pub mod lump;
pub mod vertex;
pub mod linedef;
pub mod sidedef;
pub mod sector;
pub mod thing;

pub use lump::{decode_lump, LumpRecord, Texture};
pub use vertex::Vertex;
pub use linedef::{LineDef, Side};
pub use sidedef::SideDef;
pub use sector::Sector;
pub use thing::Thing;
