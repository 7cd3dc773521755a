// src/wad/mod.rs
mod wad_file;

pub use self::wad_file::{LumpEntry, WadFile, WadKind};
