// src/lib.rs

pub mod catalog;
pub mod error;
pub mod level;
pub mod map;
pub mod render;
pub mod utils;
pub mod wad;

#[cfg(test)]
mod fixtures;

pub use error::{CatalogError, Result, WadError};
