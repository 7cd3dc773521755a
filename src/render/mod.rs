// src/render/mod.rs
mod description;

pub use self::description::{describe_room, render_level, write_level, RoomDescription};
