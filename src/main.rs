#![warn(non_snake_case)]
//! # wad-rooms Entry Point
//!
//! Reads a DOOM WAD (optionally with a patch WAD laid over it), rebuilds the
//! rooms of its level and writes a text description of each room.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use wad_rooms::catalog::{TextureCatalog, ThingTypeCatalog, TEXTURE_DESCRIPTIONS_FILE, THING_TYPES_FILE};
use wad_rooms::level::{Containment, Level};
use wad_rooms::render::write_level;
use wad_rooms::wad::WadFile;

/// Process WAD files and output room descriptions.
#[derive(Parser, Debug)]
#[command(name = "wad-rooms")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The base WAD file (e.g., doom1.wad)
    #[arg(short = 'b', long = "basewad")]
    basewad: PathBuf,

    /// The patch WAD file (e.g., some_mod_pwad.wad)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// The output file for the room descriptions
    #[arg(short = 'o', long = "output", default_value = "output.zil")]
    output: PathBuf,

    /// Directory holding texture_descriptions.json and thing_types.json
    #[arg(long = "data-dir", default_value = "data")]
    data_dir: PathBuf,

    /// Place things by the rooms' wall segments instead of their vertex sets
    #[arg(long = "exact-boundary")]
    exact_boundary: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Initialize logging.
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if !args.basewad.exists() {
        return Err(format!("Base WAD file '{}' not found.", args.basewad.display()).into());
    }
    let mut wad = WadFile::open(&args.basewad)?;

    if let Some(patch) = &args.file {
        if !patch.exists() {
            return Err(format!("Patch WAD file '{}' not found.", patch.display()).into());
        }
        wad = wad.merge(WadFile::open(patch)?);
    }

    let textures = TextureCatalog::load(args.data_dir.join(TEXTURE_DESCRIPTIONS_FILE))?;
    let thing_types = ThingTypeCatalog::load(args.data_dir.join(THING_TYPES_FILE))?;

    let containment = if args.exact_boundary {
        Containment::Boundary
    } else {
        Containment::VertexSet
    };
    let level = Level::load(&wad, containment)?;

    write_level(&args.output, &level.rooms, &textures, &thing_types)?;
    info!(
        "{} rooms written, {} things unassigned",
        level.rooms.len(),
        level.unassigned.len()
    );
    Ok(())
}
