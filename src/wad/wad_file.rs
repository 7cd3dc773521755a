// src/wad/wad_file.rs

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use byteorder::{LE, ReadBytesExt};
use log::{debug, info};

use crate::error::{Result, WadError};
use crate::map::lump::decode_name8;
use crate::map::{decode_lump, LumpRecord};

const HEADER_SIZE: u64 = 12;
const FILELUMP_SIZE: u64 = 16; // 4 bytes (filepos) + 4 bytes (size) + 8 bytes (name)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadKind {
    Iwad,
    Pwad,
}

impl WadKind {
    fn from_magic(magic: &[u8; 4]) -> Option<Self> {
        match magic {
            b"IWAD" => Some(WadKind::Iwad),
            b"PWAD" => Some(WadKind::Pwad),
            _ => None,
        }
    }
}

/// A single lump entry from the WAD directory.
#[derive(Debug, Clone, PartialEq)]
pub struct LumpEntry {
    pub name: String,
    pub offset: u32,
    pub size: u32,
    /// Index of the file (in `WadFile::sources`) this lump lives in.
    source: usize,
}

/// The directory of one logical WAD.
///
/// Only the directory is kept in memory. Every [`WadFile::get_lump`] call
/// opens the owning file, seeks, reads and closes it again.
#[derive(Debug, Clone)]
pub struct WadFile {
    kind: WadKind,
    sources: Vec<PathBuf>,
    directory: HashMap<String, LumpEntry>,
    // Names in the order they first appeared, for diagnostics.
    order: Vec<String>,
}

impl WadFile {
    /// Opens a WAD and reads its header and directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let (kind, entries) = read_directory(&mut file)?;

        let mut wad = WadFile {
            kind,
            sources: vec![path.to_path_buf()],
            directory: HashMap::with_capacity(entries.len()),
            order: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            wad.insert(entry);
        }
        info!(
            "Opened {} ({:?}, {} lumps)",
            path.display(),
            wad.kind,
            wad.order.len()
        );
        Ok(wad)
    }

    pub fn kind(&self) -> WadKind {
        self.kind
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directory.contains_key(name)
    }

    /// Lump names in first-appearance order, each listed once.
    pub fn lump_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Reads the raw bytes of a named lump. Names are case-sensitive.
    pub fn get_lump(&self, name: &str) -> Result<Vec<u8>> {
        let entry = self
            .directory
            .get(name)
            .ok_or_else(|| WadError::LumpNotFound(name.to_string()))?;

        let mut file = File::open(&self.sources[entry.source])?;
        file.seek(SeekFrom::Start(entry.offset as u64))?;
        let mut data = vec![0u8; entry.size as usize];
        file.read_exact(&mut data)?;
        Ok(data)
    }

    /// Reads and decodes the lump holding records of type `T`.
    pub fn read_records<T: LumpRecord>(&self) -> Result<Vec<T>> {
        let records = decode_lump::<T>(&self.get_lump(T::LUMP_NAME)?)?;
        debug!("{}: {} records", T::LUMP_NAME, records.len());
        Ok(records)
    }

    /// Lays a patch WAD over this one. Lumps of the patch replace lumps of
    /// the same name; everything else is kept. The result keeps this WAD's
    /// kind.
    pub fn merge(mut self, patch: WadFile) -> WadFile {
        let base = self.sources.len();
        self.sources.extend(patch.sources);

        let mut patch_directory = patch.directory;
        for name in patch.order {
            if let Some(mut entry) = patch_directory.remove(&name) {
                entry.source += base;
                if self.directory.contains_key(&name) {
                    debug!("Patch overrides lump '{}'", name);
                }
                self.insert(entry);
            }
        }
        self
    }

    // A later entry with the same name wins.
    fn insert(&mut self, entry: LumpEntry) {
        if !self.directory.contains_key(&entry.name) {
            self.order.push(entry.name.clone());
        }
        self.directory.insert(entry.name.clone(), entry);
    }
}

/// Parses the 12-byte header and the lump directory, validating every lump
/// extent against the total length of the stream.
fn read_directory<R: Read + Seek>(reader: &mut R) -> Result<(WadKind, Vec<LumpEntry>)> {
    let total_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    if total_size < HEADER_SIZE {
        return Err(WadError::malformed(format!(
            "file is {} bytes, too short for a WAD header",
            total_size
        )));
    }

    // --- Read Header ---
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    let kind = WadKind::from_magic(&magic).ok_or_else(|| {
        WadError::malformed(format!(
            "invalid WAD identifier: {}",
            String::from_utf8_lossy(&magic)
        ))
    })?;
    let num_lumps = reader.read_u32::<LE>()? as u64;
    let infotableofs = reader.read_u32::<LE>()? as u64;

    if infotableofs + num_lumps * FILELUMP_SIZE > total_size {
        return Err(WadError::malformed(format!(
            "directory of {} entries at offset {} exceeds file size {}",
            num_lumps, infotableofs, total_size
        )));
    }

    // --- Read Directory ---
    reader.seek(SeekFrom::Start(infotableofs))?;
    let mut directory = Vec::with_capacity(num_lumps as usize);
    for _ in 0..num_lumps {
        let offset = reader.read_u32::<LE>()?;
        let size = reader.read_u32::<LE>()?;
        let mut name_buf = [0u8; 8];
        reader.read_exact(&mut name_buf)?;
        let name = decode_name8(&name_buf)?;

        if offset as u64 + size as u64 > total_size {
            return Err(WadError::malformed(format!(
                "lump '{}' has invalid offset/size ({}+{} > {})",
                name, offset, size, total_size
            )));
        }
        directory.push(LumpEntry {
            name,
            offset,
            size,
            source: 0,
        });
    }
    Ok((kind, directory))
}
