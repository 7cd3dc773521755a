// src/catalog.rs
//! Human-readable descriptions for texture names and thing types.
//!
//! Both catalogs are plain lookups handed to the renderer by reference. A
//! missing key is never an error: it renders as a placeholder naming the key.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::CatalogError;

pub const TEXTURE_DESCRIPTIONS_FILE: &str = "texture_descriptions.json";
pub const THING_TYPES_FILE: &str = "thing_types.json";

/// Texture name -> description, e.g. `"STARTAN3"` -> `"Tan tech panels"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TextureCatalog {
    entries: HashMap<String, String>,
}

impl TextureCatalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        TextureCatalog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn describe(&self, name: &str) -> Cow<'_, str> {
        match self.entries.get(name) {
            Some(desc) => Cow::Borrowed(desc),
            None => {
                debug!("No description for texture {}", name);
                Cow::Owned(format!("Unknown texture {}", name))
            }
        }
    }

    /// Loads `{"NAME": "description", ...}`. A file that does not exist
    /// gives an empty catalog.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let catalog: TextureCatalog = read_json(path.as_ref())?.unwrap_or_default();
        info!("Loaded {} texture descriptions", catalog.len());
        Ok(catalog)
    }
}

/// Thing type id -> description, e.g. `1` -> `"Player 1 start"`.
#[derive(Debug, Clone, Default)]
pub struct ThingTypeCatalog {
    entries: HashMap<i32, String>,
}

impl ThingTypeCatalog {
    pub fn new(entries: HashMap<i32, String>) -> Self {
        ThingTypeCatalog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn describe(&self, thing_type: i32) -> Cow<'_, str> {
        match self.entries.get(&thing_type) {
            Some(desc) => Cow::Borrowed(desc),
            None => {
                debug!("No description for thing type {}", thing_type);
                Cow::Owned(format!("Unknown type {}", thing_type))
            }
        }
    }

    /// Loads `{"1": "Player 1 start", ...}`. JSON object keys are strings,
    /// so ids are parsed here; keys that are not integers are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw: HashMap<String, String> = read_json(path.as_ref())?.unwrap_or_default();
        let entries = raw
            .into_iter()
            .filter_map(|(key, desc)| match key.trim().parse::<i32>() {
                Ok(id) => Some((id, desc)),
                Err(_) => {
                    warn!("Skipping thing type with non-numeric id '{}'", key);
                    None
                }
            })
            .collect();
        let catalog = ThingTypeCatalog { entries };
        info!("Loaded {} thing type descriptions", catalog.len());
        Ok(catalog)
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>, CatalogError> {
    if !path.exists() {
        warn!("Catalog {} not found, unknown keys will render as placeholders", path.display());
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| CatalogError::Json {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_json(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wad_rooms_catalog_{}_{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_missing_texture_renders_placeholder() {
        let catalog = TextureCatalog::default();
        assert_eq!(catalog.describe("MIDBARS3"), "Unknown texture MIDBARS3");
    }

    #[test]
    fn test_missing_thing_type_renders_placeholder() {
        let catalog = ThingTypeCatalog::default();
        assert_eq!(catalog.describe(3004), "Unknown type 3004");
    }

    #[test]
    fn test_known_keys_describe() {
        let textures = TextureCatalog::new(HashMap::from([(
            "NUKAGE1".to_string(),
            "Green slime".to_string(),
        )]));
        let things = ThingTypeCatalog::new(HashMap::from([(1, "Player 1 start".to_string())]));
        assert_eq!(textures.describe("NUKAGE1"), "Green slime");
        // Lookups are case-sensitive.
        assert_eq!(textures.describe("nukage1"), "Unknown texture nukage1");
        assert_eq!(things.describe(1), "Player 1 start");
    }

    #[test]
    fn test_load_from_json() {
        let tex_path = temp_json("textures", r#"{"FLOOR0_1": "Brown tiles"}"#);
        let thing_path = temp_json(
            "things",
            r#"{"1": "Player 1 start", "3001": "Imp", "n/a": "Nothing"}"#,
        );

        let textures = TextureCatalog::load(&tex_path).unwrap();
        let things = ThingTypeCatalog::load(&thing_path).unwrap();
        assert_eq!(textures.describe("FLOOR0_1"), "Brown tiles");
        assert_eq!(things.len(), 2);
        assert_eq!(things.describe(3001), "Imp");

        fs::remove_file(tex_path).ok();
        fs::remove_file(thing_path).ok();
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let path = std::env::temp_dir().join("wad_rooms_catalog_absent.json");
        let textures = TextureCatalog::load(&path).unwrap();
        let things = ThingTypeCatalog::load(&path).unwrap();
        assert!(textures.is_empty());
        assert!(things.is_empty());
        assert_eq!(textures.describe("STARTAN3"), "Unknown texture STARTAN3");
        assert_eq!(things.describe(9), "Unknown type 9");
    }

    #[test]
    fn test_invalid_json_is_error() {
        let path = temp_json("broken", "{ not json");
        assert!(matches!(
            TextureCatalog::load(&path).unwrap_err(),
            CatalogError::Json { .. }
        ));
        fs::remove_file(path).ok();
    }
}
