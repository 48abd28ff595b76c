//! JSON storage of tile set definitions
//!
//! Only the source category grids and asset metadata are stored. The
//! adjacency table is derived data and is rebuilt on load.

use crate::io::error::{AlgorithmError, Result, file_system_error};
use crate::spatial::tiles::Category;
use crate::spatial::tileset::{AssetMetadata, TileSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk form of a tile set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSetDefinition {
    /// Row-major 3x3 category grids in tile id order
    pub tiles: Vec<Vec<Category>>,
    /// Edge length of one tile image in pixels
    pub resolution: u32,
    /// Directory of per-tile images, relative paths resolve against the
    /// definition file
    #[serde(default)]
    pub asset_dir: PathBuf,
}

impl TileSetDefinition {
    /// Capture the definition of an existing tile set
    pub fn from_tileset(tileset: &TileSet) -> Self {
        Self {
            tiles: tileset
                .tiles()
                .iter()
                .map(|tile| tile.categories().to_vec())
                .collect(),
            resolution: tileset.metadata().resolution,
            asset_dir: tileset.metadata().asset_dir.clone(),
        }
    }

    /// Validate and build the tile set
    ///
    /// # Errors
    ///
    /// Propagates tile set construction errors
    pub fn into_tileset(self) -> Result<TileSet> {
        TileSet::with_metadata(
            self.tiles.as_slice(),
            AssetMetadata {
                resolution: self.resolution,
                asset_dir: self.asset_dir,
            },
        )
    }
}

/// Serialize a tile set to pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` if encoding fails
pub fn to_json(tileset: &TileSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(
        &TileSetDefinition::from_tileset(tileset),
    )?)
}

/// Build a tile set from JSON
///
/// # Errors
///
/// Returns an error if the JSON is malformed or describes an invalid tile set
pub fn from_json(json: &str) -> Result<TileSet> {
    let definition: TileSetDefinition = serde_json::from_str(json)?;
    definition.into_tileset()
}

/// Write a tile set definition to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if encoding or any file operation fails
pub fn save_to_file(tileset: &TileSet, path: &Path) -> Result<()> {
    let json = to_json(tileset)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    std::fs::write(path, json).map_err(file_system_error(path, "write tile set"))
}

/// Read a tile set definition from `path`
///
/// A relative asset directory is resolved against the file's directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is malformed, or describes
/// an invalid tile set
pub fn load_from_file(path: &Path) -> Result<TileSet> {
    let json = std::fs::read_to_string(path).map_err(file_system_error(path, "read tile set"))?;

    let mut definition: TileSetDefinition =
        serde_json::from_str(&json).map_err(|source| AlgorithmError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;

    if !definition.asset_dir.as_os_str().is_empty()
        && definition.asset_dir.is_relative()
        && let Some(parent) = path.parent()
    {
        definition.asset_dir = parent.join(&definition.asset_dir);
    }

    log::debug!(
        "Loaded {} tile definitions from '{}'",
        definition.tiles.len(),
        path.display()
    );

    definition.into_tileset()
}
