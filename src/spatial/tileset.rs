//! Immutable tile vocabulary with its precomputed adjacency table
//!
//! The table answers "which tiles may sit on side `d` of tile `t`" in O(1).
//! It is built once per tile set with O(T² · 4) edge comparisons and never
//! changes afterwards, so a tile set can be shared read-only across runs.

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::DEFAULT_RESOLUTION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::tiles::{Category, Direction, TILE_CELLS, Tile};
use std::collections::HashMap;
use std::path::PathBuf;

/// Passthrough data for rendering and export collaborators
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetMetadata {
    /// Edge length of one tile image in pixels
    pub resolution: u32,
    /// Directory holding one `<tile id>.png` per tile
    pub asset_dir: PathBuf,
}

impl Default for AssetMetadata {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            asset_dir: PathBuf::new(),
        }
    }
}

/// Ordered tile collection plus adjacency table
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    /// Indexed by tile id, then `Direction::index`
    adjacency: Vec<[TileBitset; 4]>,
    metadata: AssetMetadata,
}

impl TileSet {
    /// Build a tile set from row-major 3x3 category grids
    ///
    /// Tile ids follow the order of `definitions`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `definitions` is empty
    /// - A definition does not hold exactly nine categories
    /// - Two definitions are identical
    pub fn new<D: AsRef<[Category]>>(definitions: &[D]) -> Result<Self> {
        Self::with_metadata(definitions, AssetMetadata::default())
    }

    /// Build a tile set carrying rendering metadata
    ///
    /// # Errors
    ///
    /// Same conditions as [`TileSet::new`].
    pub fn with_metadata<D: AsRef<[Category]>>(
        definitions: &[D],
        metadata: AssetMetadata,
    ) -> Result<Self> {
        if definitions.is_empty() {
            return Err(invalid_parameter(
                "tiles",
                &0,
                &"a tile set needs at least one tile",
            ));
        }

        // Scoped to this build so unrelated tile sets may reuse patterns
        let mut seen: HashMap<[Category; TILE_CELLS], usize> = HashMap::new();
        let mut tiles = Vec::with_capacity(definitions.len());

        for (index, definition) in definitions.iter().enumerate() {
            let tile = Tile::new(definition.as_ref(), index)?;
            if let Some(&first) = seen.get(tile.categories()) {
                return Err(AlgorithmError::DuplicateTile { index, first });
            }
            seen.insert(*tile.categories(), index);
            tiles.push(tile);
        }

        let adjacency = build_adjacency(&tiles);

        log::debug!(
            "Built tile set with {} tiles and {} adjacency entries",
            tiles.len(),
            adjacency
                .iter()
                .flat_map(|sides| sides.iter())
                .map(TileBitset::count)
                .sum::<usize>()
        );

        Ok(Self {
            tiles,
            adjacency,
            metadata,
        })
    }

    /// Number of tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile with the given id
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Rendering metadata
    pub const fn metadata(&self) -> &AssetMetadata {
        &self.metadata
    }

    /// Tiles allowed on the `direction` side of tile `id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `id` is not a tile of this set
    pub fn compatible_tiles(&self, id: usize, direction: Direction) -> Result<&TileBitset> {
        self.adjacency
            .get(id)
            .and_then(|sides| sides.get(direction.index()))
            .ok_or(AlgorithmError::InvalidTileIndex {
                index: id,
                max_tiles: self.tiles.len(),
            })
    }
}

/// Evaluate the edge predicate for every (tile, direction, neighbour) triple
fn build_adjacency(tiles: &[Tile]) -> Vec<[TileBitset; 4]> {
    let count = tiles.len();
    tiles
        .iter()
        .map(|tile| {
            Direction::ALL.map(|direction| {
                let mut allowed = TileBitset::new(count);
                for (neighbor_id, neighbor) in tiles.iter().enumerate() {
                    if tile.accepts(neighbor, direction) {
                        allowed.insert(neighbor_id);
                    }
                }
                allowed
            })
        })
        .collect()
}
