//! Built-in tile vocabularies

use crate::io::error::Result;
use crate::spatial::tiles::Category::{self, Grass as G, Shore as S, Water as W};
use crate::spatial::tileset::TileSet;

/// Water, grass and the shoreline pieces joining them
///
/// Ids: 0 water, 1 grass, 2-5 outer corners, 6-9 straight shores,
/// 10-13 inner corners. Each group is listed in 90° rotation steps.
pub const COASTLINE: [[Category; 9]; 14] = [
    [W, W, W, W, W, W, W, W, W],
    [G, G, G, G, G, G, G, G, G],
    [W, W, W, W, S, S, W, S, G],
    [W, W, W, S, S, W, G, S, W],
    [G, S, W, S, S, W, W, W, W],
    [W, S, G, W, S, S, W, W, W],
    [W, W, W, S, S, S, G, G, G],
    [W, S, G, W, S, G, W, S, G],
    [G, S, W, G, S, W, G, S, W],
    [G, G, G, S, S, S, W, W, W],
    [G, G, G, G, S, S, G, S, W],
    [G, G, G, S, S, G, W, S, G],
    [W, S, G, S, S, G, G, G, G],
    [G, S, W, G, S, S, G, G, G],
];

/// Build the coastline tile set
///
/// # Errors
///
/// Never fails for the bundled definitions; the `Result` mirrors
/// [`TileSet::new`].
pub fn coastline() -> Result<TileSet> {
    TileSet::new(COASTLINE.as_slice())
}
