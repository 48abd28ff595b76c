//! Single-hop constraint propagation after a collapse
//!
//! Only the four direct neighbours of the collapsed cell are restricted.
//! Their own neighbours are revisited once they are selected themselves or
//! touched by a later collapse, which keeps each step local at the cost of
//! full arc consistency.

use crate::algorithm::selection::Frontier;
use crate::io::error::Result;
use crate::spatial::grid::{Coord, Grid};
use crate::spatial::tileset::TileSet;

/// What one propagation step did to the neighbourhood
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Propagation {
    /// Unresolved neighbours visited, in direction order
    pub touched: Vec<Coord>,
    /// Neighbours that lost at least one candidate
    pub narrowed: Vec<Coord>,
    /// First neighbour whose candidates ran out
    pub contradiction: Option<Coord>,
}

/// Restrict the unresolved neighbours of `coord`, now resolved to `tile`
///
/// Each neighbour joins the frontier and is intersected with the tiles the
/// adjacency table allows on that side. Stops at the first neighbour left
/// without candidates.
///
/// # Errors
///
/// Returns `InvalidTileIndex` if `tile` is not part of `tileset`
pub fn propagate_from(
    grid: &mut Grid,
    frontier: &mut Frontier,
    tileset: &TileSet,
    coord: Coord,
    tile: usize,
) -> Result<Propagation> {
    let mut outcome = Propagation::default();

    for (direction, neighbor_coord) in grid.neighbors(coord) {
        let allowed = tileset.compatible_tiles(tile, direction)?;

        let Some(neighbor) = grid.get_mut(neighbor_coord) else {
            continue;
        };
        if neighbor.is_resolved() {
            continue;
        }

        frontier.insert(neighbor_coord);
        outcome.touched.push(neighbor_coord);

        if neighbor.restrict(allowed) {
            outcome.narrowed.push(neighbor_coord);
        }

        if neighbor.is_contradicted() {
            outcome.contradiction = Some(neighbor_coord);
            break;
        }
    }

    Ok(outcome)
}
