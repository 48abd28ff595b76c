//! Rectangular grid of solver cells and the resolved output grid
//!
//! Coordinates are `[row, col]` with `[0, 0]` in the top-left corner. All
//! access goes through checked lookups; out-of-bounds positions simply have
//! no cell.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::cell::Cell;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::Direction;
use crate::spatial::tileset::TileSet;
use ndarray::Array2;

/// Grid position as `[row, col]`
pub type Coord = [usize; 2];

/// Step from `coord` one cell in `direction`, if it stays inside `dims`
pub fn neighbor(coord: Coord, direction: Direction, dims: (usize, usize)) -> Option<Coord> {
    let (d_row, d_col) = direction.offset();
    let row = coord[0].checked_add_signed(d_row)?;
    let col = coord[1].checked_add_signed(d_col)?;
    (row < dims.0 && col < dims.1).then_some([row, col])
}

/// H×W array of cells owned by one generation run
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocate a grid of fresh cells, each allowing all `tile_count` tiles
    pub fn new(rows: usize, cols: usize, tile_count: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::new(tile_count)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Cell at `coord`
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// Mutable cell at `coord`
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord)
    }

    /// In-bounds neighbours of `coord` paired with the direction taken
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + use<> {
        let dims = self.dims();
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| neighbor(coord, direction, dims).map(|n| (direction, n)))
    }

    /// Iterate cells with their coordinates in row-major order
    pub fn indexed_cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ([row, col], cell))
    }

    /// Border cells paired with the direction pointing from an outside
    /// boundary tile towards them
    ///
    /// Corner cells appear once per side they touch.
    pub fn border(&self) -> Vec<(Coord, Direction)> {
        let (rows, cols) = self.dims();
        if rows == 0 || cols == 0 {
            return Vec::new();
        }

        let mut border = Vec::with_capacity(2 * (rows + cols));
        border.extend((0..cols).map(|col| ([0, col], Direction::Down)));
        border.extend((0..cols).map(|col| ([rows - 1, col], Direction::Up)));
        border.extend((0..rows).map(|row| ([row, 0], Direction::Right)));
        border.extend((0..rows).map(|row| ([row, cols - 1], Direction::Left)));
        border
    }

    /// Constrain border cells as if `boundary` surrounded the grid
    ///
    /// Returns the first coordinate whose candidates become empty, if any.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `boundary` is not a tile of `tileset`
    pub fn apply_boundary(&mut self, tileset: &TileSet, boundary: usize) -> Result<Option<Coord>> {
        let allowed: Vec<(Direction, TileBitset)> = Direction::ALL
            .into_iter()
            .map(|direction| {
                tileset
                    .compatible_tiles(boundary, direction)
                    .map(|set| (direction, set.clone()))
            })
            .collect::<Result<_>>()?;

        let mut emptied = None;
        for (coord, direction) in self.border() {
            let Some((_, set)) = allowed.iter().find(|(d, _)| *d == direction) else {
                continue;
            };
            if let Some(cell) = self.get_mut(coord) {
                cell.restrict(set);
                if emptied.is_none() && cell.is_contradicted() {
                    emptied = Some(coord);
                }
            }
        }
        Ok(emptied)
    }

    /// Snapshot the tile ids once every cell is resolved
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first unresolved coordinate
    pub fn to_resolved(&self) -> Result<ResolvedGrid> {
        let mut tiles = Array2::zeros(self.dims());
        for (coord, cell) in self.indexed_cells() {
            let id = cell
                .resolved()
                .ok_or_else(|| {
                    invalid_parameter("grid", &format!("{coord:?}"), &"cell is not resolved")
                })?;
            if let Some(slot) = tiles.get_mut(coord) {
                *slot = id;
            }
        }
        Ok(ResolvedGrid { tiles })
    }
}

/// Fully resolved H×W grid of tile ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGrid {
    tiles: Array2<usize>,
}

impl ResolvedGrid {
    /// Wrap an array of tile ids
    pub const fn from_array(tiles: Array2<usize>) -> Self {
        Self { tiles }
    }

    /// Tile id at `coord`
    pub fn get(&self, coord: Coord) -> Option<usize> {
        self.tiles.get(coord).copied()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Underlying array
    pub const fn as_array(&self) -> &Array2<usize> {
        &self.tiles
    }

    /// Test whether every grid-adjacent pair is allowed by the adjacency table
    pub fn is_consistent(&self, tileset: &TileSet) -> bool {
        let dims = self.tiles.dim();
        self.tiles.indexed_iter().all(|((row, col), &id)| {
            [Direction::Down, Direction::Right].into_iter().all(|direction| {
                neighbor([row, col], direction, dims)
                    .and_then(|n| self.get(n))
                    .is_none_or(|other| {
                        tileset
                            .compatible_tiles(id, direction)
                            .is_ok_and(|allowed| allowed.contains(other))
                    })
            })
        })
    }
}
