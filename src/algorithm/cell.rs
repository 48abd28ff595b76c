//! Per-position solver state

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};

/// Either still a set of candidates or decided
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Remaining candidate tile ids
    Unresolved(TileBitset),
    /// Collapsed to a single tile id
    Resolved(usize),
}

/// One grid position
///
/// The candidate set only ever shrinks. Once resolved the candidates are
/// dropped and the cell no longer takes part in propagation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    /// Fresh cell allowing every tile id below `tile_count`
    pub fn new(tile_count: usize) -> Self {
        Self {
            state: CellState::Unresolved(TileBitset::all(tile_count)),
        }
    }

    /// Current state
    pub const fn state(&self) -> &CellState {
        &self.state
    }

    /// Candidate count, `None` once resolved
    pub fn entropy(&self) -> Option<usize> {
        match &self.state {
            CellState::Unresolved(candidates) => Some(candidates.count()),
            CellState::Resolved(_) => None,
        }
    }

    /// Remaining candidates, `None` once resolved
    pub const fn candidates(&self) -> Option<&TileBitset> {
        match &self.state {
            CellState::Unresolved(candidates) => Some(candidates),
            CellState::Resolved(_) => None,
        }
    }

    /// Resolved tile id
    pub const fn resolved(&self) -> Option<usize> {
        match self.state {
            CellState::Resolved(id) => Some(id),
            CellState::Unresolved(_) => None,
        }
    }

    /// Test whether the cell has been collapsed
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, CellState::Resolved(_))
    }

    /// Test whether an unresolved cell has run out of candidates
    pub fn is_contradicted(&self) -> bool {
        self.candidates().is_some_and(TileBitset::is_empty)
    }

    /// Intersect the candidates with `allowed`
    ///
    /// Returns whether any candidate was removed. Resolved cells are left
    /// untouched.
    pub fn restrict(&mut self, allowed: &TileBitset) -> bool {
        match &mut self.state {
            CellState::Unresolved(candidates) => candidates.intersect_with(allowed),
            CellState::Resolved(_) => false,
        }
    }

    /// Resolve the cell to `id`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is not a current candidate (`InvalidTileIndex`)
    /// - The cell is already resolved (`InvalidParameter`)
    pub fn collapse_to(&mut self, id: usize) -> Result<()> {
        match &self.state {
            CellState::Unresolved(candidates) if candidates.contains(id) => {
                self.state = CellState::Resolved(id);
                Ok(())
            }
            CellState::Unresolved(candidates) => Err(AlgorithmError::InvalidTileIndex {
                index: id,
                max_tiles: candidates.capacity(),
            }),
            CellState::Resolved(current) => Err(invalid_parameter(
                "cell",
                &id,
                &format!("cell is already resolved to tile {current}"),
            )),
        }
    }
}
