//! Minimum-entropy cell selection and seeded random choice
//!
//! Every random draw of a run goes through one [`RandomSelector`], and the
//! frontier iterates in a fixed coordinate order, so the same seed always
//! replays the same sequence of choices.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::grid::{Coord, Grid};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::BTreeSet;

/// Seeded random source for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`, `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly pick one member of `candidates` in ascending id order
    pub fn choose_tile(&mut self, candidates: &TileBitset) -> Option<usize> {
        let index = self.index(candidates.count())?;
        candidates.nth(index)
    }
}

/// Unresolved coordinates that have been touched and await collapse
///
/// Ordered row-major so scans are independent of insertion history.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    coords: BTreeSet<Coord>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coordinate, returning whether it was absent
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.coords.insert(coord)
    }

    /// Remove a coordinate, returning whether it was present
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.coords.remove(&coord)
    }

    /// Test membership
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Number of coordinates
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Test if the frontier is exhausted
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }
}

/// Frontier coordinates sharing the lowest entropy, plus that entropy
///
/// Resolved or out-of-bounds entries are skipped. Returns `None` when no
/// unresolved cell remains on the frontier.
pub fn lowest_entropy_coordinates(frontier: &Frontier, grid: &Grid) -> Option<(usize, Vec<Coord>)> {
    let mut lowest = usize::MAX;
    let mut ties = Vec::new();

    for coord in frontier.iter() {
        let Some(entropy) = grid.get(coord).and_then(|cell| cell.entropy()) else {
            continue;
        };

        if entropy < lowest {
            lowest = entropy;
            ties.clear();
            ties.push(coord);
        } else if entropy == lowest {
            ties.push(coord);
        }
    }

    (!ties.is_empty()).then_some((lowest, ties))
}

/// Pick a coordinate uniformly among all minimum-entropy frontier cells
///
/// Consumes exactly one draw from `selector` whenever a coordinate exists.
pub fn select_lowest_entropy(
    frontier: &Frontier,
    grid: &Grid,
    selector: &mut RandomSelector,
) -> Option<Coord> {
    let (_, ties) = lowest_entropy_coordinates(frontier, grid)?;
    let index = selector.index(ties.len())?;
    ties.get(index).copied()
}
