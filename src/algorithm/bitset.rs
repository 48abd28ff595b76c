use bitvec::prelude::*;
use std::fmt;

/// Fixed-width set of tile ids
///
/// Width equals the tile count of the owning tile set. Ids are 0-based,
/// matching tile construction order. Intersection and population count are
/// word-parallel, which keeps domain reduction cheap in the collapse loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
    max_tiles: usize,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
            max_tiles,
        }
    }

    /// Create a bitset containing every tile id below `max_tiles`
    pub fn all(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![1; max_tiles],
            max_tiles,
        }
    }

    /// Insert a tile id, ignoring ids outside the width
    pub fn insert(&mut self, tile: usize) {
        if tile < self.max_tiles {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    ///
    /// Returns whether any tile was removed.
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        let before = self.count();
        self.bits &= &other.bits;
        self.count() != before
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Width of the set
    pub const fn capacity(&self) -> usize {
        self.max_tiles
    }

    /// Test whether every member is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|tile| other.contains(tile))
    }

    /// The `index`-th member in ascending id order
    pub fn nth(&self, index: usize) -> Option<usize> {
        self.bits.iter_ones().nth(index)
    }

    /// Members in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Build a bitset from a list of ids
    pub fn from_ids(ids: &[usize], max_tiles: usize) -> Self {
        let mut bitset = Self::new(max_tiles);
        for &tile in ids {
            bitset.insert(tile);
        }
        bitset
    }

    /// Extract all tile ids as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
