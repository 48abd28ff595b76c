//! Terrain categories, edge directions and the 3x3 tile definition
//!
//! A tile is described by a 3x3 grid of terrain categories. Only the border
//! of that grid matters for adjacency: each side yields an ordered triple of
//! categories (its edge signature) that must line up with the facing side of
//! a neighbouring tile.

use crate::io::error::{AlgorithmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of categories in a tile definition
pub const TILE_CELLS: usize = 9;

/// Closed set of terrain kinds a tile position can hold
///
/// Serialized as its integer code so tile definitions stay compact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    /// Open water
    Water,
    /// Grass land
    Grass,
    /// Shoreline between water and grass
    Shore,
    /// Slope of a hill
    Hillside,
    /// Ground at the foot of a hill, borders water, grass and shore
    Foothills,
}

impl Category {
    /// All categories in code order
    pub const ALL: [Self; 5] = [
        Self::Water,
        Self::Grass,
        Self::Shore,
        Self::Hillside,
        Self::Foothills,
    ];

    /// Compatibility bitmask
    ///
    /// Two positions may touch when their masks share a bit. Composite
    /// categories carry the union of the base categories they may border.
    pub const fn mask(self) -> u8 {
        match self {
            Self::Water => 0b00001,
            Self::Grass => 0b00010,
            Self::Shore => 0b00100,
            Self::Hillside => 0b01000,
            Self::Foothills => 0b00111,
        }
    }

    /// Integer code used by the persisted tile definitions
    pub const fn code(self) -> u8 {
        match self {
            Self::Water => 0,
            Self::Grass => 1,
            Self::Shore => 2,
            Self::Hillside => 3,
            Self::Foothills => 4,
        }
    }

    /// Test whether two categories may sit next to each other
    pub const fn touches(self, other: Self) -> bool {
        self.mask() & other.mask() != 0
    }
}

impl TryFrom<u8> for Category {
    type Error = AlgorithmError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or(AlgorithmError::InvalidCategory { code })
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.code()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Shore => "shore",
            Self::Hillside => "hillside",
            Self::Foothills => "foothills",
        };
        f.write_str(name)
    }
}

/// Side of a tile, also the step between grid-adjacent cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    Up,
    /// Towards row + 1
    Down,
    /// Towards col - 1
    Left,
    /// Towards col + 1
    Right,
}

impl Direction {
    /// All directions in adjacency table order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The facing side of a neighbour in this direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Slot of this direction in per-tile adjacency arrays
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Row and column step
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Ordered category triple along one side of a tile
pub type EdgeSignature = [Category; 3];

/// Compatibility predicate over two aligned edge signatures
///
/// Holds when every pair of aligned positions shares a mask bit.
pub fn edges_compatible(a: &EdgeSignature, b: &EdgeSignature) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| x.touches(y))
}

/// Immutable placeable unit built from a 3x3 category grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    categories: [Category; TILE_CELLS],
    edges: [EdgeSignature; 4],
}

impl Tile {
    /// Build a tile from a row-major 3x3 category sequence
    ///
    /// Duplicate detection is the responsibility of the owning tile set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileDefinition` if the sequence does not hold exactly
    /// nine categories. `index` is only used to label the error.
    pub fn new(categories: &[Category], index: usize) -> Result<Self> {
        let grid: [Category; TILE_CELLS] =
            categories
                .try_into()
                .map_err(|_mismatch| AlgorithmError::InvalidTileDefinition {
                    index,
                    len: categories.len(),
                })?;

        let [c0, c1, c2, c3, _, c5, c6, c7, c8] = grid;
        let edges = [
            [c0, c1, c2], // Up
            [c6, c7, c8], // Down
            [c0, c3, c6], // Left
            [c2, c5, c8], // Right
        ];

        Ok(Self {
            categories: grid,
            edges,
        })
    }

    /// Edge signature on the given side
    pub const fn edge(&self, direction: Direction) -> EdgeSignature {
        let [up, down, left, right] = self.edges;
        match direction {
            Direction::Up => up,
            Direction::Down => down,
            Direction::Left => left,
            Direction::Right => right,
        }
    }

    /// Source categories in row-major order
    pub const fn categories(&self) -> &[Category; TILE_CELLS] {
        &self.categories
    }

    /// Test whether `other` may sit on this tile's `direction` side
    pub fn accepts(&self, other: &Self, direction: Direction) -> bool {
        edges_compatible(&self.edge(direction), &other.edge(direction.opposite()))
    }
}
