//! Spatial data structures
//!
//! This module contains the tile model and the grids it is placed on:
//! - Terrain categories, directions and tiles
//! - Tile sets with their adjacency table
//! - Solver and output grids

/// Solver grid and resolved output grid
pub mod grid;
/// Built-in tile vocabularies
pub mod presets;
/// Categories, directions and tile definitions
pub mod tiles;
/// Tile sets and adjacency tables
pub mod tileset;

pub use grid::{Coord, Grid, ResolvedGrid};
