//! Wave function collapse generator for edge-matched terrain tiles
//!
//! Tiles are 3x3 grids of terrain categories whose borders must line up
//! with their neighbours. A run repeatedly collapses the least constrained
//! cell to a random candidate and narrows its direct neighbours, producing
//! the same grid for the same tile set, dimensions, boundary and seed.

#![forbid(unsafe_code)]

/// Core algorithm: candidate sets, selection, propagation and the generator
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tiles, tile sets and grids
pub mod spatial;

pub use algorithm::generator::{CollapseEvent, Generator, GeneratorConfig, GeneratorState};
pub use io::error::{AlgorithmError, Result};
pub use spatial::tileset::TileSet;
