/// Fixed-width tile id sets
pub mod bitset;
/// Per-position candidate state
pub mod cell;
/// Generation session and collapse loop
pub mod generator;
/// Single-hop neighbour restriction
pub mod propagation;
/// Minimum-entropy selection and seeded randomness
pub mod selection;
