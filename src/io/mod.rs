/// Command-line interface
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Tile set JSON storage
pub mod persistence;
/// Terminal progress display
pub mod progress;
/// Generation history as animated GIF
pub mod visualization;
