//! Runtime configuration defaults and limits

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 100;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 200;

/// Default boundary tile (water in the built-in coastline set)
pub const DEFAULT_BOUNDARY: usize = 0;

/// Default edge length of a tile image in pixels
pub const DEFAULT_RESOLUTION: u32 = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// Prefix of generated image filenames
pub const OUTPUT_PREFIX: &str = "wfc";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// How many times longer the final history frame is shown
pub const FINAL_FRAME_HOLD: u32 = 25;
/// Upper bound on frames written to a history GIF
pub const MAX_HISTORY_FRAMES: usize = 200;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
