//! Command-line interface for running a generation and exporting the result

use crate::algorithm::generator::{Generator, GeneratorConfig};
use crate::io::configuration::{
    DEFAULT_BOUNDARY, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::{TileAtlas, export_png, render_resolved};
use crate::io::persistence::{load_from_file, save_to_file};
use crate::io::progress::RunProgress;
use crate::io::visualization::GenerationHistory;
use crate::spatial::grid::ResolvedGrid;
use crate::spatial::presets::coastline;
use crate::spatial::tileset::TileSet;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate edge-matched tile maps with wave function collapse"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Tile set definition (JSON); the built-in coastline set when omitted
    #[arg(value_name = "TILESET")]
    pub tileset: Option<PathBuf>,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Tile id assumed to surround the grid
    #[arg(short, long, default_value_t = DEFAULT_BOUNDARY, conflicts_with = "no_boundary")]
    pub boundary: usize,

    /// Leave the grid border unconstrained
    #[arg(long)]
    pub no_boundary: bool,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path (defaults to wfc_h<H>_w<W>_s<SEED>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the collapse order as an animated GIF
    #[arg(long, value_name = "GIF")]
    pub history: Option<PathBuf>,

    /// Write the tile set definition used for this run as JSON
    #[arg(long, value_name = "JSON")]
    pub export_tileset: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation parameters selected on the command line
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            height: self.height,
            width: self.width,
            boundary: if self.no_boundary {
                None
            } else {
                Some(self.boundary)
            },
            seed: self.seed,
        }
    }

    /// Where the rendered grid is written
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "{OUTPUT_PREFIX}_h{}_w{}_s{}.png",
                self.height, self.width, self.seed
            ))
        })
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one generation according to CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the requested tile set, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the definition file cannot be loaded
    pub fn load_tileset(&self) -> Result<TileSet> {
        self.cli
            .tileset
            .as_deref()
            .map_or_else(coastline, load_from_file)
    }

    /// Generate, render and write every requested output
    ///
    /// Returns the resolved grid.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, generation or any export fails
    pub fn process(&self) -> Result<ResolvedGrid> {
        let tileset = self.load_tileset()?;

        if let Some(path) = &self.cli.export_tileset {
            save_to_file(&tileset, path)?;
            log::info!("Saved tile set definition to '{}'", path.display());
        }

        let config = self.cli.generator_config();
        let generator = Generator::configure(&tileset, config)?;

        let progress = if self.cli.should_show_progress() {
            RunProgress::new(config.height * config.width, config.seed)
        } else {
            RunProgress::hidden()
        };

        let mut history = self
            .cli
            .history
            .as_ref()
            .map(|_| GenerationHistory::new(config.height, config.width));

        let result = generator.run_with(|event, _grid| {
            progress.update(event.step);
            if let Some(history) = history.as_mut() {
                history.record(event);
            }
        });

        let resolved = match result {
            Ok(resolved) => {
                progress.complete();
                resolved
            }
            Err(err) => {
                progress.abandon("failed");
                return Err(err);
            }
        };

        let atlas = TileAtlas::for_tileset(&tileset)?;
        let output_path = self.cli.output_path();
        export_png(&render_resolved(&resolved, &atlas)?, &output_path)?;
        log::info!("Image saved as '{}'", output_path.display());

        if let (Some(history), Some(path)) = (&history, &self.cli.history) {
            history.export_gif(&atlas, path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(resolved)
    }
}
