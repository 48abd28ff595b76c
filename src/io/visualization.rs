//! Collapse history capture and GIF generation

use crate::algorithm::generator::CollapseEvent;
use crate::io::configuration::{FINAL_FRAME_HOLD, MAX_HISTORY_FRAMES};
use crate::io::error::{AlgorithmError, Result, file_system_error, invalid_parameter};
use crate::io::image::TileAtlas;
use crate::spatial::grid::Coord;
use image::{Delay, Frame, Rgba};
use std::path::Path;

/// Colour of cells not yet collapsed in history frames
const PENDING_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Single collapse as recorded for replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Collapsed cell
    pub coordinate: Coord,
    /// Chosen tile id
    pub tile: usize,
    /// Collapse count when placed
    pub step: usize,
}

/// Records collapses of one run for later replay as an animation
pub struct GenerationHistory {
    placements: Vec<TilePlacement>,
    rows: usize,
    cols: usize,
}

impl GenerationHistory {
    /// Prepare a history for a `rows` x `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            placements: Vec::with_capacity(rows.saturating_mul(cols)),
            rows,
            cols,
        }
    }

    /// Record one collapse event
    pub fn record(&mut self, event: &CollapseEvent) {
        self.placements.push(TilePlacement {
            coordinate: event.coordinate,
            tile: event.tile,
            step: event.step,
        });
    }

    /// Recorded placements in collapse order
    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Returns the total number of recorded collapses
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Collapses folded into each frame so at most `MAX_HISTORY_FRAMES`
    /// frames are produced
    pub fn skip_factor(&self) -> usize {
        self.placements.len().div_ceil(MAX_HISTORY_FRAMES).max(1)
    }

    /// Replay the collapses into animation frames
    ///
    /// The first frame shows the empty grid, the last one is held for
    /// `FINAL_FRAME_HOLD` times the normal delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is too large or a placement has no
    /// atlas image
    pub fn frames(&self, atlas: &TileAtlas, frame_delay_ms: u32) -> Result<Vec<Frame>> {
        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
        let skip_factor = self.skip_factor();

        let mut canvas = atlas.blank(self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                atlas.fill_cell(&mut canvas, row, col, PENDING_COLOR);
            }
        }

        let mut frames = vec![Frame::from_parts(canvas.clone(), 0, 0, delay)];

        for (index, placement) in self.placements.iter().enumerate() {
            let [row, col] = placement.coordinate;
            atlas.draw_tile(&mut canvas, row, col, placement.tile)?;

            if (index + 1) % skip_factor == 0 {
                frames.push(Frame::from_parts(canvas.clone(), 0, 0, delay));
            }
        }

        if self.placements.len() % skip_factor != 0 {
            frames.push(Frame::from_parts(canvas.clone(), 0, 0, delay));
        }

        // Final frame displays longer for better visibility
        frames.push(Frame::from_parts(
            canvas,
            0,
            0,
            Delay::from_numer_denom_ms(frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1),
        ));

        Ok(frames)
    }

    /// Export the recorded collapses as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No collapses were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, atlas: &TileAtlas, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(invalid_parameter(
                "history",
                &0,
                &"No collapses captured for visualization",
            ));
        }

        let frames = self.frames(atlas, frame_delay_ms)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(file_system_error(output_path, "create file"))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        log::info!(
            "Saved generation history with {} collapses to '{}'",
            self.placement_count(),
            output_path.display()
        );

        Ok(())
    }
}
