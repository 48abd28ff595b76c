//! Raster rendering of generated grids
//!
//! Each tile is drawn from a per-tile RGBA image of the tile set's
//! resolution. Images come either from the tile set's asset directory or are
//! painted from the tile's category grid.

use crate::algorithm::cell::CellState;
use crate::io::error::{AlgorithmError, Result, file_system_error, invalid_parameter};
use crate::spatial::grid::{Grid, ResolvedGrid};
use crate::spatial::tiles::Category;
use crate::spatial::tileset::TileSet;
use image::{Rgba, RgbaImage, imageops};
use std::path::Path;

/// Display colour of a terrain category
pub const fn category_color(category: Category) -> [u8; 4] {
    match category {
        Category::Water => [52, 101, 164, 255],
        Category::Grass => [78, 154, 6, 255],
        Category::Shore => [233, 212, 150, 255],
        Category::Hillside => [143, 89, 2, 255],
        Category::Foothills => [176, 160, 96, 255],
    }
}

/// One image per tile id, all of the same square size
#[derive(Clone, Debug)]
pub struct TileAtlas {
    images: Vec<RgbaImage>,
    resolution: u32,
}

impl TileAtlas {
    /// Load `<asset_dir>/<id>.png` for every tile of the set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An image cannot be loaded
    /// - An image is not `resolution` pixels square
    pub fn load(tileset: &TileSet) -> Result<Self> {
        let metadata = tileset.metadata();
        let resolution = metadata.resolution;

        let images = (0..tileset.tile_count())
            .map(|id| {
                let path = metadata.asset_dir.join(format!("{id}.png"));
                let img = image::open(&path)
                    .map_err(|source| AlgorithmError::ImageLoad {
                        path: path.clone(),
                        source,
                    })?
                    .to_rgba8();

                if img.dimensions() != (resolution, resolution) {
                    return Err(invalid_parameter(
                        "resolution",
                        &format!("{}x{}", img.width(), img.height()),
                        &format!(
                            "tile image '{}' must be {resolution}x{resolution}",
                            path.display()
                        ),
                    ));
                }
                Ok(img)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { images, resolution })
    }

    /// Paint each tile's 3x3 category grid as colour blocks
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `resolution` is below 3 pixels
    pub fn from_categories(tileset: &TileSet, resolution: u32) -> Result<Self> {
        if resolution < 3 {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &"tiles need at least one pixel per category",
            ));
        }

        let images = tileset
            .tiles()
            .iter()
            .map(|tile| {
                RgbaImage::from_fn(resolution, resolution, |x, y| {
                    let block_col = category_block(x, resolution);
                    let block_row = category_block(y, resolution);
                    tile.categories()
                        .get(block_row * 3 + block_col)
                        .map_or(Rgba([0, 0, 0, 0]), |&category| {
                            Rgba(category_color(category))
                        })
                })
            })
            .collect();

        Ok(Self { images, resolution })
    }

    /// Load from the asset directory when present, otherwise paint
    ///
    /// # Errors
    ///
    /// Returns an error if asset loading or painting fails
    pub fn for_tileset(tileset: &TileSet) -> Result<Self> {
        let metadata = tileset.metadata();
        if metadata.asset_dir.as_os_str().is_empty() || !metadata.asset_dir.is_dir() {
            log::debug!("No asset directory, painting tiles from categories");
            Self::from_categories(tileset, metadata.resolution)
        } else {
            Self::load(tileset)
        }
    }

    /// Edge length of one tile image
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of tile images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Test if the atlas holds no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image for a tile id
    pub fn image(&self, id: usize) -> Option<&RgbaImage> {
        self.images.get(id)
    }

    fn tile_image(&self, id: usize) -> Result<&RgbaImage> {
        self.image(id).ok_or(AlgorithmError::InvalidTileIndex {
            index: id,
            max_tiles: self.images.len(),
        })
    }

    /// Pixel extent of `cells` tiles, `None` past the `u32` image limit
    fn span(&self, cells: usize) -> Option<u32> {
        u32::try_from(cells).ok()?.checked_mul(self.resolution)
    }

    /// Draw one tile onto a canvas at a grid position
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The atlas has no image for `id`
    /// - The position lies beyond the largest possible image
    pub fn draw_tile(&self, canvas: &mut RgbaImage, row: usize, col: usize, id: usize) -> Result<()> {
        let (Some(x), Some(y)) = (self.span(col), self.span(row)) else {
            return Err(invalid_parameter(
                "position",
                &format!("({row}, {col})"),
                &"outside the pixel range of an image",
            ));
        };
        imageops::overlay(canvas, self.tile_image(id)?, i64::from(x), i64::from(y));
        Ok(())
    }

    /// Fill one grid position with a flat colour, clipped to the canvas
    pub fn fill_cell(&self, canvas: &mut RgbaImage, row: usize, col: usize, color: Rgba<u8>) {
        let (Some(x0), Some(y0)) = (self.span(col), self.span(row)) else {
            return;
        };
        for y in y0..y0.saturating_add(self.resolution) {
            for x in x0..x0.saturating_add(self.resolution) {
                if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                    *pixel = color;
                }
            }
        }
    }

    /// Transparent canvas sized for a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid at this resolution exceeds the
    /// `u32` pixel range of an image
    pub fn blank(&self, rows: usize, cols: usize) -> Result<RgbaImage> {
        match (self.span(cols), self.span(rows)) {
            (Some(width), Some(height)) => Ok(RgbaImage::new(width, height)),
            _ => Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &format!("a {rows}x{cols} grid does not fit in one image"),
            )),
        }
    }
}

// Which of the three category bands pixel `offset` falls in
fn category_block(offset: u32, resolution: u32) -> usize {
    usize::try_from(u64::from(offset) * 3 / u64::from(resolution)).unwrap_or(2)
}

/// Grey shade for an unresolved cell, darker with fewer candidates
pub fn entropy_shade(entropy: usize, tile_count: usize) -> Rgba<u8> {
    let span = tile_count.max(1) as f64;
    let level = 64.0 + 160.0 * (entropy as f64 / span).min(1.0);
    Rgba([level as u8, level as u8, level as u8, 255])
}

/// Render a grid in any state
///
/// Resolved cells show their tile, unresolved cells an entropy shade, and
/// cells without candidates stay transparent.
///
/// # Errors
///
/// Returns an error if the canvas is too large or a resolved id has no
/// atlas image
pub fn render_grid(grid: &Grid, atlas: &TileAtlas) -> Result<RgbaImage> {
    let mut canvas = atlas.blank(grid.rows(), grid.cols())?;

    for ([row, col], cell) in grid.indexed_cells() {
        match cell.state() {
            CellState::Resolved(id) => atlas.draw_tile(&mut canvas, row, col, *id)?,
            CellState::Unresolved(candidates) if !candidates.is_empty() => {
                atlas.fill_cell(
                    &mut canvas,
                    row,
                    col,
                    entropy_shade(candidates.count(), candidates.capacity()),
                );
            }
            CellState::Unresolved(_) => {}
        }
    }

    Ok(canvas)
}

/// Render a fully resolved grid
///
/// # Errors
///
/// Returns an error if the canvas is too large or a tile id has no atlas
/// image
pub fn render_resolved(grid: &ResolvedGrid, atlas: &TileAtlas) -> Result<RgbaImage> {
    let mut canvas = atlas.blank(grid.rows(), grid.cols())?;
    for ((row, col), &id) in grid.as_array().indexed_iter() {
        atlas.draw_tile(&mut canvas, row, col, id)?;
    }
    Ok(canvas)
}

/// Save an image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
