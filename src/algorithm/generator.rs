use crate::{
    algorithm::bitset::TileBitset,
    algorithm::propagation::propagate_from,
    algorithm::selection::{Frontier, RandomSelector, select_lowest_entropy},
    io::configuration::MAX_GRID_DIMENSION,
    io::error::{AlgorithmError, Result, invalid_parameter},
    spatial::grid::{Coord, Grid, ResolvedGrid},
    spatial::tileset::TileSet,
};

/// Parameters of a single generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid height in cells
    pub height: usize,
    /// Grid width in cells
    pub width: usize,
    /// Tile assumed to surround the grid, `None` leaves the border free
    pub boundary: Option<usize>,
    /// Seed for every random draw of the run
    pub seed: u64,
}

/// Lifecycle of a run after configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorState {
    /// Frontier still holds cells to collapse
    Propagating,
    /// Every cell is resolved
    Done,
    /// A cell ran out of candidates; the run cannot continue
    Contradiction {
        /// Cell left without candidates
        coordinate: Coord,
        /// Collapse count when it was detected
        step: usize,
    },
}

/// Record of one collapse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapseEvent {
    /// 1-based collapse count
    pub step: usize,
    /// Collapsed cell
    pub coordinate: Coord,
    /// Chosen tile id
    pub tile: usize,
    /// Candidates of the cell immediately before the collapse
    pub candidates: TileBitset,
}

/// Wave function collapse session over one grid
///
/// Owns all run state. The tile set is only borrowed, so several generators
/// may share it while running on different threads.
pub struct Generator<'a> {
    tileset: &'a TileSet,
    grid: Grid,
    frontier: Frontier,
    random_selector: RandomSelector,
    config: GeneratorConfig,
    state: GeneratorState,
    steps: usize,
}

impl<'a> Generator<'a> {
    /// Allocate the grid, apply the boundary and seed the frontier
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - The boundary id is not a tile of `tileset`
    /// - The boundary leaves a border cell without candidates
    pub fn configure(tileset: &'a TileSet, config: GeneratorConfig) -> Result<Self> {
        validate_dimension("height", config.height)?;
        validate_dimension("width", config.width)?;

        let mut grid = Grid::new(config.height, config.width, tileset.tile_count());

        if let Some(boundary) = config.boundary {
            if boundary >= tileset.tile_count() {
                return Err(AlgorithmError::InvalidTileIndex {
                    index: boundary,
                    max_tiles: tileset.tile_count(),
                });
            }
            if let Some(coordinate) = grid.apply_boundary(tileset, boundary)? {
                log::warn!(
                    "Boundary tile {boundary} leaves {coordinate:?} without candidates (seed {})",
                    config.seed
                );
                return Err(AlgorithmError::Contradiction {
                    coordinate,
                    seed: config.seed,
                    step: 0,
                });
            }
        }

        let mut frontier = Frontier::new();
        frontier.insert([0, 0]);

        log::debug!(
            "Configured {}x{} generation, boundary {:?}, seed {}",
            config.height,
            config.width,
            config.boundary,
            config.seed
        );

        Ok(Self {
            tileset,
            grid,
            frontier,
            random_selector: RandomSelector::new(config.seed),
            config,
            state: GeneratorState::Propagating,
            steps: 0,
        })
    }

    /// Current lifecycle state
    pub const fn state(&self) -> GeneratorState {
        self.state
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells awaiting collapse
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of cells awaiting collapse
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Collapses performed so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Seed of this run
    pub const fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Select, collapse and propagate once
    ///
    /// Returns `None` once the frontier is empty.
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` when a neighbour runs out of candidates. The
    /// same error is returned by every later call.
    pub fn step(&mut self) -> Result<Option<CollapseEvent>> {
        match self.state {
            GeneratorState::Done => return Ok(None),
            GeneratorState::Contradiction { coordinate, step } => {
                return Err(self.contradiction(coordinate, step));
            }
            GeneratorState::Propagating => {}
        }

        // Phase 1: pick the most constrained frontier cell
        let Some(coordinate) =
            select_lowest_entropy(&self.frontier, &self.grid, &mut self.random_selector)
        else {
            self.state = GeneratorState::Done;
            return Ok(None);
        };

        // Phase 2: collapse it to a random candidate
        let candidates = self
            .grid
            .get(coordinate)
            .and_then(|cell| cell.candidates())
            .cloned()
            .ok_or_else(|| {
                invalid_parameter(
                    "frontier",
                    &format!("{coordinate:?}"),
                    &"selected cell is not unresolved",
                )
            })?;

        let Some(tile) = self.random_selector.choose_tile(&candidates) else {
            self.state = GeneratorState::Contradiction {
                coordinate,
                step: self.steps,
            };
            return Err(self.contradiction(coordinate, self.steps));
        };

        if let Some(cell) = self.grid.get_mut(coordinate) {
            cell.collapse_to(tile)?;
        }
        self.frontier.remove(coordinate);
        self.steps += 1;

        log::trace!(
            "Step {}: collapsed {coordinate:?} to tile {tile} from {} candidates",
            self.steps,
            candidates.count()
        );

        // Phase 3: narrow the direct neighbours
        let propagation = propagate_from(
            &mut self.grid,
            &mut self.frontier,
            self.tileset,
            coordinate,
            tile,
        )?;

        if let Some(contradicted) = propagation.contradiction {
            self.state = GeneratorState::Contradiction {
                coordinate: contradicted,
                step: self.steps,
            };
            return Err(self.contradiction(contradicted, self.steps));
        }

        if self.frontier.is_empty() {
            self.state = GeneratorState::Done;
            log::info!(
                "Generated {}x{} grid with seed {} in {} collapses",
                self.config.height,
                self.config.width,
                self.config.seed,
                self.steps
            );
        }

        Ok(Some(CollapseEvent {
            step: self.steps,
            coordinate,
            tile,
            candidates,
        }))
    }

    /// Collapse until the frontier is empty
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` if any cell runs out of candidates
    pub fn run(self) -> Result<ResolvedGrid> {
        self.run_with(|_, _| {})
    }

    /// Collapse until the frontier is empty, reporting each collapse
    ///
    /// `observer` sees every event together with the grid right after its
    /// propagation.
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` if any cell runs out of candidates
    pub fn run_with<F>(mut self, mut observer: F) -> Result<ResolvedGrid>
    where
        F: FnMut(&CollapseEvent, &Grid),
    {
        while let Some(event) = self.step()? {
            observer(&event, &self.grid);
        }
        self.grid.to_resolved()
    }

    fn contradiction(&self, coordinate: Coord, step: usize) -> AlgorithmError {
        log::warn!(
            "Contradiction at {coordinate:?} after {step} collapses (seed {})",
            self.config.seed
        );
        AlgorithmError::Contradiction {
            coordinate,
            seed: self.config.seed,
            step,
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
