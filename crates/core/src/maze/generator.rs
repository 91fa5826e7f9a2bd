//! High-level maze generation that composes carving and placement.

use log::{debug, warn};

use crate::config::GenerationConfig;
use crate::types::Pos;

use super::carver::carve;
use super::grid::Grid;
use super::model::GeneratedMaze;
use super::placement::pick_spawn_cells;
use super::seed::rng_from_seed;

const START: Pos = Pos::new(0, 0);

pub struct MazeGenerator {
    config: GenerationConfig,
}

impl MazeGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn generate(&self, seed: u64) -> GeneratedMaze {
        let mut rng = rng_from_seed(seed);
        let mut grid = Grid::new(self.config.width, self.config.depth);

        // The origin is in bounds for every non-empty grid, and empty grids carve nothing.
        let outcome = carve(&mut grid, START, &mut rng).unwrap_or_default();
        if outcome.last_visited.is_none() {
            warn!(
                "{}x{} maze has no cells; treasure not placed",
                self.config.width, self.config.depth
            );
        }

        let enemy_spawns = pick_spawn_cells(&grid, self.config.enemy_count, &mut rng);

        debug!(
            "generated {}x{} maze for seed {seed}: treasure {:?}, {} enemy spawns",
            self.config.width,
            self.config.depth,
            outcome.last_visited,
            enemy_spawns.len()
        );

        GeneratedMaze {
            seed,
            cell_scale: self.config.cell_scale,
            grid,
            start: START,
            treasure: outcome.last_visited,
            enemy_spawns,
            passages: outcome.passages,
        }
    }
}
