//! Procedural maze generation split into coherent submodules.

pub mod carver;
pub mod grid;
pub mod model;
pub mod placement;
pub mod render;

mod error;
mod generator;
mod seed;

pub use carver::{CarveOutcome, Passage, carve};
pub use error::MazeError;
pub use generator::MazeGenerator;
pub use grid::{Cell, Grid};
pub use model::GeneratedMaze;
pub use placement::pick_spawn_cells;
pub use render::render_ascii;
pub use seed::{random_index, rng_from_seed};

use crate::config::GenerationConfig;

pub fn generate_maze(config: GenerationConfig, seed: u64) -> GeneratedMaze {
    MazeGenerator::new(config).generate(seed)
}
