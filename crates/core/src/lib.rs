pub mod config;
pub mod maze;
pub mod perception;
pub mod types;

pub use config::{GenerationConfig, PerceptionConfig};
pub use maze::{GeneratedMaze, MazeError, MazeGenerator, generate_maze};
pub use perception::{Enemy, EnemyAction, EnemyRoster, MazeOccluder, Occluder};
pub use types::*;
