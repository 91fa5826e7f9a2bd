//! Public data model for a generated maze.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Pos, WorldPos};

use super::carver::Passage;
use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMaze {
    pub seed: u64,
    pub cell_scale: f32,
    pub grid: Grid,
    pub start: Pos,
    /// Last newly visited cell of the carve. `None` only for an empty grid.
    pub treasure: Option<Pos>,
    pub enemy_spawns: Vec<Pos>,
    pub passages: Vec<Passage>,
}

impl GeneratedMaze {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16 + self.grid.len());
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.depth() as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(cell.wall_bits() | (u8::from(cell.visited) << 4));
        }
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.start.z.to_le_bytes());
        match self.treasure {
            Some(pos) => {
                bytes.push(1);
                bytes.extend(pos.x.to_le_bytes());
                bytes.extend(pos.z.to_le_bytes());
            }
            None => bytes.push(0),
        }
        bytes.extend((self.enemy_spawns.len() as u32).to_le_bytes());
        for spawn in &self.enemy_spawns {
            bytes.extend(spawn.x.to_le_bytes());
            bytes.extend(spawn.z.to_le_bytes());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn treasure_world(&self) -> Option<WorldPos> {
        self.treasure.map(|pos| WorldPos::from_cell(pos, self.cell_scale))
    }

    pub fn enemy_spawns_world(&self) -> Vec<WorldPos> {
        self.enemy_spawns.iter().map(|&pos| WorldPos::from_cell(pos, self.cell_scale)).collect()
    }
}
