//! Tunable settings for maze generation and enemy perception.
//!
//! Every field has a default so partial config files deserialize cleanly.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_SCALE: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: usize,
    pub depth: usize,
    pub enemy_count: usize,
    /// World units per cell along both axes.
    pub cell_scale: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { width: 10, depth: 10, enemy_count: 2, cell_scale: DEFAULT_CELL_SCALE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptionConfig {
    pub primary_radius: f32,
    /// Full opening of the sight cone in degrees, `0..=360`.
    pub primary_angle: f32,
    pub damage_radius: f32,
    pub damage_angle: f32,
    /// World units per second while chasing.
    pub move_speed: f32,
    /// Seconds between perception checks.
    pub check_interval: f32,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            primary_radius: 30.0,
            primary_angle: 90.0,
            damage_radius: 4.0,
            damage_angle: 120.0,
            move_speed: 3.0,
            check_interval: 0.2,
        }
    }
}
