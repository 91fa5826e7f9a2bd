//! TOML config file for the `mazegen` tool.
//!
//! ```toml
//! [maze]
//! width = 10
//! depth = 10
//! enemy_count = 2
//! cell_scale = 16.0
//! seed = 42
//!
//! [perception]
//! primary_radius = 30.0
//! damage_radius = 4.0
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maze_core::{GenerationConfig, PerceptionConfig};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSection {
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub maze: MazeSection,
    pub perception: PerceptionConfig,
}

impl ToolConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse TOML config")
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
