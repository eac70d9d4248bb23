//! Game configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use lawn_engine::config::Config;
use lawn_engine::foundation::math::Vec2;

/// Top-level game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield grid layout
    pub grid: GridConfig,

    /// Frame loop settings
    pub run: RunConfig,

    /// Root directory for image assets
    pub assets_root: PathBuf,

    /// Source pixels per display unit for unit art
    pub texture_scale: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            run: RunConfig::default(),
            assets_root: PathBuf::from("assets"),
            texture_scale: 1.0,
        }
    }
}

impl Config for GameConfig {}

/// Playfield grid layout
///
/// Units occupy cells on a columns-by-rows grid; each row is one collision
/// lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// World x of grid column 0
    pub min_x: f32,

    /// World y of grid row 0
    pub min_y: f32,

    /// Cell width in world units
    pub cell_width: f32,

    /// Cell height in world units
    pub cell_height: f32,

    /// Number of grid columns
    pub columns: usize,

    /// Number of grid rows (= collision lanes)
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_x: 760.0,
            min_y: 400.0,
            cell_width: 200.0,
            cell_height: 260.0,
            columns: 9,
            rows: 5,
        }
    }
}

impl GridConfig {
    /// World position of cell `(gx, gy)`
    pub fn cell_position(&self, gx: usize, gy: usize) -> Vec2 {
        Vec2::new(
            self.min_x + self.cell_width * gx as f32,
            self.min_y + self.cell_height * gy as f32,
        )
    }

    /// Number of collision lanes
    pub fn lane_count(&self) -> usize {
        self.rows
    }
}

/// Frame loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many frames; `None` runs until interrupted
    pub max_frames: Option<u64>,

    /// Target frame rate
    pub target_fps: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_frames: None,
            target_fps: 60.0,
        }
    }
}
