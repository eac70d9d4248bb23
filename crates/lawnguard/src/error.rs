//! Game-level errors

use thiserror::Error;

use lawn_engine::assets::AssetError;
use lawn_engine::config::ConfigError;
use lawn_engine::render::RenderError;

/// Top-level game errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Asset loading error
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// Rendering error
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A unit roster entry names art that was never loaded
    #[error("unknown unit art {0:?}")]
    UnknownArt(String),

    /// A unit was placed outside the playfield grid
    #[error("grid placement ({0}, {1}) out of range")]
    OutOfGrid(usize, usize),
}
