//! Lane-defense game binary
//!
//! Loads configuration and art, builds the game mode, and drives a fixed
//! frame loop against a headless surface.

mod components;
mod config;
mod error;
mod game;
mod media;
mod units;

use std::path::Path;
use std::time::Duration;

use lawn_engine::assets::{TextureCatalog, TextureConfig};
use lawn_engine::config::Config;
use lawn_engine::foundation::logging;
use lawn_engine::foundation::time::Timer;
use lawn_engine::render::HeadlessSurface;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::GameMode;
use crate::media::Textures;

const CONFIG_PATH: &str = "lawnguard.toml";

fn main() {
    logging::init();
    if let Err(e) = run() {
        log::error!("fatal: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        GameConfig::load_from_file(config_path)?
    } else {
        log::info!("no {CONFIG_PATH} found, using defaults");
        GameConfig::default()
    };

    let mut catalog = TextureCatalog::new();
    let texture_config = TextureConfig::with_scale(config.texture_scale);
    let textures = Textures::load(&mut catalog, &config.assets_root, &texture_config)?;
    log::info!("loaded {} textures from {:?}", catalog.len(), config.assets_root);

    let mut mode = GameMode::new(&config, textures)?;
    let mut surface = HeadlessSurface::new();
    let mut timer = Timer::new();
    let frame_budget = Duration::from_secs_f32(1.0 / config.run.target_fps);

    loop {
        timer.update();
        mode.update(timer.delta_time());
        mode.render_to(&mut surface)?;

        if let Some(max) = config.run.max_frames {
            if timer.frame_count() >= max {
                break;
            }
        }
        std::thread::sleep(frame_budget);
    }

    log::info!(
        "stopped after {} frames ({:.1} s simulated)",
        timer.frame_count(),
        timer.total_time()
    );
    Ok(())
}
