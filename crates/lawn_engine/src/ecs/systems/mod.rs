//! Built-in engine systems
//!
//! Intended per-frame order: lane collision, then halt-on-block, then
//! dynamics, then sprite rendering. The halt system must see the blocker
//! state written by the same tick's collision pass before dynamics
//! integrates.

pub mod dynamics;
pub mod halt;
pub mod lane_collision;
pub mod sprite_render;

pub use dynamics::DynamicsSystem;
pub use halt::HaltOnBlockSystem;
pub use lane_collision::{span_overlaps, LaneCollisionSystem};
pub use sprite_render::SpriteRenderSystem;
