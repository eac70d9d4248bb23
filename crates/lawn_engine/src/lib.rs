//! # Lawn Engine
//!
//! A small 2D game engine for lane-based games, built around a sparse-set
//! Entity-Component-System and a quad-batching renderer abstraction.
//!
//! ## Features
//!
//! - **ECS Architecture**: Generational entities with typed component storage
//! - **Lane Collision**: Per-lane horizontal overlap detection with blocker memory
//! - **Quad Batching**: One batched draw submission per frame via the `Surface` seam
//! - **Asset Loading**: Scale-aware texture sheets with sub-rectangle tiles
//!
//! ## Quick Start
//!
//! ```rust
//! use lawn_engine::prelude::*;
//!
//! let mut world = World::new();
//! let entity = world.create_entity();
//! world.add_component(entity, TransformComponent::from_position(Vec2::new(100.0, 0.0)));
//! world.add_component(entity, VelocityComponent::new(Vec2::new(-20.0, 0.0)));
//!
//! let mut dynamics = DynamicsSystem;
//! dynamics.update(&mut world, 0.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod ecs;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, Texture, TextureCatalog, TextureConfig},
        config::{Config, ConfigError},
        ecs::{
            components::{
                BaseVelocityComponent, BlockerComponent, LaneComponent, SpanExtentComponent,
                SpriteComponent, TransformComponent, VelocityComponent,
            },
            systems::{
                DynamicsSystem, HaltOnBlockSystem, LaneCollisionSystem, SpriteRenderSystem,
            },
            Component, Entity, System, World,
        },
        foundation::{
            math::{Rect, Vec2},
            time::Timer,
        },
        render::{HeadlessSurface, QuadBatch, RenderError, Surface, Tile},
    };
}
