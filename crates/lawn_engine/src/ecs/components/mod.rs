//! Built-in engine components
//!
//! All components are pure data; the systems in
//! [`ecs::systems`](crate::ecs::systems) hold the logic.

pub mod collision;
pub mod movement;
pub mod sprite;
pub mod transform;

pub use collision::{BlockerComponent, LaneComponent, SpanExtentComponent};
pub use movement::{BaseVelocityComponent, VelocityComponent};
pub use sprite::SpriteComponent;
pub use transform::TransformComponent;
