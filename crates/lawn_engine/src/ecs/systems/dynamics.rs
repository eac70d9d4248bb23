//! Dynamics system

use crate::ecs::components::{TransformComponent, VelocityComponent};
use crate::ecs::{Entity, System, World};
use crate::foundation::math::Vec2;

/// Integrates velocity into transform position
///
/// `position += velocity * dt`, applied uniformly to every entity carrying
/// both a transform and a velocity.
pub struct DynamicsSystem;

impl System for DynamicsSystem {
    fn update(&mut self, world: &mut World, dt: f32) {
        let deltas: Vec<(Entity, Vec2)> = world
            .query::<VelocityComponent>()
            .map(|(id, velocity)| (id, velocity.linear * dt))
            .collect();
        for (id, delta) in deltas {
            if let Some(transform) = world.get_component_mut::<TransformComponent>(id) {
                transform.translate(delta);
            }
        }
    }
}
