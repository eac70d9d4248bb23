//! Halt-on-block system

use crate::ecs::components::{BaseVelocityComponent, BlockerComponent, VelocityComponent};
use crate::ecs::{Entity, System, World};
use crate::foundation::math::Vec2;

/// Derives effective velocity from blocker state
///
/// A pure function of the blocker reference: blocked entities get zero
/// velocity, unblocked ones revert to their base velocity. Runs after the
/// collision pass so freezing and thawing reflect the current tick's
/// results before dynamics integrates.
pub struct HaltOnBlockSystem;

impl System for HaltOnBlockSystem {
    fn update(&mut self, world: &mut World, _dt: f32) {
        let ids: Vec<Entity> = world.query::<BlockerComponent>().map(|(id, _)| id).collect();
        for id in ids {
            let Some(base) = world
                .get_component::<BaseVelocityComponent>(id)
                .map(|base| base.linear)
            else {
                continue;
            };
            let blocked = world
                .get_component::<BlockerComponent>(id)
                .is_some_and(BlockerComponent::is_blocked);
            if let Some(velocity) = world.get_component_mut::<VelocityComponent>(id) {
                velocity.linear = if blocked { Vec2::zeros() } else { base };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(world: &mut World, base: Vec2, blocking: Option<Entity>) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, VelocityComponent::new(Vec2::new(99.0, 99.0)));
        world.add_component(entity, BaseVelocityComponent::new(base));
        world.add_component(entity, BlockerComponent { blocking });
        entity
    }

    #[test]
    fn test_blocked_entity_is_frozen() {
        let mut world = World::new();
        let wall = world.create_entity();
        let mover = spawn(&mut world, Vec2::new(-20.0, 0.0), Some(wall));

        HaltOnBlockSystem.update(&mut world, 0.016);

        let velocity = world.get_component::<VelocityComponent>(mover).unwrap();
        assert_eq!(velocity.linear, Vec2::zeros());
    }

    #[test]
    fn test_unblocked_entity_reverts_to_base() {
        let mut world = World::new();
        let mover = spawn(&mut world, Vec2::new(-20.0, 0.0), None);

        HaltOnBlockSystem.update(&mut world, 0.016);

        let velocity = world.get_component::<VelocityComponent>(mover).unwrap();
        assert_eq!(velocity.linear, Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn test_entities_without_velocity_are_skipped() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, BlockerComponent::none());

        // Missing velocity and base velocity; must not panic.
        HaltOnBlockSystem.update(&mut world, 0.016);

        assert!(world.get_component::<VelocityComponent>(entity).is_none());
    }
}
