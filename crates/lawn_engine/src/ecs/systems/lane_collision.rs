//! Lane collision system
//!
//! Each tick, for every lane, determines which tracked entities overlap
//! another entity in the same lane along the horizontal axis and records the
//! blocker in their [`BlockerComponent`]. The
//! [`HaltOnBlockSystem`](super::HaltOnBlockSystem) then derives effective
//! velocity from that blocker state.
//!
//! The scan is O(lane_size²) per lane per tick, which is fine at the lane
//! occupancies this engine targets (around ten units per lane).

use slotmap::SecondaryMap;

use crate::ecs::components::{
    BaseVelocityComponent, BlockerComponent, LaneComponent, SpanExtentComponent,
    TransformComponent, VelocityComponent,
};
use crate::ecs::{Entity, System, World};

/// Horizontal span overlap predicate
///
/// Returns true iff an endpoint of `[ml, mr]` lies strictly inside
/// `[sl, sr]`. This is intentionally not symmetric full-interval
/// intersection: a span that fully contains the other without either of its
/// endpoints falling inside it does not register. Collision resolution
/// downstream depends on exactly this behavior, so it must not be "fixed"
/// to true interval overlap.
pub fn span_overlaps(ml: f32, mr: f32, sl: f32, sr: f32) -> bool {
    (sl < ml && ml < sr) || (sl < mr && mr < sr)
}

#[derive(Clone, Copy)]
struct LaneSlot {
    lane: usize,
    index: usize,
}

/// Per-lane membership roster
///
/// Dense per-lane entity lists with a back-index map, so removal is a
/// swap-remove instead of a linear search. Scan order within a lane is
/// insertion order until a removal reorders the tail.
struct LaneRoster {
    lanes: Vec<Vec<Entity>>,
    slots: SecondaryMap<Entity, LaneSlot>,
}

impl LaneRoster {
    fn new(lane_count: usize) -> Self {
        Self {
            lanes: vec![Vec::new(); lane_count],
            slots: SecondaryMap::new(),
        }
    }

    fn insert(&mut self, entity: Entity, lane: usize) {
        debug_assert!(lane < self.lanes.len(), "lane index out of range");
        let index = self.lanes[lane].len();
        self.lanes[lane].push(entity);
        self.slots.insert(entity, LaneSlot { lane, index });
    }

    fn remove(&mut self, entity: Entity) -> bool {
        let Some(slot) = self.slots.remove(entity) else {
            return false;
        };
        let lane = &mut self.lanes[slot.lane];
        lane.swap_remove(slot.index);
        if let Some(&moved) = lane.get(slot.index) {
            if let Some(moved_slot) = self.slots.get_mut(moved) {
                moved_slot.index = slot.index;
            }
        }
        true
    }

    fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    fn lane(&self, lane: usize) -> &[Entity] {
        &self.lanes[lane]
    }
}

/// Per-lane pairwise overlap detection with blocker memory
///
/// Tracked entities must carry the full collision set: transform, velocity,
/// base velocity, span extents, lane, and blocker. Entities missing any of
/// these are skipped during the scan.
pub struct LaneCollisionSystem {
    roster: LaneRoster,
}

impl LaneCollisionSystem {
    /// Create for a fixed number of lanes
    pub fn new(lane_count: usize) -> Self {
        Self {
            roster: LaneRoster::new(lane_count),
        }
    }

    /// Start tracking an entity in its lane's roster
    ///
    /// Reads the entity's [`LaneComponent`]; returns false (and tracks
    /// nothing) if the entity lacks any component of the collision set or
    /// its lane index is out of range.
    pub fn track(&mut self, world: &World, entity: Entity) -> bool {
        let Some(lane) = world.get_component::<LaneComponent>(entity) else {
            return false;
        };
        let complete = world.has_component::<TransformComponent>(entity)
            && world.has_component::<VelocityComponent>(entity)
            && world.has_component::<BaseVelocityComponent>(entity)
            && world.has_component::<SpanExtentComponent>(entity)
            && world.has_component::<BlockerComponent>(entity);
        if !complete || lane.index >= self.roster.lane_count() {
            return false;
        }
        self.roster.insert(entity, lane.index);
        true
    }

    /// Stop tracking an entity (on deletion)
    pub fn untrack(&mut self, entity: Entity) -> bool {
        self.roster.remove(entity)
    }

    /// Number of lanes
    pub fn lane_count(&self) -> usize {
        self.roster.lane_count()
    }

    /// Number of entities tracked in a lane
    pub fn lane_len(&self, lane: usize) -> usize {
        self.roster.lane(lane).len()
    }
}

fn entity_span(world: &World, entity: Entity) -> Option<(f32, f32)> {
    let transform = world.get_component::<TransformComponent>(entity)?;
    let extent = world.get_component::<SpanExtentComponent>(entity)?;
    Some(extent.span_at(transform.world_x()))
}

impl System for LaneCollisionSystem {
    fn update(&mut self, world: &mut World, _dt: f32) {
        for lane in 0..self.roster.lane_count() {
            // Snapshot the scan order; blocker writes below never touch the roster.
            let ids: Vec<Entity> = self.roster.lane(lane).to_vec();

            for &id in &ids {
                let Some((left, right)) = entity_span(world, id) else {
                    continue;
                };

                let remembered = world
                    .get_component::<BlockerComponent>(id)
                    .and_then(|blocker| blocker.blocking);
                if let Some(current) = remembered {
                    // A despawned blocker has no span and counts as gone.
                    match entity_span(world, current) {
                        Some((cl, cr)) if span_overlaps(left, right, cl, cr) => continue,
                        _ => {
                            if let Some(blocker) = world.get_component_mut::<BlockerComponent>(id) {
                                blocker.clear();
                            }
                            log::debug!("lane {lane}: {id:?} no longer blocked by {current:?}");
                        }
                    }
                }

                let mut hit = None;
                for &other in &ids {
                    if other == id {
                        continue;
                    }
                    if let Some((ol, or)) = entity_span(world, other) {
                        // Last overlapping candidate in scan order wins.
                        if span_overlaps(left, right, ol, or) {
                            hit = Some(other);
                        }
                    }
                }
                if let Some(other) = hit {
                    if let Some(blocker) = world.get_component_mut::<BlockerComponent>(id) {
                        blocker.blocking = Some(other);
                    }
                    log::debug!("lane {lane}: {id:?} blocked by {other:?}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::systems::HaltOnBlockSystem;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    fn spawn_unit(
        world: &mut World,
        collision: &mut LaneCollisionSystem,
        x: f32,
        width: f32,
        speed: f32,
        lane: usize,
    ) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, TransformComponent::from_position(Vec2::new(x, 0.0)));
        world.add_component(entity, VelocityComponent::stopped());
        world.add_component(
            entity,
            BaseVelocityComponent::new(Vec2::new(speed, 0.0)),
        );
        world.add_component(entity, SpanExtentComponent::centered(width));
        world.add_component(entity, LaneComponent::new(lane));
        world.add_component(entity, BlockerComponent::none());
        assert!(collision.track(world, entity));
        entity
    }

    fn tick(world: &mut World, collision: &mut LaneCollisionSystem) {
        collision.update(world, 0.0);
        HaltOnBlockSystem.update(world, 0.0);
    }

    fn velocity_x(world: &World, entity: Entity) -> f32 {
        world
            .get_component::<VelocityComponent>(entity)
            .map(|velocity| velocity.linear.x)
            .unwrap_or_default()
    }

    fn blocker_of(world: &World, entity: Entity) -> Option<Entity> {
        world
            .get_component::<BlockerComponent>(entity)
            .and_then(|blocker| blocker.blocking)
    }

    #[test]
    fn test_predicate_catches_contained_endpoints() {
        // Right endpoint of the mover inside the other span.
        assert!(span_overlaps(25.0, 175.0, 75.0, 225.0));
        // Left endpoint of the mover inside the other span.
        assert!(span_overlaps(100.0, 300.0, 75.0, 225.0));
    }

    #[test]
    fn test_predicate_rejects_disjoint_spans() {
        assert!(!span_overlaps(0.0, 50.0, 100.0, 200.0));
        assert!(!span_overlaps(300.0, 400.0, 100.0, 200.0));
    }

    #[test]
    fn test_predicate_is_open_interval() {
        // Touching endpoints do not count as overlap.
        assert!(!span_overlaps(0.0, 100.0, 100.0, 200.0));
        assert!(!span_overlaps(200.0, 300.0, 100.0, 200.0));
    }

    #[test]
    fn test_predicate_misses_strict_containment() {
        // The first span fully contains the second; neither of its endpoints
        // lies inside the second span, so the predicate reports no overlap.
        // Historical behavior, relied upon downstream.
        assert!(!span_overlaps(0.0, 300.0, 100.0, 200.0));
    }

    #[test]
    fn test_disjoint_spans_produce_no_blockers() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let a = spawn_unit(&mut world, &mut collision, 100.0, 50.0, -20.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 500.0, 50.0, 0.0, 0);

        tick(&mut world, &mut collision);

        assert_eq!(blocker_of(&world, a), None);
        assert_eq!(blocker_of(&world, b), None);
        assert_relative_eq!(velocity_x(&world, a), -20.0);
    }

    #[test]
    fn test_same_lane_overlap_freezes_mover_same_tick() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        // Spans [25, 175] and [75, 225]: A's right endpoint falls inside B.
        let a = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 0);

        tick(&mut world, &mut collision);

        assert_eq!(blocker_of(&world, a), Some(b));
        assert_relative_eq!(velocity_x(&world, a), 0.0);
    }

    #[test]
    fn test_different_lanes_never_collide() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let a = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let _b = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 1);

        tick(&mut world, &mut collision);

        assert_eq!(blocker_of(&world, a), None);
        assert_relative_eq!(velocity_x(&world, a), -20.0);
    }

    #[test]
    fn test_blocker_removal_resumes_next_tick() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let a = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 0);

        tick(&mut world, &mut collision);
        assert_eq!(blocker_of(&world, a), Some(b));
        assert_relative_eq!(velocity_x(&world, a), 0.0);

        collision.untrack(b);
        world.destroy_entity(b);
        tick(&mut world, &mut collision);

        assert_eq!(blocker_of(&world, a), None);
        assert_relative_eq!(velocity_x(&world, a), -20.0);
    }

    #[test]
    fn test_blocker_moving_away_clears_reference() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let a = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 0);

        tick(&mut world, &mut collision);
        assert_eq!(blocker_of(&world, a), Some(b));

        // B teleports out of range; A should clear and resume the same tick.
        if let Some(transform) = world.get_component_mut::<TransformComponent>(b) {
            transform.position.x = 1000.0;
        }
        tick(&mut world, &mut collision);

        assert_eq!(blocker_of(&world, a), None);
        assert_relative_eq!(velocity_x(&world, a), -20.0);
    }

    #[test]
    fn test_collision_pass_is_idempotent() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let a = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 0);
        let c = spawn_unit(&mut world, &mut collision, 600.0, 150.0, -30.0, 0);

        tick(&mut world, &mut collision);
        let snapshot: Vec<_> = [a, b, c]
            .iter()
            .map(|&entity| (blocker_of(&world, entity), velocity_x(&world, entity)))
            .collect();

        // No dynamics step in between; a second pass must change nothing.
        tick(&mut world, &mut collision);
        let again: Vec<_> = [a, b, c]
            .iter()
            .map(|&entity| (blocker_of(&world, entity), velocity_x(&world, entity)))
            .collect();

        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_stationary_units_never_gain_velocity() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let plant = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 0);
        let _zombie = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);

        for _ in 0..3 {
            tick(&mut world, &mut collision);
        }

        // The plant may well remember a blocker, but its velocity stays zero.
        assert_relative_eq!(velocity_x(&world, plant), 0.0);
    }

    #[test]
    fn test_last_overlapping_candidate_wins() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let mover = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let _first = spawn_unit(&mut world, &mut collision, 140.0, 150.0, 0.0, 0);
        let second = spawn_unit(&mut world, &mut collision, 160.0, 150.0, 0.0, 0);

        tick(&mut world, &mut collision);

        // Both overlap the mover; the roster scans in insertion order, so the
        // later insertion is remembered.
        assert_eq!(blocker_of(&world, mover), Some(second));
    }

    #[test]
    fn test_remembered_blocker_sticks_while_overlapping() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let mover = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let first = spawn_unit(&mut world, &mut collision, 140.0, 150.0, 0.0, 0);

        tick(&mut world, &mut collision);
        assert_eq!(blocker_of(&world, mover), Some(first));

        // A new overlapping unit appears, but the remembered blocker still
        // overlaps, so the mover skips the re-scan entirely.
        let _second = spawn_unit(&mut world, &mut collision, 160.0, 150.0, 0.0, 0);
        tick(&mut world, &mut collision);

        assert_eq!(blocker_of(&world, mover), Some(first));
    }

    #[test]
    fn test_empty_lanes_are_a_noop() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);

        tick(&mut world, &mut collision);

        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_track_requires_full_component_set() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);

        let incomplete = world.create_entity();
        world.add_component(incomplete, LaneComponent::new(0));
        world.add_component(
            incomplete,
            TransformComponent::from_position(Vec2::new(0.0, 0.0)),
        );

        assert!(!collision.track(&world, incomplete));
        assert_eq!(collision.lane_len(0), 0);
    }

    #[test]
    fn test_track_rejects_out_of_range_lane() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(2);
        let entity = world.create_entity();
        world.add_component(entity, TransformComponent::default());
        world.add_component(entity, VelocityComponent::stopped());
        world.add_component(entity, BaseVelocityComponent::stationary());
        world.add_component(entity, SpanExtentComponent::centered(150.0));
        world.add_component(entity, LaneComponent::new(7));
        world.add_component(entity, BlockerComponent::none());

        assert!(!collision.track(&world, entity));
    }

    #[test]
    fn test_roster_swap_remove_keeps_back_index_consistent() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(1);
        let a = spawn_unit(&mut world, &mut collision, 0.0, 10.0, 0.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 100.0, 10.0, 0.0, 0);
        let c = spawn_unit(&mut world, &mut collision, 200.0, 10.0, 0.0, 0);

        assert_eq!(collision.lane_len(0), 3);
        assert!(collision.untrack(a));
        assert_eq!(collision.lane_len(0), 2);

        // c was swapped into a's slot; removing it again must still work.
        assert!(collision.untrack(c));
        assert!(collision.untrack(b));
        assert_eq!(collision.lane_len(0), 0);
        assert!(!collision.untrack(a));
    }

    /// The concrete scenario from the movement design notes: mover A at
    /// x=100 (span [25, 175], base velocity -20) against stationary B at
    /// x=150 (span [75, 225]) in lane 0.
    #[test]
    fn test_mover_against_stationary_scenario() {
        let mut world = World::new();
        let mut collision = LaneCollisionSystem::new(5);
        let a = spawn_unit(&mut world, &mut collision, 100.0, 150.0, -20.0, 0);
        let b = spawn_unit(&mut world, &mut collision, 150.0, 150.0, 0.0, 0);

        tick(&mut world, &mut collision);
        assert_eq!(blocker_of(&world, a), Some(b));
        let velocity = world.get_component::<VelocityComponent>(a).unwrap();
        assert_eq!(velocity.linear, Vec2::new(0.0, 0.0));

        collision.untrack(b);
        world.destroy_entity(b);

        tick(&mut world, &mut collision);
        assert_eq!(blocker_of(&world, a), None);
        let velocity = world.get_component::<VelocityComponent>(a).unwrap();
        assert_eq!(velocity.linear, Vec2::new(-20.0, 0.0));
    }
}
