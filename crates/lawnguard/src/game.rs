//! Game mode: the composition root
//!
//! Builds the world, wires the systems in their fixed dependency order
//! (shamble, collision, halt, dynamics, render), seeds the playfield, and
//! drives one update plus one batched render submission per frame.

use lawn_engine::assets::Texture;
use lawn_engine::ecs::components::{
    BaseVelocityComponent, BlockerComponent, LaneComponent, SpanExtentComponent, SpriteComponent,
    TransformComponent, VelocityComponent,
};
use lawn_engine::ecs::systems::{
    DynamicsSystem, HaltOnBlockSystem, LaneCollisionSystem, SpriteRenderSystem,
};
use lawn_engine::ecs::{Entity, System, World};
use lawn_engine::foundation::math::Vec2;
use lawn_engine::render::{RenderError, Surface};

use crate::components::HealthComponent;
use crate::config::{GameConfig, GridConfig};
use crate::error::GameError;
use crate::media::Textures;
use crate::units::{plants, zombs, UnitSide, UnitSpec};

/// Scale applied to the background terrain tiles
const BACKGROUND_SCALE: f32 = 8.0;

/// Idle shamble animation system
///
/// Matches any entity with a velocity component. The update body is an
/// intentional placeholder.
pub struct ShambleSystem;

impl System for ShambleSystem {
    fn update(&mut self, world: &mut World, _dt: f32) {
        for (_entity, _velocity) in world.query::<VelocityComponent>() {
            // TODO: lurch forward briefly, decay quickly, then rest before
            // the next shamble
        }
    }
}

/// The playable lane-defense mode
pub struct GameMode {
    world: World,
    shamble: ShambleSystem,
    collision: LaneCollisionSystem,
    halt: HaltOnBlockSystem,
    dynamics: DynamicsSystem,
    render: SpriteRenderSystem,
    grid: GridConfig,
    textures: Textures,
}

impl GameMode {
    /// Build the mode and seed the opening playfield
    pub fn new(config: &GameConfig, textures: Textures) -> Result<Self, GameError> {
        let mut mode = Self {
            world: World::new(),
            shamble: ShambleSystem,
            collision: LaneCollisionSystem::new(config.grid.lane_count()),
            halt: HaltOnBlockSystem,
            dynamics: DynamicsSystem,
            render: SpriteRenderSystem::new(),
            grid: config.grid.clone(),
            textures,
        };
        mode.seed_background()?;
        mode.seed_units()?;
        log::info!(
            "game mode ready: {} entities across {} lanes",
            mode.world.entity_count(),
            mode.collision.lane_count()
        );
        Ok(mode)
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Systems run strictly sequentially; the halt pass must see the blocker
    /// state the collision pass wrote this tick, before dynamics integrates.
    pub fn update(&mut self, dt: f32) {
        self.shamble.update(&mut self.world, dt);
        self.collision.update(&mut self.world, dt);
        self.halt.update(&mut self.world, dt);
        self.dynamics.update(&mut self.world, dt);
        self.render.update(&mut self.world, dt);
    }

    /// Flush this frame's quads to the surface in one submission
    pub fn render_to(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        self.render.render_to(surface)
    }

    /// Spawn a unit from its spec at grid cell `(gx, gy)`
    ///
    /// The row index doubles as the unit's collision lane, fixed for its
    /// lifetime.
    pub fn spawn_unit(
        &mut self,
        spec: &UnitSpec,
        gx: usize,
        gy: usize,
    ) -> Result<Entity, GameError> {
        if gx >= self.grid.columns || gy >= self.grid.rows {
            return Err(GameError::OutOfGrid(gx, gy));
        }
        let texture = match spec.side {
            UnitSide::Plant => self.textures.plant(spec.art)?,
            UnitSide::Zombie => self.textures.zomb(spec.art)?,
        };
        let tile = texture.as_tile();

        // Anchor between the feet: pivot at the bottom center of the art.
        let pivot = Vec2::new(tile.width() / 2.0, tile.height());

        let entity = self.world.create_entity();
        self.world.add_component(
            entity,
            TransformComponent::new(
                pivot,
                self.grid.cell_position(gx, gy),
                Vec2::new(1.0, 1.0),
                0.0,
            ),
        );
        self.world.add_component(entity, SpriteComponent::new(tile.clone()));
        self.world
            .add_component(entity, SpanExtentComponent::centered(tile.width()));
        self.world.add_component(entity, VelocityComponent::stopped());
        self.world.add_component(
            entity,
            BaseVelocityComponent::new(Vec2::new(spec.speed, 0.0)),
        );
        self.world.add_component(entity, LaneComponent::new(gy));
        self.world.add_component(entity, BlockerComponent::none());
        self.world
            .add_component(entity, HealthComponent::new(spec.health));

        self.collision.track(&self.world, entity);
        log::debug!("spawned {} at ({gx}, {gy}) as {entity:?}", spec.art);
        Ok(entity)
    }

    /// Remove a unit from its lane and from the world
    pub fn remove_unit(&mut self, entity: Entity) {
        self.collision.untrack(entity);
        self.world.destroy_entity(entity);
    }

    /// The underlying ECS world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the underlying ECS world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn seed_background(&mut self) -> Result<(), GameError> {
        let ground = self.textures.misc("ground")?;
        self.spawn_backdrop(&ground, 2, 2, 446, 192, Vec2::new(0.0, 0.0));
        self.spawn_backdrop(
            &ground,
            248,
            242,
            246,
            169,
            Vec2::new(75.0 * BACKGROUND_SCALE, 17.0 * BACKGROUND_SCALE),
        );
        Ok(())
    }

    fn spawn_backdrop(&mut self, sheet: &Texture, x: u32, y: u32, w: u32, h: u32, position: Vec2) {
        let entity = self.world.create_entity();
        self.world.add_component(
            entity,
            TransformComponent::from_position(position).with_uniform_scale(BACKGROUND_SCALE),
        );
        self.world
            .add_component(entity, SpriteComponent::new(sheet.tile(x, y, w, h)));
    }

    fn seed_units(&mut self) -> Result<(), GameError> {
        let plant_column = 4;
        let plant_rows = [
            plants::SHOOTER,
            plants::THREEPEATER,
            plants::SHOOTER,
            plants::SHOOTER,
            plants::THREEPEATER,
        ];
        for (gy, spec) in plant_rows.iter().enumerate() {
            self.spawn_unit(spec, plant_column, gy)?;
        }

        let zombie_column = 6;
        let zombie_rows = [
            zombs::NORMAL,
            zombs::NORMAL,
            zombs::GLITTER,
            zombs::NORMAL,
            zombs::GLITTER,
        ];
        for (gy, spec) in zombie_rows.iter().enumerate() {
            self.spawn_unit(spec, zombie_column, gy)?;
        }
        Ok(())
    }
}
