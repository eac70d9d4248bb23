//! Sprite render system

use crate::ecs::components::{SpriteComponent, TransformComponent};
use crate::ecs::{System, World};
use crate::render::{QuadBatch, RenderError, Surface};

/// Collects one quad per (transform, sprite) entity into a batch
///
/// The batch is rebuilt every tick and flushed to the surface as a single
/// submission per frame. Draw order follows storage iteration order, which
/// tracks entity creation order — seed backgrounds before units.
pub struct SpriteRenderSystem {
    batch: QuadBatch,
}

impl Default for SpriteRenderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteRenderSystem {
    /// Create with an empty batch
    pub fn new() -> Self {
        Self {
            batch: QuadBatch::new(),
        }
    }

    /// This frame's accumulated batch
    pub fn batch(&self) -> &QuadBatch {
        &self.batch
    }

    /// Flush the current batch to the surface in one submission
    pub fn render_to(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        surface.submit(&self.batch)
    }
}

impl System for SpriteRenderSystem {
    fn update(&mut self, world: &mut World, _dt: f32) {
        self.batch.begin();
        for (entity, sprite) in world.query::<SpriteComponent>() {
            if let Some(transform) = world.get_component::<TransformComponent>(entity) {
                self.batch.draw_tile(&sprite.tile, transform);
            }
        }
    }
}
