//! Sprite component

use crate::ecs::Component;
use crate::render::Tile;

/// Renderable tile reference, constant per entity after creation
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// The tile region this entity draws
    pub tile: Tile,
}

impl Component for SpriteComponent {}

impl SpriteComponent {
    /// Create from a tile
    pub fn new(tile: Tile) -> Self {
        Self { tile }
    }
}
