//! Transform component
//!
//! Pure data component representing 2D placement. The pivot is the anchor
//! point inside the sprite, in display units: a unit standing on the ground
//! uses pivot `(width / 2, height)` so its position names the point between
//! its feet.

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// 2D transform component
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// World space position of the pivot
    pub position: Vec2,

    /// Anchor offset inside the sprite, in display units
    pub pivot: Vec2,

    /// Scale factors
    pub scale: Vec2,

    /// Rotation in radians
    pub rotation: f32,
}

impl Component for TransformComponent {}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            pivot: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
        }
    }
}

impl TransformComponent {
    /// Create from full placement specification
    pub fn new(pivot: Vec2, position: Vec2, scale: Vec2, rotation: f32) -> Self {
        Self {
            position,
            pivot,
            scale,
            rotation,
        }
    }

    /// Create from position only
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: set the pivot
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Builder pattern: set a uniform scale
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::new(scale, scale);
        self
    }

    /// World x-coordinate of the pivot
    pub fn world_x(&self) -> f32 {
        self.position.x
    }

    /// World y-coordinate of the pivot
    pub fn world_y(&self) -> f32 {
        self.position.y
    }

    /// Move the transform by `delta` world units
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Top-left corner of the sprite quad, in world units
    pub fn quad_origin(&self) -> Vec2 {
        self.position - Vec2::new(self.pivot.x * self.scale.x, self.pivot.y * self.scale.y)
    }
}
