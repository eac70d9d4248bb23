//! Game-specific components

use lawn_engine::ecs::Component;

/// Unit health
///
/// Stored for every seeded unit; no system depletes it yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthComponent {
    /// Remaining health
    pub current: f32,
}

impl Component for HealthComponent {}

impl HealthComponent {
    /// Create at full health
    pub fn new(current: f32) -> Self {
        Self { current }
    }
}
