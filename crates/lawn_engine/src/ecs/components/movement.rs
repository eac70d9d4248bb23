//! Movement components
//!
//! Two velocities per entity: the effective one the dynamics system
//! integrates, and the intrinsic one a mover reverts to when nothing blocks
//! it. Stationary units carry a zero base velocity and never move.

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// Effective linear velocity in world units per second
///
/// Zero means "currently stopped"; the halt system overwrites this each tick
/// from the blocker state.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityComponent {
    /// Current linear velocity
    pub linear: Vec2,
}

impl Component for VelocityComponent {}

impl Default for VelocityComponent {
    fn default() -> Self {
        Self::stopped()
    }
}

impl VelocityComponent {
    /// Create with an initial velocity
    pub fn new(linear: Vec2) -> Self {
        Self { linear }
    }

    /// Create at rest
    pub fn stopped() -> Self {
        Self {
            linear: Vec2::zeros(),
        }
    }

    /// Whether the entity is currently at rest
    pub fn is_stopped(&self) -> bool {
        self.linear == Vec2::zeros()
    }
}

/// Intrinsic velocity the entity reverts to when unblocked
///
/// Non-zero for movers (zombies), zero for stationary units (plants).
#[derive(Debug, Clone, PartialEq)]
pub struct BaseVelocityComponent {
    /// Intrinsic linear velocity
    pub linear: Vec2,
}

impl Component for BaseVelocityComponent {}

impl Default for BaseVelocityComponent {
    fn default() -> Self {
        Self::stationary()
    }
}

impl BaseVelocityComponent {
    /// Create with an intrinsic velocity
    pub fn new(linear: Vec2) -> Self {
        Self { linear }
    }

    /// Create a stationary unit's base velocity
    pub fn stationary() -> Self {
        Self {
            linear: Vec2::zeros(),
        }
    }

    /// Whether the entity moves on its own
    pub fn is_mover(&self) -> bool {
        self.linear != Vec2::zeros()
    }
}
