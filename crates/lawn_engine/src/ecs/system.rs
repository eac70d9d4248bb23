//! System trait

use super::World;

/// System trait for processing entities and components
///
/// Systems run strictly sequentially within a frame; the collision results
/// written by one system are visible to the next in the same tick.
pub trait System {
    /// Advance the system by one tick of `dt` seconds
    fn update(&mut self, world: &mut World, dt: f32);
}
