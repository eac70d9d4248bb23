//! Component trait

/// Marker trait for components
///
/// Components are pure data; systems hold the logic that reads and mutates
/// them through the [`World`](crate::ecs::World).
pub trait Component: 'static + Send + Sync {}
