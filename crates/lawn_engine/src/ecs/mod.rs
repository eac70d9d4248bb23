//! Entity-Component-System implementation
//!
//! Provides a sparse-set ECS: entities are generational keys, each component
//! type lives in its own typed storage, and systems run strictly sequentially
//! within a frame.

pub mod component;
pub mod components;
pub mod entity;
pub mod storage;
pub mod system;
pub mod systems;
pub mod world;

pub use component::Component;
pub use entity::Entity;
pub use storage::ComponentStorage;
pub use system::System;
pub use world::World;
