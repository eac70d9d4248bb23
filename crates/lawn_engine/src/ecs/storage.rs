//! Typed component storage
//!
//! Each component type owns one sparse secondary map keyed by entity. The
//! world erases the concrete type behind [`AnyStorage`] so it can clear an
//! entity's rows across all storages on despawn without knowing the types.

use std::any::Any;

use slotmap::SecondaryMap;

use super::{Component, Entity};

/// Type-erased view of a component storage, used by the world for
/// entity teardown.
pub(crate) trait AnyStorage {
    /// Drop the entity's row, if it has one.
    fn remove_entity(&mut self, entity: Entity);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Sparse storage of one component type
pub struct ComponentStorage<T: Component> {
    rows: SecondaryMap<Entity, T>,
}

impl<T: Component> ComponentStorage<T> {
    /// Create an empty storage
    pub fn new() -> Self {
        Self {
            rows: SecondaryMap::new(),
        }
    }

    /// Insert or replace the entity's component value
    pub fn insert(&mut self, entity: Entity, value: T) {
        self.rows.insert(entity, value);
    }

    /// Remove and return the entity's component value
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.rows.remove(entity)
    }

    /// Read the entity's component value
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.rows.get(entity)
    }

    /// Mutably access the entity's component value
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.rows.get_mut(entity)
    }

    /// Whether the entity has a value in this storage
    pub fn contains(&self, entity: Entity) -> bool {
        self.rows.contains_key(entity)
    }

    /// Iterate all rows
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.rows.iter()
    }

    /// Iterate all rows mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.rows.iter_mut()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the storage holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Component> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> AnyStorage for ComponentStorage<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.rows.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
