//! ECS World implementation

use std::any::TypeId;
use std::collections::HashMap;

use slotmap::SlotMap;

use super::storage::{AnyStorage, ComponentStorage};
use super::{Component, Entity};

/// ECS World containing all entities and components
///
/// Component storages are created lazily, keyed by component type. Entities
/// that lack a component a system requires are simply skipped by that system;
/// there are no failure paths in component access.
pub struct World {
    entities: SlotMap<Entity, ()>,
    storages: HashMap<TypeId, Box<dyn AnyStorage>>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            storages: HashMap::new(),
        }
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        self.entities.insert(())
    }

    /// Destroy an entity, clearing its rows from every component storage
    pub fn destroy_entity(&mut self, entity: Entity) {
        if self.entities.remove(entity).is_some() {
            for storage in self.storages.values_mut() {
                storage.remove_entity(entity);
            }
        }
    }

    /// Whether the entity is still alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate all live entities
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    /// Add a component to an entity
    ///
    /// Adding to a dead entity is a no-op.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.entities.contains_key(entity) {
            return;
        }
        self.storage_mut::<T>().insert(entity, component);
    }

    /// Remove a component from an entity, returning it if present
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.existing_storage_mut::<T>()
            .and_then(|storage| storage.remove(entity))
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.existing_storage::<T>()?.get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.existing_storage_mut::<T>()?.get_mut(entity)
    }

    /// Whether the entity has a component of the given type
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.existing_storage::<T>()
            .is_some_and(|storage| storage.contains(entity))
    }

    /// Iterate all entities that have a component of the given type
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.existing_storage::<T>()
            .into_iter()
            .flat_map(ComponentStorage::iter)
    }

    /// Iterate all entities that have a component of the given type, mutably
    pub fn query_mut<T: Component>(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.existing_storage_mut::<T>()
            .into_iter()
            .flat_map(ComponentStorage::iter_mut)
    }

    fn existing_storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any().downcast_ref())
    }

    fn existing_storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut())
    }

    fn storage_mut<T: Component>(&mut self) -> &mut ComponentStorage<T> {
        self.storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStorage::<T>::new()))
            .as_any_mut()
            .downcast_mut()
            .expect("storage registered under mismatched TypeId")
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
