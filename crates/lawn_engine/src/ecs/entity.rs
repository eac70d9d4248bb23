//! Entity implementation

slotmap::new_key_type! {
    /// Entity identifier
    ///
    /// A generational key: once an entity is destroyed, stale copies of its
    /// key no longer resolve to any component data.
    pub struct Entity;
}
