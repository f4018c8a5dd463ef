use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::{NULL, Object};

/// Identifier of an entity. Statements refer to their subject by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether an entity is only a declared concept or has a concrete value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityState {
    Exists,
    Embodied,
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityState::Exists => f.write_str("exists"),
            EntityState::Embodied => f.write_str("embodied"),
        }
    }
}

/// An individual in the domain of discourse: a witness, a car, "David".
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub public_name: String,
    pub state: EntityState,
    /// Conceptual category, e.g. "Person" or "Vehicle".
    pub thing: String,
    pub value: Object,
    properties: HashMap<String, Object>,
}

impl Entity {
    fn new(id: EntityId) -> Self {
        Self {
            id,
            public_name: String::new(),
            state: EntityState::Exists,
            thing: "Thing".to_string(),
            value: Object::Null,
            properties: HashMap::new(),
        }
    }

    /// Give the entity a concrete value; it becomes embodied.
    pub fn instantiate_as(&mut self, value: Object) {
        self.value = value;
        self.state = EntityState::Embodied;
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: Object) {
        self.properties.insert(key.into(), value);
    }

    pub fn property(&self, key: &str) -> &Object {
        self.properties.get(key).unwrap_or(&NULL)
    }

    /// Public name, or `anon:<id>` for unnamed entities.
    pub fn display_name(&self) -> String {
        if self.public_name.is_empty() {
            format!("anon:{}", self.id.0)
        } else {
            self.public_name.clone()
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} | {} | {} | {}]",
            self.display_name(),
            self.state,
            self.thing,
            self.value
        )
    }
}

const FIRST_ID: u32 = 100;

/// Owns every entity and hands out ids.
///
/// Not global: each interpreter or test builds its own registry.
#[derive(Debug)]
pub struct EntityRegistry {
    next_id: u32,
    by_id: HashMap<EntityId, Entity>,
    by_name: HashMap<String, EntityId>,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            next_id: FIRST_ID,
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create an anonymous entity.
    pub fn create(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.by_id.insert(id, Entity::new(id));
        id
    }

    /// Create an entity with a public name and category.
    /// A name already in use is reassigned to the new entity.
    pub fn create_named(&mut self, name: &str, thing: &str) -> EntityId {
        let id = self.create();
        self.assign_name(id, name);
        if let Some(entity) = self.by_id.get_mut(&id) {
            entity.thing = thing.to_string();
        }
        id
    }

    /// Rename an entity, dropping its previous name from the index.
    pub fn assign_name(&mut self, id: EntityId, name: &str) -> bool {
        let Some(entity) = self.by_id.get_mut(&id) else {
            return false;
        };
        if !entity.public_name.is_empty() && entity.public_name != name {
            self.by_name.remove(&entity.public_name);
        }
        entity.public_name = name.to_string();
        if let Some(previous) = self.by_name.insert(name.to_string(), id)
            && previous != id
            && let Some(old) = self.by_id.get_mut(&previous)
        {
            old.public_name.clear();
        }
        true
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.by_id.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.by_id.get_mut(&id)
    }

    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_100_and_increase() {
        let mut reg = EntityRegistry::new();
        assert_eq!(reg.create(), EntityId(100));
        assert_eq!(reg.create(), EntityId(101));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_anonymous_display() {
        let mut reg = EntityRegistry::new();
        let id = reg.create();
        let entity = reg.get(id).unwrap();
        assert_eq!(entity.display_name(), "anon:100");
        assert_eq!(entity.to_string(), "[anon:100 | exists | Thing | null]");
    }

    #[test]
    fn test_create_named_and_lookup() {
        let mut reg = EntityRegistry::new();
        let id = reg.create_named("David", "Person");
        let david = reg.lookup("David").unwrap();
        assert_eq!(david.id, id);
        assert_eq!(david.thing, "Person");
        assert!(reg.lookup("Goliath").is_none());
    }

    #[test]
    fn test_rename_drops_old_name() {
        let mut reg = EntityRegistry::new();
        let id = reg.create_named("witness", "Human");
        assert!(reg.assign_name(id, "Juan Pérez"));
        assert!(reg.lookup("witness").is_none());
        assert_eq!(reg.lookup("Juan Pérez").unwrap().id, id);
    }

    #[test]
    fn test_name_reuse_moves_to_new_entity() {
        let mut reg = EntityRegistry::new();
        let first = reg.create_named("car", "Vehicle");
        let second = reg.create_named("car", "Vehicle");
        assert_eq!(reg.lookup("car").unwrap().id, second);
        assert_eq!(reg.get(first).unwrap().display_name(), "anon:100");
    }

    #[test]
    fn test_assign_name_unknown_id() {
        let mut reg = EntityRegistry::new();
        assert!(!reg.assign_name(EntityId(5), "ghost"));
    }

    #[test]
    fn test_instantiate_and_properties() {
        let mut reg = EntityRegistry::new();
        let id = reg.create();
        let car = reg.get_mut(id).unwrap();
        car.set_property("color", Object::string("red"));
        car.instantiate_as(Object::string("Nissan Sentra 2015"));

        let car = reg.get(id).unwrap();
        assert_eq!(car.state, EntityState::Embodied);
        assert_eq!(car.property("color"), &Object::string("red"));
        assert!(car.property("brand").is_null());
    }
}
