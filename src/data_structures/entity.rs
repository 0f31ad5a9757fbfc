//! Named entities and the fixed-capacity table that owns them.
//!
//! The table is a flat slot array: an entity lives at the slot given by its
//! own `index`, lookups by name walk every slot in order. There is no removal;
//! entities are registered once and then mutated in place.

use cgmath::{Vector3, Zero};
use thiserror::Error;

/// Number of slots in an [`EntityTable`].
pub const ENTITY_CAPACITY: usize = 512;

/// A named object with a transform, tracked in an [`EntityTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub name: String,
    /// Slot in the owning table, must be below [`ENTITY_CAPACITY`].
    pub index: u16,
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Entity {
    /// Create an entity at the origin with unit scale and no rotation.
    pub fn new(name: impl Into<String>, index: u16) -> Self {
        Self {
            name: name.into(),
            index,
            position: Vector3::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: 0.0,
        }
    }

    pub fn with_position(mut self, position: impl Into<Vector3<f32>>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_scale(mut self, scale: impl Into<Vector3<f32>>) -> Self {
        self.scale = scale.into();
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("entity index {index} is outside the table (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },
    #[error("entity {0:?} not found")]
    NotFound(String),
}

/// Fixed-capacity slot table of entities.
#[derive(Debug)]
pub struct EntityTable {
    slots: Vec<Option<Entity>>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self {
            slots: vec![None; ENTITY_CAPACITY],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Store `entity` at slot `entity.index`.
    ///
    /// Whatever occupied the slot before is replaced without error, the last
    /// registration wins.
    pub fn register(&mut self, entity: Entity) -> Result<(), EntityError> {
        let index = entity.index as usize;
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EntityError::IndexOutOfRange { index, capacity })?;
        if let Some(previous) = slot.as_ref() {
            log::debug!(
                "entity slot {} held {:?}, replacing it with {:?}",
                index,
                previous.name,
                entity.name
            );
        }
        *slot = Some(entity);
        Ok(())
    }

    /// Linear scan over all slots, returning the first entity named `name`.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.iter().find(|entity| entity.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.slots
            .iter_mut()
            .flatten()
            .find(|entity| entity.name == name)
    }

    /// Like [`find_mut`](Self::find_mut) but for entities the caller cannot
    /// run without.
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Entity, EntityError> {
        self.find_mut(name)
            .ok_or_else(|| EntityError::NotFound(name.to_string()))
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter().flatten()
    }
}

impl Default for EntityTable {
    fn default() -> Self {
        Self::new()
    }
}
