//! Components and resources for the proximity trigger volume.
use bevy::prelude::*;

/// Spherical trigger volume carried by the player. Reports overlap entry and
/// exit for interactables, without any collision response.
#[derive(Component, Debug)]
pub struct ProximitySensor {
    pub radius: f32,
}

impl ProximitySensor {
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }
}

/// Marks an entity as interactable and carries its classification tag.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    tag: String,
}

impl Interactable {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().trim().to_lowercase(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Resource remembering which interactables were inside the sensor last
/// frame, in entry order, so the detection system can emit enter/exit diffs.
#[derive(Resource, Debug, Default)]
pub struct SensorOverlaps {
    inside: Vec<Entity>,
}

impl SensorOverlaps {
    pub fn contains(&self, entity: Entity) -> bool {
        self.inside.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.inside.iter().copied()
    }

    /// Replaces the tracked set, preserving entry order for retained
    /// entities and appending newcomers in the order given.
    pub fn replace(&mut self, current: &[Entity]) {
        self.inside.retain(|entity| current.contains(entity));
        for &entity in current {
            if !self.inside.contains(&entity) {
                self.inside.push(entity);
            }
        }
    }

    pub fn clear(&mut self) {
        self.inside.clear();
    }
}
