//! Enter/exit messages reported by the proximity sensor.
use bevy::prelude::{Entity, Event, Message};

/// Fired when an interactable starts overlapping the sensor volume.
#[derive(Event, Message, Debug, Clone)]
pub struct ProximityEnteredEvent {
    pub entity: Entity,
    pub tag: String,
}

/// Fired when a previously overlapping interactable leaves the sensor
/// volume, including by despawning.
#[derive(Event, Message, Debug, Clone)]
pub struct ProximityExitedEvent {
    pub entity: Entity,
}
