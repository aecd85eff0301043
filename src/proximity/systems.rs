//! Overlap detection for the proximity sensor.
use bevy::prelude::*;

use super::{
    components::{Interactable, ProximitySensor, SensorOverlaps},
    events::{ProximityEnteredEvent, ProximityExitedEvent},
};

/// Diffs the set of interactables within the sensor radius against last
/// frame's set and reports the difference as enter/exit messages.
///
/// Exits are written before enters so that a same-frame handover between two
/// volumes leaves the newly entered object tracked. Despawned interactables
/// simply drop out of the current set and exit on the next frame.
pub fn detect_proximity(
    sensors: Query<(&Transform, &ProximitySensor)>,
    interactables: Query<(Entity, &Transform, &Interactable)>,
    mut overlaps: ResMut<SensorOverlaps>,
    mut entered: MessageWriter<ProximityEnteredEvent>,
    mut exited: MessageWriter<ProximityExitedEvent>,
) {
    let Ok((sensor_transform, sensor)) = sensors.single() else {
        for entity in overlaps.iter() {
            exited.write(ProximityExitedEvent { entity });
        }
        overlaps.clear();
        return;
    };
    let origin = sensor_transform.translation;

    let mut current = Vec::new();
    for (entity, transform, interactable) in interactables.iter() {
        if origin.distance(transform.translation) <= sensor.radius {
            current.push((entity, interactable.tag().to_string()));
        }
    }
    let current_entities: Vec<Entity> = current.iter().map(|(entity, _)| *entity).collect();

    for entity in overlaps.iter() {
        if !current_entities.contains(&entity) {
            debug!("Interactable {:?} left the trigger volume", entity);
            exited.write(ProximityExitedEvent { entity });
        }
    }

    for (entity, tag) in current {
        if !overlaps.contains(entity) {
            debug!("Interactable {:?} ('{}') entered the trigger volume", entity, tag);
            entered.write(ProximityEnteredEvent { entity, tag });
        }
    }

    overlaps.replace(&current_entities);
}
