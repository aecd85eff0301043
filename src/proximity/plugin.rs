//! Proximity plugin wiring the trigger-volume detection system.
use bevy::prelude::*;

use super::{
    components::SensorOverlaps,
    events::{ProximityEnteredEvent, ProximityExitedEvent},
    systems::detect_proximity,
};

pub struct ProximityPlugin;

impl Plugin for ProximityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SensorOverlaps>()
            .add_message::<ProximityEnteredEvent>()
            .add_message::<ProximityExitedEvent>()
            .add_systems(Update, detect_proximity);
    }
}
