//! Interaction plugin wiring the detector resource and transition systems.
use bevy::prelude::*;

use crate::controls::systems::read_interact_input;
use crate::proximity::systems::detect_proximity;

use super::{
    components::InteractionDetector,
    config::InteractionConfig,
    events::{
        CookingStartedEvent, InteractionEndedEvent, ItemPickedUpEvent, PromptChangedEvent,
        TalkStartedEvent,
    },
    systems::{apply_proximity_transitions, handle_interact_pressed, handle_interaction_ended},
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let config = InteractionConfig::load_or_default();
        app.insert_resource(config.ruleset.clone())
            .insert_resource(config)
            .init_resource::<InteractionDetector>()
            .add_message::<ItemPickedUpEvent>()
            .add_message::<CookingStartedEvent>()
            .add_message::<TalkStartedEvent>()
            .add_message::<PromptChangedEvent>()
            .add_message::<InteractionEndedEvent>()
            .add_systems(Startup, log_interaction_bindings)
            .add_systems(
                Update,
                (
                    apply_proximity_transitions.after(detect_proximity),
                    handle_interact_pressed.after(read_interact_input),
                    handle_interaction_ended,
                )
                    .chain(),
            );
    }
}

fn log_interaction_bindings(config: Res<InteractionConfig>) {
    info!(
        "InteractionPlugin initialised (interact: {:?}, sensor radius: {:.1})",
        config.interact_key, config.sensor_radius
    );
}
