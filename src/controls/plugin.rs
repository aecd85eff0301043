//! Controls plugin wiring the input-mode resource and the interact reader.
use bevy::prelude::*;

use super::{components::ActiveInputMode, events::InteractPressedEvent, systems::read_interact_input};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveInputMode>()
            .add_message::<InteractPressedEvent>()
            .add_systems(Update, read_interact_input);
    }
}
