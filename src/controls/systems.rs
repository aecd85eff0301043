//! Keyboard reading for the interact action.
use bevy::prelude::*;

use crate::interaction::config::InteractionConfig;

use super::{
    components::{ActiveInputMode, InputMode},
    events::InteractPressedEvent,
};

/// Emits `InteractPressedEvent` on the interact key, but only while the
/// gameplay bindings are active. UI and dialogue modes swallow the key.
pub fn read_interact_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<InteractionConfig>,
    mode: Res<ActiveInputMode>,
    mut presses: MessageWriter<InteractPressedEvent>,
) {
    if mode.mode() != InputMode::Gameplay {
        return;
    }
    if keyboard.just_pressed(config.interact_key) {
        presses.write(InteractPressedEvent);
    }
}
