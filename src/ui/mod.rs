// src/ui/mod.rs
//
// UI module providing screen-space UI elements.
//
// Current features:
// - Contextual interaction prompt (bottom-center "[E] Cook" hint)
// - Activity panel (modal cook/talk follow-up, fires the ended signal)

pub mod activity_panel;
pub mod prompt;

use bevy::prelude::*;

use activity_panel::ActivityPanelPlugin;
use prompt::PromptPlugin;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((PromptPlugin, ActivityPanelPlugin));
    }
}
