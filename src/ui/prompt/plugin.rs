// src/ui/prompt/plugin.rs
//
// PromptPlugin coordinates the contextual prompt systems and resources.

use bevy::prelude::*;

use super::components::{PromptSettings, PromptTracker};
use super::systems::update_prompt_panel;

pub struct PromptPlugin;

impl Plugin for PromptPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PromptSettings::default())
            .insert_resource(PromptTracker::default())
            .add_systems(Update, update_prompt_panel);
    }
}
