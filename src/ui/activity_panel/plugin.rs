// src/ui/activity_panel/plugin.rs
//
// ActivityPanelPlugin coordinates the cook/talk follow-up panel.

use bevy::prelude::*;

use super::components::{ActivityPanelSettings, ActivityPanelTracker};
use super::systems::{close_activity_panel, open_activity_panel};

pub struct ActivityPanelPlugin;

impl Plugin for ActivityPanelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ActivityPanelSettings::default())
            .insert_resource(ActivityPanelTracker::default())
            .add_systems(
                Update,
                (open_activity_panel, close_activity_panel.after(open_activity_panel)),
            );
    }
}
