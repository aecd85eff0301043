// src/ui/activity_panel/components.rs
//
// Components and resources for the cook/talk follow-up panel.

use bevy::prelude::*;

use crate::interaction::components::InteractionKind;

/// Component attached to the modal panel shown while cooking or talking.
#[derive(Component, Debug)]
pub struct ActivityPanel {
    pub kind: InteractionKind,
}

/// Resource tracking the currently open activity panel.
///
/// Only one activity runs at a time; opening a new one replaces the old.
#[derive(Resource, Debug, Default)]
pub struct ActivityPanelTracker {
    pub active_panel: Option<Entity>,
}

/// Resource containing settings for the activity panel layout.
#[derive(Resource, Debug)]
pub struct ActivityPanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Padding inside the panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Font size for the title (points).
    pub title_font_size: f32,

    /// Font size for the dismiss hint (points).
    pub hint_font_size: f32,
}

impl Default for ActivityPanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 420.0,
            padding: 16.0,
            border_width: 2.0,
            title_font_size: 22.0,
            hint_font_size: 14.0,
        }
    }
}
