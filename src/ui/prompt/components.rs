// src/ui/prompt/components.rs
//
// Components and resources for the contextual interaction prompt.

use bevy::prelude::*;

/// Component attached to the prompt panel entity.
#[derive(Component, Debug)]
pub struct InteractionPrompt;

/// Resource tracking the currently displayed prompt panel.
///
/// Ensures only one prompt is displayed at a time.
#[derive(Resource, Debug, Default)]
pub struct PromptTracker {
    pub active_panel: Option<Entity>,
}

/// Resource containing settings for prompt layout.
#[derive(Resource, Debug)]
pub struct PromptSettings {
    /// Offset from the bottom edge of the screen (pixels).
    pub bottom_offset: f32,

    /// Padding inside the panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Font size for the prompt text (points).
    pub font_size: f32,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            bottom_offset: 60.0,
            padding: 10.0,
            border_width: 2.0,
            font_size: 18.0,
        }
    }
}
