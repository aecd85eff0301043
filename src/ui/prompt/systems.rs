// src/ui/prompt/systems.rs
//
// Systems showing and hiding the contextual interaction prompt.

use bevy::prelude::*;

use crate::interaction::config::{key_label, InteractionConfig};
use crate::interaction::events::PromptChangedEvent;

use super::components::{InteractionPrompt, PromptSettings, PromptTracker};

const BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.9);
const BORDER_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
const TEXT_COLOR: Color = Color::WHITE;

/// Shows or hides the prompt panel in response to `PromptChangedEvent`.
///
/// Later messages in the same frame win, matching the last-overlap-wins
/// policy of the detector.
pub fn update_prompt_panel(
    mut commands: Commands,
    mut tracker: ResMut<PromptTracker>,
    settings: Res<PromptSettings>,
    config: Res<InteractionConfig>,
    mut prompts: MessageReader<PromptChangedEvent>,
) {
    for prompt in prompts.read() {
        if let Some(panel) = tracker.active_panel.take() {
            if let Ok(mut panel_commands) = commands.get_entity(panel) {
                panel_commands.despawn();
            }
        }

        if !prompt.visible {
            continue;
        }
        let Some(verb) = prompt.kind.verb() else {
            continue;
        };

        let label = format!("[{}]  {}", key_label(config.interact_key), verb);
        let panel = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(settings.bottom_offset),
                    align_self: AlignSelf::Center,
                    justify_self: JustifySelf::Center,
                    padding: UiRect::all(Val::Px(settings.padding)),
                    border: UiRect::all(Val::Px(settings.border_width)),
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                BorderColor::from(BORDER_COLOR),
                InteractionPrompt,
                Name::new("Interaction Prompt"),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(label),
                    TextFont {
                        font_size: settings.font_size,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            })
            .id();

        tracker.active_panel = Some(panel);
    }
}
