// src/ui/activity_panel/systems.rs
//
// Systems opening and closing the cook/talk follow-up panel. Closing the
// panel is what fires the interaction-ended signal the detector listens to.

use bevy::prelude::*;

use crate::interaction::components::InteractionKind;
use crate::interaction::config::{key_label, InteractionConfig};
use crate::interaction::events::{CookingStartedEvent, InteractionEndedEvent, TalkStartedEvent};

use super::components::{ActivityPanel, ActivityPanelSettings, ActivityPanelTracker};

const BACKGROUND_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.95);
const BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);
const TITLE_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const HINT_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);

/// Opens the modal panel when a cooking or talking session starts.
pub fn open_activity_panel(
    mut commands: Commands,
    mut tracker: ResMut<ActivityPanelTracker>,
    settings: Res<ActivityPanelSettings>,
    config: Res<InteractionConfig>,
    mut cooking: MessageReader<CookingStartedEvent>,
    mut talks: MessageReader<TalkStartedEvent>,
    names: Query<&Name>,
) {
    let mut sessions: Vec<(InteractionKind, String)> = Vec::new();
    for _ in cooking.read() {
        sessions.push((InteractionKind::Cook, "Cooking".to_string()));
    }
    for talk in talks.read() {
        let title = match names.get(talk.actor) {
            Ok(name) => format!("Talking with {}", name),
            Err(_) => "Talking".to_string(),
        };
        sessions.push((InteractionKind::Talk, title));
    }

    for (kind, title) in sessions {
        if let Some(panel) = tracker.active_panel.take() {
            if let Ok(mut panel_commands) = commands.get_entity(panel) {
                panel_commands.despawn();
            }
        }

        info!("Opening activity panel: {}", title);
        let hint = format!("Press {} to finish", key_label(config.dismiss_key));
        let panel = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    align_self: AlignSelf::Center,
                    justify_self: JustifySelf::Center,
                    width: Val::Px(settings.panel_width),
                    padding: UiRect::all(Val::Px(settings.padding)),
                    border: UiRect::all(Val::Px(settings.border_width)),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(10.0),
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                BorderColor::from(BORDER_COLOR),
                ActivityPanel { kind },
                Name::new("Activity Panel"),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(title),
                    TextFont {
                        font_size: settings.title_font_size,
                        ..default()
                    },
                    TextColor(TITLE_COLOR),
                ));
                parent.spawn((
                    Text::new(hint.clone()),
                    TextFont {
                        font_size: settings.hint_font_size,
                        ..default()
                    },
                    TextColor(HINT_COLOR),
                ));
            })
            .id();

        tracker.active_panel = Some(panel);
    }
}

/// Closes the panel on the dismiss key and emits the interaction-ended
/// signal. Without an open panel the key does nothing.
pub fn close_activity_panel(
    mut commands: Commands,
    mut tracker: ResMut<ActivityPanelTracker>,
    config: Res<InteractionConfig>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut ended: MessageWriter<InteractionEndedEvent>,
) {
    if !keyboard.just_pressed(config.dismiss_key) {
        return;
    }
    let Some(panel) = tracker.active_panel.take() else {
        return;
    };

    if let Ok(mut panel_commands) = commands.get_entity(panel) {
        panel_commands.despawn();
    }
    info!("Activity panel dismissed");
    ended.write(InteractionEndedEvent);
}
