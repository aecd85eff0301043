//! Notifications broadcast by the interaction detector, plus the external
//! ended signal it listens for.
use bevy::prelude::{Entity, Event, Message};

use super::components::InteractionKind;

/// Fired when the player picks up an interactable item.
#[derive(Event, Message, Debug, Clone)]
pub struct ItemPickedUpEvent {
    pub item: Entity,
}

/// Fired when the player activates a cooking pot.
#[derive(Event, Message, Debug, Clone)]
pub struct CookingStartedEvent;

/// Fired when the player starts talking to an NPC.
#[derive(Event, Message, Debug, Clone)]
pub struct TalkStartedEvent {
    pub actor: Entity,
}

/// Fired whenever the contextual prompt should change visibility.
#[derive(Event, Message, Debug, Clone)]
pub struct PromptChangedEvent {
    pub visible: bool,
    pub kind: InteractionKind,
}

/// Fired by whichever system owns the post-activation flow (the activity
/// panel) once the cooking or talking session is over.
#[derive(Event, Message, Debug, Clone)]
pub struct InteractionEndedEvent;
