//! Messages emitted by the input reader.
use bevy::prelude::{Event, Message};

/// Fired when the interact key is pressed while the gameplay bindings are
/// active.
#[derive(Event, Message, Debug, Clone)]
pub struct InteractPressedEvent;
