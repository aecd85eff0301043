//! Input-mode resource shared by gameplay and UI systems.
use std::fmt;

use bevy::prelude::*;

/// Named set of active input bindings. Gameplay movement and the interact
/// key only respond in `Gameplay`; the activity panel owns the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Gameplay,
    UiInteraction,
    Dialogue,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gameplay => "gameplay",
            Self::UiInteraction => "ui interaction",
            Self::Dialogue => "dialogue",
        };
        write!(f, "{}", name)
    }
}

/// Resource holding the currently active input mode.
#[derive(Resource, Debug, Default)]
pub struct ActiveInputMode {
    mode: InputMode,
}

impl ActiveInputMode {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!("Input mode switched: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }
}
