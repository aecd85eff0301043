//! Components for the player entity.
use bevy::prelude::*;

/// Marker component identifying the player capsule, storing movement speed.
#[derive(Component, Debug)]
pub struct Player {
    pub move_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self { move_speed: 6.0 }
    }
}
