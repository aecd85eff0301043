//! Player plugin wiring spawn and movement systems.
use bevy::prelude::*;

use super::systems::{move_player, spawn_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(Update, move_player);
    }
}
