//! World plugin spawning the static scene and the interactable props.
use bevy::prelude::*;

use super::systems::{spawn_interactables, spawn_world_environment};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_world_environment, spawn_interactables));
    }
}
