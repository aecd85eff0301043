use std::path::Path;

use bevy::prelude::*;

mod controls;
mod interaction;
mod player;
mod proximity;
mod ui;
mod world;

use crate::{
    controls::ControlsPlugin, interaction::InteractionPlugin, player::PlayerPlugin,
    proximity::ProximityPlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    load_env_overrides();

    App::new()
        .add_plugins((
            DefaultPlugins,
            InteractionPlugin, // Before the others so InteractionConfig exists at startup
            ProximityPlugin,
            ControlsPlugin,
            PlayerPlugin,
            WorldPlugin,
            UiPlugin,
        ))
        .run();
}

fn load_env_overrides() {
    const ENV_FILE: &str = "campfire.env";

    let path = Path::new(ENV_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", ENV_FILE, err);
    }
}
