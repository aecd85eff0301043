//! Systems spawning and moving the player.
use bevy::prelude::*;

use crate::controls::components::{ActiveInputMode, InputMode};
use crate::interaction::config::InteractionConfig;
use crate::proximity::components::ProximitySensor;

use super::components::Player;

const PLAYER_START_POS: Vec3 = Vec3::new(0.0, 1.0, 6.0);
const PLAYER_COLOR: Color = Color::srgb_u8(210, 170, 110);

/// Spawns the player capsule carrying the proximity sensor.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<InteractionConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.2))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PLAYER_COLOR,
            ..default()
        })),
        Transform::from_translation(PLAYER_START_POS),
        Player::default(),
        ProximitySensor::new(config.sensor_radius),
        Name::new("Player"),
    ));
}

/// Moves the player in the ground plane with WASD while the gameplay
/// bindings are active.
pub fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mode: Res<ActiveInputMode>,
    time: Res<Time>,
    mut query: Query<(&Player, &mut Transform)>,
) {
    if mode.mode() != InputMode::Gameplay {
        return;
    }

    let Ok((player, mut transform)) = query.single_mut() else {
        return;
    };

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction += Vec3::NEG_Z;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction += Vec3::Z;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction += Vec3::NEG_X;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction += Vec3::X;
    }

    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return;
    }

    transform.translation += direction * player.move_speed * time.delta_secs();
}
