//! Systems for the world module.
use bevy::{math::primitives::Plane3d, prelude::*};

use crate::proximity::components::Interactable;

use super::components::{PrimarySun, SceneCamera};

const GROUND_SCALE: f32 = 60.0;
const CAMERA_POS: Vec3 = Vec3::new(0.0, 14.0, 18.0);

/// Spawns the static scene: ground plane, sun, and a fixed camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(90, 140, 90),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 20_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(16.0, 32.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
        PrimarySun,
    ));

    let mut camera_transform = Transform::from_translation(CAMERA_POS);
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);
    commands.spawn((Camera3d::default(), camera_transform, SceneCamera));
}

/// Spawns the three interactable props: a pickable mushroom, a cooking pot,
/// and an NPC, each tagged for classification.
pub fn spawn_interactables(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.3))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(200, 80, 60),
            ..default()
        })),
        Transform::from_xyz(-4.0, 0.3, 0.0),
        Interactable::new("pickable"),
        Name::new("Forest Mushroom"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(0.7, 0.8))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(60, 60, 70),
            metallic: 0.6,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.4, -4.0),
        Interactable::new("cooking_pot"),
        Name::new("Cooking Pot"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.2))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(90, 110, 180),
            ..default()
        })),
        Transform::from_xyz(4.0, 1.0, 0.0),
        Interactable::new("npc"),
        Name::new("Hana"),
    ));
}
