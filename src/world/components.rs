//! Components used by the world module.
use bevy::prelude::*;

/// Marker component identifying the main directional light (the "sun").
#[derive(Component, Default)]
pub struct PrimarySun;

/// Marker component for the fixed scene camera.
#[derive(Component, Default)]
pub struct SceneCamera;
