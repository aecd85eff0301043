//! Proximity module: a spherical trigger volume that reports overlap entry
//! and exit for interactable objects.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::ProximityPlugin;
