//! World module: scene setup and the interactable props.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
