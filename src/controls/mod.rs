//! Controls module: input-mode switching and the interact key reader.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::ControlsPlugin;
