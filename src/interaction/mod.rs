//! Interaction module: tracks the interactable object the player is near,
//! classifies it, and dispatches pick-up / cook / talk on the interact key.
pub mod components;
pub mod config;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::InteractionPlugin;
