//! Player module: the movable capsule that carries the proximity sensor.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
