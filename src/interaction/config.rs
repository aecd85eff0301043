use std::{env, fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::components::{InteractionKind, InteractionRuleset};

const CONFIG_PATH: &str = "config/interaction.toml";
const CONFIG_PATH_ENV: &str = "CAMPFIRE_CONFIG";

const DEFAULT_INTERACT_KEY: KeyCode = KeyCode::KeyE;
const DEFAULT_DISMISS_KEY: KeyCode = KeyCode::Escape;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawInteractionConfig {
    #[serde(default)]
    sensor: RawSensor,
    #[serde(default)]
    keys: RawKeys,
    #[serde(default)]
    tags: RawTags,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSensor {
    radius: f32,
}

impl Default for RawSensor {
    fn default() -> Self {
        Self { radius: 2.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawKeys {
    interact: String,
    dismiss: String,
}

impl Default for RawKeys {
    fn default() -> Self {
        Self {
            interact: "e".to_string(),
            dismiss: "escape".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTags {
    pick_up: Vec<String>,
    cook: Vec<String>,
    talk: Vec<String>,
}

impl Default for RawTags {
    fn default() -> Self {
        Self {
            pick_up: vec!["pickable".to_string()],
            cook: vec!["cooking_pot".to_string()],
            talk: vec!["npc".to_string()],
        }
    }
}

/// Interaction settings sourced from `config/interaction.toml`.
#[derive(Resource, Debug, Clone)]
pub struct InteractionConfig {
    pub sensor_radius: f32,
    pub interact_key: KeyCode,
    pub dismiss_key: KeyCode,
    pub ruleset: InteractionRuleset,
}

impl InteractionConfig {
    /// Loads the config file, falling back to defaults on any read or parse
    /// failure. `CAMPFIRE_CONFIG` overrides the file path.
    pub fn load_or_default() -> Self {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        let path = Path::new(&path);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawInteractionConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        path.display(),
                        err
                    );
                    RawInteractionConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                RawInteractionConfig::default().into()
            }
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        RawInteractionConfig::default().into()
    }
}

impl From<RawInteractionConfig> for InteractionConfig {
    fn from(value: RawInteractionConfig) -> Self {
        let tagged = |tags: Vec<String>, kind: InteractionKind| {
            tags.into_iter().map(move |tag| (tag, kind))
        };
        let ruleset = InteractionRuleset::new(
            tagged(value.tags.pick_up, InteractionKind::PickUp)
                .chain(tagged(value.tags.cook, InteractionKind::Cook))
                .chain(tagged(value.tags.talk, InteractionKind::Talk)),
        );

        Self {
            sensor_radius: value.sensor.radius.max(0.1),
            interact_key: parse_key(&value.keys.interact, DEFAULT_INTERACT_KEY),
            dismiss_key: parse_key(&value.keys.dismiss, DEFAULT_DISMISS_KEY),
            ruleset,
        }
    }
}

/// Short display label for a key, for prompt text ("KeyE" becomes "E").
pub fn key_label(key: KeyCode) -> String {
    let name = format!("{:?}", key);
    name.strip_prefix("Key").unwrap_or(&name).to_string()
}

fn parse_key(name: &str, fallback: KeyCode) -> KeyCode {
    let key = match name.trim().to_lowercase().as_str() {
        "e" => Some(KeyCode::KeyE),
        "f" => Some(KeyCode::KeyF),
        "q" => Some(KeyCode::KeyQ),
        "r" => Some(KeyCode::KeyR),
        "t" => Some(KeyCode::KeyT),
        "x" => Some(KeyCode::KeyX),
        "z" => Some(KeyCode::KeyZ),
        "space" => Some(KeyCode::Space),
        "enter" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "escape" => Some(KeyCode::Escape),
        _ => None,
    };
    key.unwrap_or_else(|| {
        warn!("Unknown key binding '{}', using {:?}.", name, fallback);
        fallback
    })
}
