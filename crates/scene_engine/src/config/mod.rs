//! Configuration system

pub use serde::{Deserialize, Serialize};

use crate::document::defaults;
use crate::lighting::{FurnitureLightingPreset, RoomLightingPreset};
use crate::scene::SceneStore;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Startup settings for the composition studio
///
/// Preset fields hold persisted keys (the same strings documents use), so
/// a config file can name any preset without the closed enums leaking into
/// the file format. Unknown keys take the documented fallbacks when
/// applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Environment preset name applied at startup
    pub environment: String,
    /// Room lighting preset key applied at startup
    pub room_lighting_preset: String,
    /// Furniture lighting preset key applied at startup
    pub furniture_lighting_preset: String,
    /// Initial room rig intensity multiplier
    pub room_light_intensity: f32,
    /// Initial furniture rig intensity multiplier
    pub furniture_light_intensity: f32,
    /// Initial room material brightness factor
    pub room_material_brightness: f32,
    /// Where to write the autosave document, if anywhere
    pub autosave_path: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            environment: defaults::environment(),
            room_lighting_preset: defaults::room_preset(),
            furniture_lighting_preset: defaults::furniture_preset(),
            room_light_intensity: defaults::intensity(),
            furniture_light_intensity: defaults::intensity(),
            room_material_brightness: defaults::brightness(),
            autosave_path: None,
        }
    }
}

impl Config for StudioConfig {}

impl StudioConfig {
    /// Push the configured startup knobs into a store
    pub fn apply_to(&self, store: &mut SceneStore) {
        store.set_environment(self.environment.clone());
        store.set_room_preset(RoomLightingPreset::from_key(&self.room_lighting_preset));
        store.set_furniture_preset(FurnitureLightingPreset::from_key(
            &self.furniture_lighting_preset,
        ));
        store.set_room_intensity(self.room_light_intensity);
        store.set_furniture_intensity(self.furniture_light_intensity);
        store.set_room_brightness(self.room_material_brightness);
    }
}
