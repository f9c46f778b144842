//! Persisted scene documents
//!
//! Two JSON projections of store state: the full save ([`SceneDocument`],
//! library payloads included) and the lightweight info export
//! ([`SceneInfo`], transform data only). Parsing is all-or-nothing:
//! malformed input fails here, before any store state is touched.
//!
//! Every field is optional on the wire; missing fields take the documented
//! defaults so an empty object is a valid (default) scene.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::Vec3;
use crate::scene::ItemId;

/// Document codec errors
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input failed to parse as a scene document
    #[error("failed to parse scene document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing the document file failed
    #[error("document I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Library entry in a full save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    /// Unique asset name
    pub name: String,
    /// External reference or embedded binary-as-text payload
    pub url: String,
}

/// Placed item in a full save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntry {
    /// Opaque item identifier
    pub id: ItemId,
    /// Display name (also the backing asset's library key)
    pub name: String,
    /// Payload reference, so items remain loadable standalone
    pub url: String,
    /// World-space position
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

/// Placed item in an info export - no payload reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoItemEntry {
    /// Opaque item identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// World-space position
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

/// Full save: complete store state with embedded asset payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Asset library with payload references
    #[serde(default)]
    pub library: Vec<AssetEntry>,
    /// Placed items
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    /// Environment preset name
    #[serde(default = "defaults::environment")]
    pub environment: String,
    /// Room lighting preset key
    #[serde(default = "defaults::room_preset")]
    pub room_lighting_preset: String,
    /// Furniture lighting preset key
    #[serde(default = "defaults::furniture_preset")]
    pub furniture_lighting_preset: String,
    /// Runtime multiplier for the room rig
    #[serde(default = "defaults::intensity")]
    pub room_light_intensity: f32,
    /// Runtime multiplier for the furniture rig
    #[serde(default = "defaults::intensity")]
    pub furniture_light_intensity: f32,
    /// Room material brightness factor
    #[serde(default = "defaults::brightness")]
    pub room_material_brightness: f32,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self {
            library: Vec::new(),
            items: Vec::new(),
            environment: defaults::environment(),
            room_lighting_preset: defaults::room_preset(),
            furniture_lighting_preset: defaults::furniture_preset(),
            room_light_intensity: defaults::intensity(),
            furniture_light_intensity: defaults::intensity(),
            room_material_brightness: defaults::brightness(),
        }
    }
}

/// Info export: transform data only, no asset payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneInfo {
    /// Environment preset name
    #[serde(default = "defaults::environment")]
    pub environment: String,
    /// Placed items, payload-free
    #[serde(default)]
    pub items: Vec<InfoItemEntry>,
    /// Room lighting preset key
    #[serde(default = "defaults::room_preset")]
    pub room_lighting_preset: String,
    /// Furniture lighting preset key
    #[serde(default = "defaults::furniture_preset")]
    pub furniture_lighting_preset: String,
    /// Runtime multiplier for the room rig
    #[serde(default = "defaults::intensity")]
    pub room_light_intensity: f32,
    /// Runtime multiplier for the furniture rig
    #[serde(default = "defaults::intensity")]
    pub furniture_light_intensity: f32,
    /// Room material brightness factor
    #[serde(default = "defaults::brightness")]
    pub room_material_brightness: f32,
}

/// Documented fallback values for absent document fields
pub(crate) mod defaults {
    pub(crate) fn environment() -> String {
        "studio".to_string()
    }

    pub(crate) fn room_preset() -> String {
        "warm-evening".to_string()
    }

    pub(crate) fn furniture_preset() -> String {
        "default".to_string()
    }

    pub(crate) fn intensity() -> f32 {
        1.0
    }

    pub(crate) fn brightness() -> f32 {
        1.0
    }
}

impl SceneDocument {
    /// Parse a document from JSON
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to human-readable JSON
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a document file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize and write a document file
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

impl SceneInfo {
    /// Parse an info export from JSON
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to human-readable JSON
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize and write an info export file
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}
