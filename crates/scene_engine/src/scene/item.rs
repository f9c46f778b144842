//! Placed scene items and their transforms

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::scene::library::LibraryAsset;

/// Opaque identifier of a placed scene item
///
/// Assigned monotonically by the store and never reused within a store's
/// lifetime; survives document round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw id (used by the store and the document codec)
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric id
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gizmo interaction mode, global across the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// Move the selected item
    #[default]
    Translate,
    /// Rotate the selected item
    Rotate,
    /// Scale the selected item
    Scale,
}

/// One placed, transformable instance of a library asset
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    /// Opaque unique identifier
    pub id: ItemId,
    /// Name of the backing library asset (cascade-delete key)
    pub asset_name: String,
    /// Payload reference copied from the backing asset at placement time
    pub url: String,
    /// Display name
    pub name: String,
    /// World-space position
    pub position: Vec3,
    /// Euler rotation in radians (XYZ)
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

impl SceneItem {
    /// Create an item freshly placed from a library asset
    ///
    /// New items drop in slightly above the floor with identity rotation
    /// and unit scale.
    pub(crate) fn placed(id: ItemId, asset: &LibraryAsset) -> Self {
        Self {
            id,
            asset_name: asset.name.clone(),
            url: asset.url.clone(),
            name: asset.name.clone(),
            position: Vec3::new(0.0, 1.0, 0.0),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Partial transform update from a gizmo-drag commit
///
/// Absent fields leave the item's current value in place; present fields
/// overwrite it (last write wins).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformPatch {
    /// New world-space position, if changed
    pub position: Option<Vec3>,
    /// New euler rotation in radians, if changed
    pub rotation: Option<Vec3>,
    /// New scale factors, if changed
    pub scale: Option<Vec3>,
}

impl TransformPatch {
    /// Patch that only moves the item
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Patch that only rotates the item
    pub fn rotation(rotation: Vec3) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    /// Patch that only rescales the item
    pub fn scale(scale: Vec3) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// Whether the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}
