//! # Scene Engine
//!
//! Core of an interactive 3D scene composition tool: users import mesh
//! assets into a reusable library, place and transform instances of them,
//! tune scene-wide lighting, and persist the composition as a JSON
//! document.
//!
//! ## Features
//!
//! - **Scene State Store**: single owner of the asset library, placed
//!   items, selection, transform mode, and lighting knobs
//! - **Procedural Lighting Rigs**: pure, table-driven preset resolvers
//!   that derive a full multi-light rig from the room bounds
//! - **Bounds Calculator**: union bounding volume over a room asset's
//!   constituent meshes
//! - **Brightness Adjuster**: baseline-anchored, drift-free room material
//!   rescaling
//! - **Document Codec**: full save and lightweight info export, with
//!   all-or-nothing parsing
//!
//! The rendering pipeline, file pickers, and UI layout are external
//! collaborators: they consume the rigs, bounds, and item transforms this
//! crate derives, and feed back asset-load completions and gizmo commits.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut store = SceneStore::new();
//!     store.add_asset("sofa", "assets/sofa.glb")?;
//!     let id = store.add_item("sofa")?;
//!     store.select(Some(id))?;
//!     store.set_room_preset(RoomLightingPreset::WarmEvening);
//!
//!     // No room loaded yet, so there is no room rig to instantiate
//!     assert!(store.room_rig().is_none());
//!     let _document = store.to_document();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod document;
pub mod foundation;
pub mod lighting;
pub mod material;
pub mod scene;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{Config, ConfigError, StudioConfig};
    pub use crate::document::{DocumentError, SceneDocument, SceneInfo};
    pub use crate::foundation::math::{Point3, Vec3};
    pub use crate::lighting::{
        resolve_furniture, resolve_room, FurnitureLightingPreset, FurnitureRig,
        RoomLightingPreset, RoomRig,
    };
    pub use crate::material::{BrightnessAdjuster, Material};
    pub use crate::scene::{
        CommandOutcome, ItemId, LibraryAsset, SceneCommand, SceneItem, SceneStore, StoreError,
        TransformMode, TransformPatch,
    };
    pub use crate::spatial::{Aabb, RoomBounds};
}
