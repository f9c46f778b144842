//! Command dispatch for the scene store
//!
//! Embedders that gather input events (UI clicks, gizmo commits, file
//! loads) can funnel every mutation through [`SceneStore::apply`] as a
//! [`SceneCommand`] queue drained on the single control thread. This keeps
//! the ordering guarantee intact in hosts that would otherwise be tempted
//! to mutate from several callbacks.

use log::debug;

use crate::document::SceneDocument;
use crate::lighting::{FurnitureLightingPreset, RoomLightingPreset};
use crate::scene::item::{ItemId, TransformMode, TransformPatch};
use crate::scene::store::{SceneStore, StoreError};

/// One store mutation, ready to queue
#[derive(Debug, Clone)]
pub enum SceneCommand {
    /// Add an imported asset to the library
    AddAsset {
        /// Unique asset name
        name: String,
        /// Payload reference
        url: String,
    },
    /// Remove a library asset (cascades to its items)
    RemoveAsset {
        /// Asset name
        name: String,
    },
    /// Place a new instance of a library asset
    AddItem {
        /// Backing asset name
        asset_name: String,
    },
    /// Merge a partial transform into an item
    UpdateItem {
        /// Target item
        id: ItemId,
        /// Fields to overwrite
        patch: TransformPatch,
    },
    /// Delete a placed item
    DeleteItem {
        /// Target item
        id: ItemId,
    },
    /// Select an item, or `None` to deselect
    Select(Option<ItemId>),
    /// Set the global gizmo mode
    SetTransformMode(TransformMode),
    /// Set the environment preset name
    SetEnvironment(String),
    /// Set the room lighting preset
    SetRoomPreset(RoomLightingPreset),
    /// Set the furniture lighting preset
    SetFurniturePreset(FurnitureLightingPreset),
    /// Set the room rig intensity multiplier
    SetRoomIntensity(f32),
    /// Set the furniture rig intensity multiplier
    SetFurnitureIntensity(f32),
    /// Set the room material brightness factor
    SetRoomBrightness(f32),
    /// Remove the room asset
    ClearRoom,
    /// Replace persisted state from a parsed document
    LoadDocument(SceneDocument),
}

/// What a successfully applied command produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The mutation completed with nothing to report
    Done,
    /// An item was placed and received this id
    ItemAdded(ItemId),
}

impl SceneStore {
    /// Apply one queued command
    ///
    /// Equivalent to calling the corresponding method directly; commands
    /// exist so all mutation can drain through one dispatch point.
    pub fn apply(&mut self, command: SceneCommand) -> Result<CommandOutcome, StoreError> {
        debug!("Applying command: {}", command_name(&command));
        match command {
            SceneCommand::AddAsset { name, url } => {
                self.add_asset(name, url)?;
            }
            SceneCommand::RemoveAsset { name } => {
                self.remove_asset(&name)?;
            }
            SceneCommand::AddItem { asset_name } => {
                let id = self.add_item(&asset_name)?;
                return Ok(CommandOutcome::ItemAdded(id));
            }
            SceneCommand::UpdateItem { id, patch } => {
                self.update_item(id, patch)?;
            }
            SceneCommand::DeleteItem { id } => {
                self.delete_item(id)?;
            }
            SceneCommand::Select(id) => {
                self.select(id)?;
            }
            SceneCommand::SetTransformMode(mode) => self.set_transform_mode(mode),
            SceneCommand::SetEnvironment(environment) => self.set_environment(environment),
            SceneCommand::SetRoomPreset(preset) => self.set_room_preset(preset),
            SceneCommand::SetFurniturePreset(preset) => self.set_furniture_preset(preset),
            SceneCommand::SetRoomIntensity(intensity) => self.set_room_intensity(intensity),
            SceneCommand::SetFurnitureIntensity(intensity) => {
                self.set_furniture_intensity(intensity);
            }
            SceneCommand::SetRoomBrightness(brightness) => self.set_room_brightness(brightness),
            SceneCommand::ClearRoom => self.clear_room(),
            SceneCommand::LoadDocument(document) => self.load_document(document),
        }
        Ok(CommandOutcome::Done)
    }
}

fn command_name(command: &SceneCommand) -> &'static str {
    match command {
        SceneCommand::AddAsset { .. } => "AddAsset",
        SceneCommand::RemoveAsset { .. } => "RemoveAsset",
        SceneCommand::AddItem { .. } => "AddItem",
        SceneCommand::UpdateItem { .. } => "UpdateItem",
        SceneCommand::DeleteItem { .. } => "DeleteItem",
        SceneCommand::Select(_) => "Select",
        SceneCommand::SetTransformMode(_) => "SetTransformMode",
        SceneCommand::SetEnvironment(_) => "SetEnvironment",
        SceneCommand::SetRoomPreset(_) => "SetRoomPreset",
        SceneCommand::SetFurniturePreset(_) => "SetFurniturePreset",
        SceneCommand::SetRoomIntensity(_) => "SetRoomIntensity",
        SceneCommand::SetFurnitureIntensity(_) => "SetFurnitureIntensity",
        SceneCommand::SetRoomBrightness(_) => "SetRoomBrightness",
        SceneCommand::ClearRoom => "ClearRoom",
        SceneCommand::LoadDocument(_) => "LoadDocument",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_commands_drain_in_issue_order() {
        let mut store = SceneStore::new();
        let queue = vec![
            SceneCommand::AddAsset {
                name: "chair".to_string(),
                url: "assets/chair.glb".to_string(),
            },
            SceneCommand::AddItem {
                asset_name: "chair".to_string(),
            },
            SceneCommand::SetTransformMode(TransformMode::Rotate),
        ];

        let mut placed = None;
        for command in queue {
            match store.apply(command).unwrap() {
                CommandOutcome::ItemAdded(id) => placed = Some(id),
                CommandOutcome::Done => {}
            }
        }

        let id = placed.unwrap();
        assert!(store.item(id).is_some());
        assert_eq!(store.transform_mode(), TransformMode::Rotate);
    }

    #[test]
    fn test_failed_command_surfaces_store_error() {
        let mut store = SceneStore::new();
        let result = store.apply(SceneCommand::UpdateItem {
            id: crate::scene::ItemId::from_raw(99),
            patch: TransformPatch::position(Vec3::zeros()),
        });
        assert!(matches!(result, Err(StoreError::UnknownItem(_))));
    }

    #[test]
    fn test_select_and_deselect_via_commands() {
        let mut store = SceneStore::new();
        store
            .apply(SceneCommand::AddAsset {
                name: "rug".to_string(),
                url: "assets/rug.glb".to_string(),
            })
            .unwrap();
        let outcome = store
            .apply(SceneCommand::AddItem {
                asset_name: "rug".to_string(),
            })
            .unwrap();
        let CommandOutcome::ItemAdded(id) = outcome else {
            panic!("expected an item id");
        };

        store.apply(SceneCommand::Select(Some(id))).unwrap();
        assert_eq!(store.selection(), Some(id));

        store.apply(SceneCommand::Select(None)).unwrap();
        assert_eq!(store.selection(), None);
    }
}
