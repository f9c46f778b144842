//! Scene state store
//!
//! Central authority over the asset library, placed items, selection,
//! transform mode, and every lighting knob. All mutation goes through
//! `&mut self`, so operations apply in issue order and no reader ever
//! observes a half-applied change. Derived values (room bounds aside, which
//! arrive from the loader via generation tickets) are recomputed from
//! current state on every read - deliberately uncached, so a lighting rig
//! can never be observed against bounds that have since been superseded.

use log::{debug, info, warn};
use thiserror::Error;

use crate::document::{defaults, AssetEntry, InfoItemEntry, ItemEntry, SceneDocument, SceneInfo};
use crate::lighting::{
    resolve_furniture, resolve_room, FurnitureLightingPreset, FurnitureRig, RoomLightingPreset,
    RoomRig,
};
use crate::scene::item::{ItemId, SceneItem, TransformMode, TransformPatch};
use crate::scene::library::LibraryAsset;
use crate::spatial::RoomBounds;

/// Scene store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An asset with this name is already in the library
    #[error("asset name already in library: {0}")]
    DuplicateAsset(String),

    /// No library asset has this name
    #[error("no such asset in library: {0}")]
    UnknownAsset(String),

    /// No scene item has this id
    #[error("no such scene item: {0}")]
    UnknownItem(ItemId),
}

/// Ticket identifying one in-flight room geometry load
///
/// Issued by [`SceneStore::begin_room_load`]; a ticket from a superseded or
/// cancelled load no longer applies, so stale results are discarded instead
/// of resurrecting removed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomLoadTicket {
    generation: u64,
}

/// Ticket identifying one in-flight library asset load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadTicket {
    name: String,
    generation: u64,
}

/// Central mutable scene state
#[derive(Debug)]
pub struct SceneStore {
    library: Vec<LibraryAsset>,
    items: Vec<SceneItem>,
    next_item_id: u64,
    next_asset_generation: u64,
    selection: Option<ItemId>,
    transform_mode: TransformMode,
    environment: String,
    room_preset: RoomLightingPreset,
    furniture_preset: FurnitureLightingPreset,
    room_intensity: f32,
    furniture_intensity: f32,
    room_brightness: f32,
    room_bounds: Option<RoomBounds>,
    room_generation: u64,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self {
            library: Vec::new(),
            items: Vec::new(),
            next_item_id: 1,
            next_asset_generation: 1,
            selection: None,
            transform_mode: TransformMode::default(),
            environment: defaults::environment(),
            room_preset: RoomLightingPreset::default(),
            furniture_preset: FurnitureLightingPreset::default(),
            room_intensity: defaults::intensity(),
            furniture_intensity: defaults::intensity(),
            room_brightness: defaults::brightness(),
            room_bounds: None,
            room_generation: 0,
        }
    }
}

impl SceneStore {
    /// Create an empty store with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Asset library
    // ------------------------------------------------------------------

    /// All library assets in insertion order
    pub fn assets(&self) -> &[LibraryAsset] {
        &self.library
    }

    /// Whether an asset with this exact name is in the library
    ///
    /// Names compare case-sensitively. The UI boundary is expected to
    /// pre-check with this before importing, so it can surface the
    /// duplicate warning to the user.
    pub fn has_asset(&self, name: &str) -> bool {
        self.library.iter().any(|asset| asset.name == name)
    }

    /// Look up a library asset by name
    pub fn asset(&self, name: &str) -> Option<&LibraryAsset> {
        self.library.iter().find(|asset| asset.name == name)
    }

    /// Add an imported asset to the library
    ///
    /// Name collisions are rejected; they should have been caught at the
    /// import boundary.
    pub fn add_asset(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<(), StoreError> {
        let name = name.into();
        if self.has_asset(&name) {
            return Err(StoreError::DuplicateAsset(name));
        }
        let mut asset = LibraryAsset::new(name, url);
        asset.generation = self.bump_asset_generation();
        info!("Library asset added: {}", asset.name);
        self.library.push(asset);
        Ok(())
    }

    /// Remove a library asset
    ///
    /// Cascades: every scene item referencing the asset is deleted, and the
    /// selection is cleared if it pointed at one of them. Any in-flight
    /// load of this asset is implicitly cancelled (its ticket goes stale).
    pub fn remove_asset(&mut self, name: &str) -> Result<(), StoreError> {
        let index = self
            .library
            .iter()
            .position(|asset| asset.name == name)
            .ok_or_else(|| StoreError::UnknownAsset(name.to_string()))?;
        self.library.remove(index);

        let before = self.items.len();
        self.items.retain(|item| item.asset_name != name);
        let removed_items = before - self.items.len();

        if let Some(selected) = self.selection {
            if !self.items.iter().any(|item| item.id == selected) {
                self.selection = None;
            }
        }
        info!(
            "Library asset removed: {} ({} scene item(s) cascaded)",
            name, removed_items
        );
        Ok(())
    }

    /// Start tracking an asynchronous load of a library asset's geometry
    pub fn begin_asset_load(&self, name: &str) -> Result<AssetLoadTicket, StoreError> {
        let asset = self
            .asset(name)
            .ok_or_else(|| StoreError::UnknownAsset(name.to_string()))?;
        Ok(AssetLoadTicket {
            name: asset.name.clone(),
            generation: asset.generation,
        })
    }

    /// Whether an asset load's result is still wanted
    ///
    /// False once the asset has been removed (or removed and re-imported)
    /// since the ticket was issued; the loader must then discard the
    /// result.
    pub fn is_asset_load_current(&self, ticket: &AssetLoadTicket) -> bool {
        self.asset(&ticket.name)
            .is_some_and(|asset| asset.generation == ticket.generation)
    }

    // ------------------------------------------------------------------
    // Scene items
    // ------------------------------------------------------------------

    /// All placed items in placement order
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Look up a placed item by id
    pub fn item(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Place a new instance of a library asset in the scene
    ///
    /// The item gets a fresh opaque id and the default drop-in transform.
    /// It may exist in store state before its geometry finishes loading;
    /// readers tolerate that window.
    pub fn add_item(&mut self, asset_name: &str) -> Result<ItemId, StoreError> {
        let asset = self
            .asset(asset_name)
            .ok_or_else(|| StoreError::UnknownAsset(asset_name.to_string()))?;
        let id = ItemId::from_raw(self.next_item_id);
        let item = SceneItem::placed(id, asset);
        self.next_item_id += 1;
        debug!("Scene item {} placed from asset {}", id, asset_name);
        self.items.push(item);
        Ok(id)
    }

    /// Merge a partial transform into an item (gizmo-drag commit)
    pub fn update_item(&mut self, id: ItemId, patch: TransformPatch) -> Result<(), StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::UnknownItem(id))?;
        if let Some(position) = patch.position {
            item.position = position;
        }
        if let Some(rotation) = patch.rotation {
            item.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            item.scale = scale;
        }
        debug!("Scene item {} transform updated", id);
        Ok(())
    }

    /// Delete a placed item
    pub fn delete_item(&mut self, id: ItemId) -> Result<(), StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::UnknownItem(id))?;
        self.items.remove(index);
        if self.selection == Some(id) {
            self.selection = None;
        }
        debug!("Scene item {} deleted", id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selection and transform mode
    // ------------------------------------------------------------------

    /// The currently selected item, if any
    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    /// Select an item, or pass `None` to deselect (click on empty space)
    pub fn select(&mut self, id: Option<ItemId>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if self.item(id).is_none() {
                return Err(StoreError::UnknownItem(id));
            }
        }
        self.selection = id;
        Ok(())
    }

    /// The global gizmo mode
    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    /// Set the global gizmo mode
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.transform_mode = mode;
    }

    // ------------------------------------------------------------------
    // Environment and lighting knobs
    // ------------------------------------------------------------------

    /// The environment preset name
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Set the environment preset name
    pub fn set_environment(&mut self, environment: impl Into<String>) {
        self.environment = environment.into();
    }

    /// The room lighting preset
    pub fn room_preset(&self) -> RoomLightingPreset {
        self.room_preset
    }

    /// Set the room lighting preset
    pub fn set_room_preset(&mut self, preset: RoomLightingPreset) {
        self.room_preset = preset;
    }

    /// The furniture lighting preset
    pub fn furniture_preset(&self) -> FurnitureLightingPreset {
        self.furniture_preset
    }

    /// Set the furniture lighting preset
    pub fn set_furniture_preset(&mut self, preset: FurnitureLightingPreset) {
        self.furniture_preset = preset;
    }

    /// The room rig intensity multiplier
    pub fn room_intensity(&self) -> f32 {
        self.room_intensity
    }

    /// Set the room rig intensity multiplier
    ///
    /// Expected domain `[0, 3]`; not enforced - out-of-range values pass
    /// through to the rig unchanged.
    pub fn set_room_intensity(&mut self, intensity: f32) {
        self.room_intensity = intensity;
    }

    /// The furniture rig intensity multiplier
    pub fn furniture_intensity(&self) -> f32 {
        self.furniture_intensity
    }

    /// Set the furniture rig intensity multiplier (expected domain `[0, 3]`)
    pub fn set_furniture_intensity(&mut self, intensity: f32) {
        self.furniture_intensity = intensity;
    }

    /// The room material brightness factor
    pub fn room_brightness(&self) -> f32 {
        self.room_brightness
    }

    /// Set the room material brightness factor (expected domain `[0.5, 3]`)
    pub fn set_room_brightness(&mut self, brightness: f32) {
        self.room_brightness = brightness;
    }

    // ------------------------------------------------------------------
    // Room geometry lifecycle
    // ------------------------------------------------------------------

    /// Bounds of the loaded room asset, if one is present
    pub fn room_bounds(&self) -> Option<&RoomBounds> {
        self.room_bounds.as_ref()
    }

    /// Start tracking an asynchronous room geometry load
    ///
    /// Supersedes any earlier in-flight room load: older tickets go stale
    /// and their eventual results are discarded.
    pub fn begin_room_load(&mut self) -> RoomLoadTicket {
        self.room_generation += 1;
        debug!("Room load started (generation {})", self.room_generation);
        RoomLoadTicket {
            generation: self.room_generation,
        }
    }

    /// Deliver the bounds computed for a finished room load
    ///
    /// Applies only if the ticket is still current; returns whether it was.
    pub fn finish_room_load(&mut self, ticket: RoomLoadTicket, bounds: RoomBounds) -> bool {
        if ticket.generation != self.room_generation {
            debug!(
                "Discarding stale room load (generation {} != {})",
                ticket.generation, self.room_generation
            );
            return false;
        }
        info!(
            "Room bounds set: {:.2} x {:.2} x {:.2}",
            bounds.width(),
            bounds.height(),
            bounds.depth()
        );
        self.room_bounds = Some(bounds);
        true
    }

    /// Remove the room asset: clear bounds and cancel in-flight loads
    pub fn clear_room(&mut self) {
        self.room_generation += 1;
        self.room_bounds = None;
        info!("Room cleared");
    }

    // ------------------------------------------------------------------
    // Derived lighting rigs
    // ------------------------------------------------------------------

    /// The room lighting rig for the current preset, bounds, and intensity
    ///
    /// Recomputed from scratch on every call; `None` when the preset is
    /// off or no room is loaded.
    pub fn room_rig(&self) -> Option<RoomRig> {
        resolve_room(self.room_preset, self.room_bounds.as_ref())
            .map(|rig| rig.scaled(self.room_intensity))
    }

    /// The furniture lighting rig for the current preset and intensity
    pub fn furniture_rig(&self) -> FurnitureRig {
        resolve_furniture(self.furniture_preset).scaled(self.furniture_intensity)
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    /// Project the full persisted state, asset payloads included
    pub fn to_document(&self) -> SceneDocument {
        SceneDocument {
            library: self
                .library
                .iter()
                .map(|asset| AssetEntry {
                    name: asset.name.clone(),
                    url: asset.url.clone(),
                })
                .collect(),
            items: self
                .items
                .iter()
                .map(|item| ItemEntry {
                    id: item.id,
                    name: item.name.clone(),
                    url: item.url.clone(),
                    position: item.position,
                    rotation: item.rotation,
                    scale: item.scale,
                })
                .collect(),
            environment: self.environment.clone(),
            room_lighting_preset: self.room_preset.key().to_string(),
            furniture_lighting_preset: self.furniture_preset.key().to_string(),
            room_light_intensity: self.room_intensity,
            furniture_light_intensity: self.furniture_intensity,
            room_material_brightness: self.room_brightness,
        }
    }

    /// Project the lightweight export: transforms only, no payloads
    pub fn to_info(&self) -> SceneInfo {
        SceneInfo {
            environment: self.environment.clone(),
            items: self
                .items
                .iter()
                .map(|item| InfoItemEntry {
                    id: item.id,
                    name: item.name.clone(),
                    position: item.position,
                    rotation: item.rotation,
                    scale: item.scale,
                })
                .collect(),
            room_lighting_preset: self.room_preset.key().to_string(),
            furniture_lighting_preset: self.furniture_preset.key().to_string(),
            room_light_intensity: self.room_intensity,
            furniture_light_intensity: self.furniture_intensity,
            room_material_brightness: self.room_brightness,
        }
    }

    /// Replace library, items, environment, and every lighting knob from a
    /// parsed document
    ///
    /// A full replace, not a merge: fields the document omitted already
    /// carry the documented defaults from parsing. Selection is cleared
    /// (the items it referred to are gone); the transform mode and the
    /// loaded room geometry are runtime state and stay as they are.
    pub fn load_document(&mut self, document: SceneDocument) {
        self.library.clear();
        for entry in document.library {
            if self.has_asset(&entry.name) {
                warn!("Document contains duplicate asset name, skipping: {}", entry.name);
                continue;
            }
            let mut asset = LibraryAsset::new(entry.name, entry.url);
            asset.generation = self.bump_asset_generation();
            self.library.push(asset);
        }

        self.items = document
            .items
            .into_iter()
            .map(|entry| SceneItem {
                id: entry.id,
                asset_name: entry.name.clone(),
                url: entry.url,
                name: entry.name,
                position: entry.position,
                rotation: entry.rotation,
                scale: entry.scale,
            })
            .collect();
        // Resume past the largest loaded id so later placements can't collide
        let max_id = self.items.iter().map(|item| item.id.raw()).max().unwrap_or(0);
        self.next_item_id = self.next_item_id.max(max_id + 1);

        self.selection = None;
        self.environment = document.environment;
        self.room_preset = parse_room_preset(&document.room_lighting_preset);
        self.furniture_preset = parse_furniture_preset(&document.furniture_lighting_preset);
        self.room_intensity = document.room_light_intensity;
        self.furniture_intensity = document.furniture_light_intensity;
        self.room_brightness = document.room_material_brightness;

        info!(
            "Document loaded: {} asset(s), {} item(s), environment '{}'",
            self.library.len(),
            self.items.len(),
            self.environment
        );
    }

    fn bump_asset_generation(&mut self) -> u64 {
        let generation = self.next_asset_generation;
        self.next_asset_generation += 1;
        generation
    }
}

/// Parse a room preset key from a document, logging the fallback
///
/// Unknown keys silently collapse to `off` per the documented fallback;
/// the warning is the one hook flagging a possible typo in a persisted
/// document.
fn parse_room_preset(key: &str) -> RoomLightingPreset {
    let preset = RoomLightingPreset::from_key(key);
    if preset == RoomLightingPreset::Off && key != "off" {
        warn!("Unknown room lighting preset '{}', treating as off", key);
    }
    preset
}

/// Parse a furniture preset key from a document, logging the fallback
fn parse_furniture_preset(key: &str) -> FurnitureLightingPreset {
    let preset = FurnitureLightingPreset::from_key(key);
    if preset == FurnitureLightingPreset::Default && key != "default" {
        warn!(
            "Unknown furniture lighting preset '{}', using default",
            key
        );
    }
    preset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Point3, Vec3, EPSILON};

    fn store_with_assets() -> SceneStore {
        let mut store = SceneStore::new();
        store.add_asset("sofa", "assets/sofa.glb").unwrap();
        store.add_asset("lamp", "assets/lamp.glb").unwrap();
        store
    }

    fn test_bounds() -> RoomBounds {
        RoomBounds::from_corners(Point3::new(-5.0, 0.0, -5.0), Point3::new(5.0, 4.0, 5.0))
    }

    #[test]
    fn test_duplicate_asset_is_rejected() {
        let mut store = store_with_assets();
        let result = store.add_asset("sofa", "assets/other.glb");
        assert_eq!(
            result,
            Err(StoreError::DuplicateAsset("sofa".to_string()))
        );
        assert_eq!(store.assets().len(), 2);
    }

    #[test]
    fn test_asset_names_are_case_sensitive() {
        let mut store = store_with_assets();
        assert!(store.add_asset("Sofa", "assets/sofa2.glb").is_ok());
        assert_eq!(store.assets().len(), 3);
    }

    #[test]
    fn test_add_item_assigns_fresh_ids_and_default_transform() {
        let mut store = store_with_assets();
        let first = store.add_item("sofa").unwrap();
        let second = store.add_item("sofa").unwrap();

        assert_ne!(first, second);
        let item = store.item(first).unwrap();
        assert_eq!(item.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(item.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_add_item_for_unknown_asset_fails() {
        let mut store = store_with_assets();
        assert!(matches!(
            store.add_item("piano"),
            Err(StoreError::UnknownAsset(_))
        ));
    }

    #[test]
    fn test_update_item_merges_partial_patch() {
        let mut store = store_with_assets();
        let id = store.add_item("lamp").unwrap();

        store
            .update_item(id, TransformPatch::position(Vec3::new(2.0, 0.0, -1.0)))
            .unwrap();
        store
            .update_item(id, TransformPatch::rotation(Vec3::new(0.0, 1.5, 0.0)))
            .unwrap();

        let item = store.item(id).unwrap();
        assert_eq!(item.position, Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(item.rotation, Vec3::new(0.0, 1.5, 0.0));
        // Untouched field keeps its value
        assert_eq!(item.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_delete_item_clears_its_selection() {
        let mut store = store_with_assets();
        let id = store.add_item("sofa").unwrap();
        store.select(Some(id)).unwrap();

        store.delete_item(id).unwrap();
        assert_eq!(store.selection(), None);
        assert!(store.item(id).is_none());
    }

    #[test]
    fn test_remove_asset_cascades_to_items_and_selection() {
        let mut store = store_with_assets();
        let sofa_a = store.add_item("sofa").unwrap();
        let _sofa_b = store.add_item("sofa").unwrap();
        let lamp = store.add_item("lamp").unwrap();
        store.select(Some(sofa_a)).unwrap();

        store.remove_asset("sofa").unwrap();

        assert!(store.items().iter().all(|item| item.asset_name != "sofa"));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.selection(), None);
        assert!(store.item(lamp).is_some());
    }

    #[test]
    fn test_remove_asset_keeps_unrelated_selection() {
        let mut store = store_with_assets();
        let _sofa = store.add_item("sofa").unwrap();
        let lamp = store.add_item("lamp").unwrap();
        store.select(Some(lamp)).unwrap();

        store.remove_asset("sofa").unwrap();
        assert_eq!(store.selection(), Some(lamp));
    }

    #[test]
    fn test_select_unknown_item_fails() {
        let mut store = store_with_assets();
        let id = store.add_item("sofa").unwrap();
        store.delete_item(id).unwrap();
        assert!(matches!(
            store.select(Some(id)),
            Err(StoreError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_intensity_values_pass_through_unclamped() {
        let mut store = SceneStore::new();
        store.set_room_intensity(7.5);
        store.set_room_brightness(-2.0);
        assert!((store.room_intensity() - 7.5).abs() < EPSILON);
        assert!((store.room_brightness() - (-2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_room_rig_tracks_bounds_and_intensity() {
        let mut store = SceneStore::new();
        assert!(store.room_rig().is_none());

        let ticket = store.begin_room_load();
        assert!(store.finish_room_load(ticket, test_bounds()));
        store.set_room_intensity(2.0);

        let rig = store.room_rig().unwrap();
        // warm-evening ambient 0.4, scaled by the runtime multiplier
        assert!((rig.ambient.intensity - 0.8).abs() < EPSILON);

        store.clear_room();
        assert!(store.room_rig().is_none());
    }

    #[test]
    fn test_stale_room_load_is_discarded() {
        let mut store = SceneStore::new();
        let stale = store.begin_room_load();
        let current = store.begin_room_load();

        assert!(!store.finish_room_load(stale, test_bounds()));
        assert!(store.room_bounds().is_none());
        assert!(store.finish_room_load(current, test_bounds()));
        assert!(store.room_bounds().is_some());
    }

    #[test]
    fn test_cleared_room_discards_in_flight_load() {
        let mut store = SceneStore::new();
        let ticket = store.begin_room_load();
        store.clear_room();

        assert!(!store.finish_room_load(ticket, test_bounds()));
        assert!(store.room_bounds().is_none());
    }

    #[test]
    fn test_removed_asset_load_is_discarded() {
        let mut store = store_with_assets();
        let ticket = store.begin_asset_load("sofa").unwrap();
        assert!(store.is_asset_load_current(&ticket));

        store.remove_asset("sofa").unwrap();
        assert!(!store.is_asset_load_current(&ticket));

        // Re-importing under the same name must not revive the old ticket
        store.add_asset("sofa", "assets/sofa.glb").unwrap();
        assert!(!store.is_asset_load_current(&ticket));
    }

    #[test]
    fn test_furniture_rig_applies_multiplier() {
        let mut store = SceneStore::new();
        store.set_furniture_preset(FurnitureLightingPreset::Studio);
        store.set_furniture_intensity(2.0);

        let rig = store.furniture_rig();
        let base = resolve_furniture(FurnitureLightingPreset::Studio);
        assert!((rig.directional.intensity - base.directional.intensity * 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_document_round_trip_restores_observable_state() {
        let mut store = store_with_assets();
        let sofa = store.add_item("sofa").unwrap();
        store
            .update_item(sofa, TransformPatch::position(Vec3::new(3.0, 1.0, -2.0)))
            .unwrap();
        store.set_environment("loft");
        store.set_room_preset(RoomLightingPreset::Gallery);
        store.set_furniture_preset(FurnitureLightingPreset::Dramatic);
        store.set_room_intensity(1.3);
        store.set_furniture_intensity(0.7);
        store.set_room_brightness(1.8);

        let document = store.to_document();
        let mut restored = SceneStore::new();
        restored.load_document(document.clone());

        assert_eq!(restored.to_document(), document);
        assert_eq!(restored.items().len(), 1);
        assert_eq!(restored.items()[0].id, sofa);
        assert_eq!(restored.room_preset(), RoomLightingPreset::Gallery);
        assert!((restored.room_intensity() - 1.3).abs() < EPSILON);
    }

    #[test]
    fn test_load_empty_document_yields_defaults() {
        let mut store = store_with_assets();
        store.set_room_intensity(2.5);
        store.load_document(SceneDocument::from_json("{}").unwrap());

        assert!(store.assets().is_empty());
        assert!(store.items().is_empty());
        assert_eq!(store.room_preset(), RoomLightingPreset::WarmEvening);
        assert!((store.room_intensity() - 1.0).abs() < EPSILON);
        assert_eq!(store.environment(), "studio");
    }

    #[test]
    fn test_load_is_full_replace_not_merge() {
        let mut store = store_with_assets();
        store.add_item("lamp").unwrap();

        let document = SceneDocument {
            library: vec![AssetEntry {
                name: "table".to_string(),
                url: "assets/table.glb".to_string(),
            }],
            ..SceneDocument::default()
        };
        store.load_document(document);

        assert_eq!(store.assets().len(), 1);
        assert_eq!(store.assets()[0].name, "table");
        assert!(store.items().is_empty());
        assert_eq!(store.selection(), None);
    }

    #[test]
    fn test_load_resumes_item_id_counter() {
        let mut store = store_with_assets();
        let document = SceneDocument {
            library: vec![AssetEntry {
                name: "sofa".to_string(),
                url: "assets/sofa.glb".to_string(),
            }],
            items: vec![ItemEntry {
                id: ItemId::from_raw(40),
                name: "sofa".to_string(),
                url: "assets/sofa.glb".to_string(),
                position: Vec3::new(0.0, 1.0, 0.0),
                rotation: Vec3::zeros(),
                scale: Vec3::new(1.0, 1.0, 1.0),
            }],
            ..SceneDocument::default()
        };
        store.load_document(document);

        let fresh = store.add_item("sofa").unwrap();
        assert!(fresh.raw() > 40);
    }

    #[test]
    fn test_unknown_preset_keys_fall_back_on_load() {
        let mut store = SceneStore::new();
        let document = SceneDocument::from_json(
            r#"{"roomLightingPreset": "neon-rave", "furnitureLightingPreset": "noir"}"#,
        )
        .unwrap();
        store.load_document(document);

        assert_eq!(store.room_preset(), RoomLightingPreset::Off);
        assert_eq!(store.furniture_preset(), FurnitureLightingPreset::Default);
    }

    #[test]
    fn test_info_projection_has_no_payloads() {
        let mut store = store_with_assets();
        store.add_item("sofa").unwrap();

        let info = store.to_info();
        let json = info.to_json_pretty().unwrap();
        assert!(!json.contains("\"url\""));
        assert!(!json.contains("assets/sofa.glb"));
        assert_eq!(info.items.len(), 1);
    }
}
