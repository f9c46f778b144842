//! Headless scene composition demo
//!
//! Exercises the full engine surface without a window or GPU: builds a
//! furnished demo scene, resolves both lighting rigs against loaded room
//! bounds, writes a full save and an info export, then reloads the save
//! and verifies the round trip. Useful as an integration smoke run and as
//! a reference for embedding the engine behind a real renderer.

use std::path::{Path, PathBuf};

use scene_engine::prelude::*;

/// Config file consulted when present in the working directory
const CONFIG_PATH: &str = "studio.toml";

/// File name of the full save written by the demo
const SAVE_FILE: &str = "demo_scene.json";

/// File name of the info export written by the demo
const INFO_FILE: &str = "demo_scene.info.json";

/// Demo room extents: a 10 x 4 x 10 living room around the origin
const ROOM_MIN: (f32, f32, f32) = (-5.0, 0.0, -5.0);
const ROOM_MAX: (f32, f32, f32) = (5.0, 4.0, 5.0);

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("reloaded document does not match the saved scene")]
    RoundTripMismatch,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    let mut store = SceneStore::new();
    apply_config_if_present(&mut store);

    build_demo_scene(&mut store)?;
    load_demo_room(&mut store);
    report_rigs(&store);
    adjust_room_materials(&store);
    save_and_verify(&store, &output_dir)?;

    log::info!("Demo complete");
    Ok(())
}

/// Apply `studio.toml` startup knobs when the file exists
fn apply_config_if_present(store: &mut SceneStore) {
    if !Path::new(CONFIG_PATH).exists() {
        log::debug!("No {} found, using built-in defaults", CONFIG_PATH);
        return;
    }
    match StudioConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            log::info!("Applying startup config from {}", CONFIG_PATH);
            config.apply_to(store);
        }
        Err(err) => log::warn!("Ignoring unreadable {}: {}", CONFIG_PATH, err),
    }
}

/// Import a few assets and place them around the room
fn build_demo_scene(store: &mut SceneStore) -> Result<(), DemoError> {
    store.add_asset("sofa", "assets/sofa.glb")?;
    store.add_asset("armchair", "assets/armchair.glb")?;
    store.add_asset("floor-lamp", "assets/floor_lamp.glb")?;

    let sofa = store.add_item("sofa")?;
    store.update_item(
        sofa,
        TransformPatch {
            position: Some(Vec3::new(0.0, 0.0, -3.0)),
            rotation: None,
            scale: None,
        },
    )?;

    let armchair = store.add_item("armchair")?;
    store.update_item(
        armchair,
        TransformPatch {
            position: Some(Vec3::new(2.5, 0.0, -1.0)),
            rotation: Some(Vec3::new(0.0, -0.6, 0.0)),
            scale: None,
        },
    )?;

    let lamp = store.add_item("floor-lamp")?;
    store.update_item(lamp, TransformPatch::position(Vec3::new(-3.5, 0.0, -3.5)))?;

    store.select(Some(lamp))?;
    store.set_transform_mode(TransformMode::Rotate);
    store.set_room_preset(RoomLightingPreset::WarmEvening);
    store.set_furniture_preset(FurnitureLightingPreset::Studio);
    store.set_room_intensity(1.2);
    store.set_room_brightness(1.5);

    log::info!(
        "Demo scene built: {} assets, {} items",
        store.assets().len(),
        store.items().len()
    );
    Ok(())
}

/// Simulate the renderer finishing the room asset load
fn load_demo_room(store: &mut SceneStore) {
    let ticket = store.begin_room_load();
    let shell = Aabb::new(
        Point3::new(ROOM_MIN.0, ROOM_MIN.1, ROOM_MIN.2),
        Point3::new(ROOM_MAX.0, ROOM_MAX.1, ROOM_MAX.2),
    );
    let bounds = RoomBounds::from_meshes([&shell]);
    if !store.finish_room_load(ticket, bounds) {
        log::warn!("Room load was superseded before it finished");
    }
}

/// Print the rigs the renderer would instantiate
fn report_rigs(store: &SceneStore) {
    match store.room_rig() {
        Some(rig) => {
            log::info!(
                "Room rig '{}': ambient {:.2}, {} point light(s), hemisphere: {}",
                store.room_preset().key(),
                rig.ambient.intensity,
                rig.points.len(),
                rig.hemisphere.is_some()
            );
            for point in &rig.points {
                log::info!(
                    "  point light at ({:.1}, {:.1}, {:.1}), falloff {:.1}",
                    point.position.x,
                    point.position.y,
                    point.position.z,
                    point.falloff_distance
                );
            }
        }
        None => log::info!("Room rig: off"),
    }

    let furniture = store.furniture_rig();
    log::info!(
        "Furniture rig '{}': ambient {:.2}, key light intensity {:.2} at ({:.0}, {:.0}, {:.0})",
        store.furniture_preset().key(),
        furniture.ambient.intensity,
        furniture.directional.intensity,
        furniture.directional.position.x,
        furniture.directional.position.y,
        furniture.directional.position.z
    );
}

/// Run the brightness adjuster over a stand-in room material
fn adjust_room_materials(store: &SceneStore) {
    let mut adjuster = BrightnessAdjuster::new();
    let mut wall = Material {
        base_color: Vec3::new(0.7, 0.65, 0.6),
        emissive_color: Vec3::zeros(),
        emissive_intensity: 0.0,
    };
    adjuster.apply(1, &mut wall, store.room_brightness());
    log::info!(
        "Wall material at brightness {:.2}: base ({:.2}, {:.2}, {:.2}), emissive {:.2}",
        store.room_brightness(),
        wall.base_color.x,
        wall.base_color.y,
        wall.base_color.z,
        wall.emissive_intensity
    );
}

/// Write both projections, reload the full save, and compare
fn save_and_verify(store: &SceneStore, output_dir: &Path) -> Result<(), DemoError> {
    let save_path = output_dir.join(SAVE_FILE);
    let info_path = output_dir.join(INFO_FILE);

    let document = store.to_document();
    document.save_to_path(&save_path)?;
    store.to_info().save_to_path(&info_path)?;
    log::info!(
        "Saved {} and {}",
        save_path.display(),
        info_path.display()
    );

    let reloaded = SceneDocument::load_from_path(&save_path)?;
    let mut restored = SceneStore::new();
    restored.load_document(reloaded);
    if restored.to_document() != document {
        return Err(DemoError::RoundTripMismatch);
    }
    log::info!("Round trip verified: reloaded state matches the save");
    Ok(())
}
