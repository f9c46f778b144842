//! Procedural lighting rigs
//!
//! Preset resolvers are pure and table-driven: a rig is a deterministic,
//! side-effect-free function of a preset identifier and (for room rigs)
//! the current room bounds. Rigs are immutable values, recomputed whole on
//! every preset or bounds change - there is no incremental update path.

mod furniture;
mod rig;
mod room;

pub use furniture::{resolve_furniture, FurnitureLightingPreset};
pub use rig::{AmbientLight, DirectionalLight, FurnitureRig, HemisphereLight, PointLight, RoomRig};
pub use room::{resolve_room, RoomLightingPreset};
