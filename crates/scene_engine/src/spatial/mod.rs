//! Spatial types - bounding volumes for loaded geometry
//!
//! The bounds calculator is pure: it derives a [`RoomBounds`] from the
//! composed geometry of the loaded room asset and has no shared state.

mod bounds;

pub use bounds::{Aabb, RoomBounds};
