//! Scene state - the central authority over all mutable editor entities
//!
//! [`SceneStore`] owns the asset library, placed items, selection,
//! transform mode, and every lighting knob. All mutation goes through its
//! `&mut self` API (or the [`SceneCommand`] dispatch funnel), so ordering
//! matches issue order and derived values are never observed stale.

mod command;
mod item;
mod library;
mod store;

pub use command::{CommandOutcome, SceneCommand};
pub use item::{ItemId, SceneItem, TransformMode, TransformPatch};
pub use library::{decode_embedded_payload, encode_embedded_payload, is_embedded_payload, LibraryAsset};
pub use store::{AssetLoadTicket, RoomLoadTicket, SceneStore, StoreError};
