//! Material adjustment
//!
//! The brightness adjuster rescales room materials from a captured
//! baseline so repeated adjustment replaces, rather than compounds, the
//! previous factor.

mod brightness;

pub use brightness::{BrightnessAdjuster, Material};
