//! Light descriptors
//!
//! Pure data shapes handed to the rendering collaborator, which
//! instantiates them as actual light sources. All intensities here are
//! *base* values; the runtime intensity multiplier is applied uniformly
//! via [`RoomRig::scaled`] / [`FurnitureRig::scaled`] before use.

use crate::foundation::math::{Point3, Vec3};

/// Scene-wide ambient term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// RGB color in `[0, 1]`
    pub color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,
}

/// Sky/ground gradient term positioned at the room center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereLight {
    /// Color contribution from above
    pub sky_color: Vec3,
    /// Color contribution from below
    pub ground_color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,
    /// World-space position (room center at ceiling height)
    pub position: Point3,
}

/// Point light with distance falloff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Point3,
    /// RGB color in `[0, 1]`
    pub color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero
    pub falloff_distance: f32,
    /// Falloff curve exponent
    pub falloff_exponent: f32,
    /// Whether this light casts shadows
    pub casts_shadow: bool,
}

/// Directional light with parallel rays, aimed at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// World-space position the rays emanate from
    pub position: Point3,
    /// RGB color in `[0, 1]`
    pub color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,
    /// Whether this light casts shadows
    pub casts_shadow: bool,
    /// Shadow map resolution hint for the renderer
    pub shadow_map_size: u32,
}

/// Resolved illumination rig for the room
///
/// Immutable once produced; a preset or bounds change produces a fresh rig.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRig {
    /// Ambient term
    pub ambient: AmbientLight,
    /// Optional sky/ground gradient term
    pub hemisphere: Option<HemisphereLight>,
    /// Point lights in placement order (corners first, then center)
    pub points: Vec<PointLight>,
}

impl RoomRig {
    /// Apply the runtime intensity multiplier uniformly to every term
    pub fn scaled(mut self, multiplier: f32) -> Self {
        self.ambient.intensity *= multiplier;
        if let Some(hemisphere) = &mut self.hemisphere {
            hemisphere.intensity *= multiplier;
        }
        for point in &mut self.points {
            point.intensity *= multiplier;
        }
        self
    }
}

/// Resolved illumination rig for furniture previews
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurnitureRig {
    /// Ambient term
    pub ambient: AmbientLight,
    /// Key directional light
    pub directional: DirectionalLight,
}

impl FurnitureRig {
    /// Apply the runtime intensity multiplier uniformly to both terms
    pub fn scaled(mut self, multiplier: f32) -> Self {
        self.ambient.intensity *= multiplier;
        self.directional.intensity *= multiplier;
        self
    }
}
