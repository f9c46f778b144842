//! Room material brightness adjustment
//!
//! Applied per mesh-bearing node of the room asset whenever the brightness
//! multiplier changes. The first encounter of a material instance captures
//! its original color channels as an immutable baseline; every subsequent
//! adjustment recomputes from that baseline. Applying the same factor twice
//! is a no-op, and switching factors never drifts.

use std::collections::HashMap;

use crate::foundation::math::Vec3;

/// Color channels of one material instance, as owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base RGB color in `[0, 1]`
    pub base_color: Vec3,
    /// Emissive RGB color in `[0, 1]`
    pub emissive_color: Vec3,
    /// Emissive intensity
    pub emissive_intensity: f32,
}

/// Immutable snapshot of a material's original channels
#[derive(Debug, Clone, Copy)]
struct Baseline {
    base_color: Vec3,
    emissive_color: Vec3,
    emissive_intensity: f32,
}

impl Baseline {
    fn capture(material: &Material) -> Self {
        Self {
            base_color: material.base_color,
            emissive_color: material.emissive_color,
            emissive_intensity: material.emissive_intensity,
        }
    }
}

/// Rescales room material channels by a brightness factor
///
/// Keyed by an opaque per-material-instance id supplied by the rendering
/// collaborator. Baselines are captured at most once per id and never
/// overwritten, so the adjustment is idempotent with respect to the
/// current factor and reversible to any other factor.
#[derive(Debug, Default)]
pub struct BrightnessAdjuster {
    baselines: HashMap<u64, Baseline>,
}

impl BrightnessAdjuster {
    /// Create an adjuster with no captured baselines
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a brightness factor to one material instance
    ///
    /// Base color channels are recomputed as
    /// `min(baseline_channel * brightness, 1.0)`. Emissive color is
    /// restored to baseline; only its intensity scales, and only above
    /// brightness 1: `baseline_intensity + max(brightness - 1, 0) * 0.5`.
    pub fn apply(&mut self, material_id: u64, material: &mut Material, brightness: f32) {
        let baseline = self
            .baselines
            .entry(material_id)
            .or_insert_with(|| Baseline::capture(material));

        material.base_color = baseline.base_color.map(|channel| (channel * brightness).min(1.0));
        material.emissive_color = baseline.emissive_color;
        material.emissive_intensity =
            baseline.emissive_intensity + (brightness - 1.0).max(0.0) * 0.5;
    }

    /// Drop the baseline for one material instance
    ///
    /// Returns whether a baseline existed. Call when the renderer unloads
    /// an individual material.
    pub fn reset(&mut self, material_id: u64) -> bool {
        self.baselines.remove(&material_id).is_some()
    }

    /// Drop every captured baseline
    ///
    /// Call when the room asset is removed or replaced, so the next asset's
    /// materials capture fresh baselines.
    pub fn clear(&mut self) {
        self.baselines.clear();
    }

    /// Number of material instances with a captured baseline
    pub fn baseline_count(&self) -> usize {
        self.baselines.len()
    }
}
