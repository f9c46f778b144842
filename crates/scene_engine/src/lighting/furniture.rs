//! Furniture lighting preset resolver
//!
//! Bounds-independent: furniture previews always get a rig, so the
//! resolver is total and unknown keys fall back to the default entry.

use crate::foundation::math::{Point3, Vec3};
use crate::lighting::rig::{AmbientLight, DirectionalLight, FurnitureRig};

/// Key light position shared by every preset except `Dramatic`
const KEY_LIGHT_POSITION: (f32, f32, f32) = (5.0, 10.0, 7.0);

/// Key light position for the `Dramatic` preset
const DRAMATIC_LIGHT_POSITION: (f32, f32, f32) = (8.0, 15.0, 10.0);

/// Named furniture lighting presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurnitureLightingPreset {
    /// Balanced neutral preview lighting
    Default,
    /// Diffuse low-contrast lighting
    Soft,
    /// Crisp high-key lighting with sharper shadows
    Studio,
    /// Strong single key light from high and far
    Dramatic,
}

impl Default for FurnitureLightingPreset {
    fn default() -> Self {
        Self::Default
    }
}

impl FurnitureLightingPreset {
    /// Parse a persisted preset key; unknown keys fall back to `Default`
    pub fn from_key(key: &str) -> Self {
        match key {
            "soft" => Self::Soft,
            "studio" => Self::Studio,
            "dramatic" => Self::Dramatic,
            _ => Self::Default,
        }
    }

    /// The persisted key for this preset
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Soft => "soft",
            Self::Studio => "studio",
            Self::Dramatic => "dramatic",
        }
    }
}

/// Resolve a furniture lighting rig from a preset
///
/// Total: every preset (and, via [`FurnitureLightingPreset::from_key`],
/// every key) maps to a rig. Intensities are base values; the caller
/// applies the runtime multiplier via [`FurnitureRig::scaled`].
pub fn resolve_furniture(preset: FurnitureLightingPreset) -> FurnitureRig {
    let (x, y, z) = match preset {
        FurnitureLightingPreset::Dramatic => DRAMATIC_LIGHT_POSITION,
        _ => KEY_LIGHT_POSITION,
    };
    let position = Point3::new(x, y, z);

    match preset {
        FurnitureLightingPreset::Default => FurnitureRig {
            ambient: AmbientLight {
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 0.45,
            },
            directional: DirectionalLight {
                position,
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 0.9,
                casts_shadow: true,
                shadow_map_size: 1024,
            },
        },
        FurnitureLightingPreset::Soft => FurnitureRig {
            ambient: AmbientLight {
                color: Vec3::new(1.0, 0.98, 0.95),
                intensity: 0.6,
            },
            directional: DirectionalLight {
                position,
                color: Vec3::new(1.0, 0.95, 0.9),
                intensity: 0.6,
                casts_shadow: true,
                shadow_map_size: 1024,
            },
        },
        FurnitureLightingPreset::Studio => FurnitureRig {
            ambient: AmbientLight {
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 0.5,
            },
            directional: DirectionalLight {
                position,
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 1.1,
                casts_shadow: true,
                shadow_map_size: 2048,
            },
        },
        FurnitureLightingPreset::Dramatic => FurnitureRig {
            ambient: AmbientLight {
                color: Vec3::new(0.9, 0.9, 1.0),
                intensity: 0.25,
            },
            directional: DirectionalLight {
                position,
                color: Vec3::new(1.0, 0.95, 0.85),
                intensity: 1.4,
                casts_shadow: true,
                shadow_map_size: 2048,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::EPSILON;

    #[test]
    fn test_resolver_is_total() {
        for preset in [
            FurnitureLightingPreset::Default,
            FurnitureLightingPreset::Soft,
            FurnitureLightingPreset::Studio,
            FurnitureLightingPreset::Dramatic,
        ] {
            let rig = resolve_furniture(preset);
            assert!(rig.ambient.intensity > 0.0);
            assert!(rig.directional.intensity > 0.0);
        }
    }

    #[test]
    fn test_unknown_key_matches_default_entry() {
        let fallback = resolve_furniture(FurnitureLightingPreset::from_key("no-such-preset"));
        let default = resolve_furniture(FurnitureLightingPreset::Default);
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_key_light_positions() {
        for preset in [
            FurnitureLightingPreset::Default,
            FurnitureLightingPreset::Soft,
            FurnitureLightingPreset::Studio,
        ] {
            let rig = resolve_furniture(preset);
            assert!((rig.directional.position.x - 5.0).abs() < EPSILON);
            assert!((rig.directional.position.y - 10.0).abs() < EPSILON);
            assert!((rig.directional.position.z - 7.0).abs() < EPSILON);
        }

        let dramatic = resolve_furniture(FurnitureLightingPreset::Dramatic);
        assert!((dramatic.directional.position.x - 8.0).abs() < EPSILON);
        assert!((dramatic.directional.position.y - 15.0).abs() < EPSILON);
        assert!((dramatic.directional.position.z - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_key_round_trip() {
        for preset in [
            FurnitureLightingPreset::Default,
            FurnitureLightingPreset::Soft,
            FurnitureLightingPreset::Studio,
            FurnitureLightingPreset::Dramatic,
        ] {
            assert_eq!(FurnitureLightingPreset::from_key(preset.key()), preset);
        }
    }
}
