//! Room lighting preset resolver
//!
//! Maps a preset identifier plus the current room bounds to a full
//! [`RoomRig`]. Pure and total: `Off` and absent bounds resolve to `None`,
//! and unknown preset keys collapse to `Off` at the single fallback point
//! in [`RoomLightingPreset::from_key`].

use crate::foundation::math::{lerp, Point3, Vec3};
use crate::lighting::rig::{AmbientLight, HemisphereLight, PointLight, RoomRig};
use crate::spatial::RoomBounds;

/// Ceiling lights sit below the physical ceiling, pointing down
const CEILING_FACTOR: f32 = 0.9;

/// Blend factor from room center toward each horizontal extreme
const CORNER_BLEND: f32 = 0.8;

/// Shared falloff distance factor relative to the larger horizontal extent
const FALLOFF_FACTOR: f32 = 0.8;

/// Extra drop below ceiling height for intimate presets
const LOWERED_OFFSET: f32 = 0.5;

/// Named room lighting presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomLightingPreset {
    /// No room lighting at all
    Off,
    /// Warm late-day light with a soft hemisphere wash
    WarmEvening,
    /// Bright neutral daylight
    BrightDay,
    /// Dim bluish night lighting with a reduced footprint
    CoolNight,
    /// Low warm lighting dropped closer to eye level
    Intimate,
    /// Even neutral lighting for inspecting pieces
    Gallery,
}

impl Default for RoomLightingPreset {
    fn default() -> Self {
        Self::WarmEvening
    }
}

impl RoomLightingPreset {
    /// Parse a persisted preset key
    ///
    /// Unknown keys resolve to [`Self::Off`] - the same observable behavior
    /// as an explicit `"off"`. This is the only place an unrecognized room
    /// preset identifier can enter the system.
    pub fn from_key(key: &str) -> Self {
        match key {
            "warm-evening" => Self::WarmEvening,
            "bright-day" => Self::BrightDay,
            "cool-night" => Self::CoolNight,
            "intimate" => Self::Intimate,
            "gallery" => Self::Gallery,
            _ => Self::Off,
        }
    }

    /// The persisted key for this preset
    pub fn key(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::WarmEvening => "warm-evening",
            Self::BrightDay => "bright-day",
            Self::CoolNight => "cool-night",
            Self::Intimate => "intimate",
            Self::Gallery => "gallery",
        }
    }
}

/// Which ceiling anchor points a preset populates
#[derive(Debug, Clone, Copy)]
enum CornerLayout {
    /// All four corner anchors (plus center: a 5-light rig)
    FourCorners,
    /// Two diagonally opposite anchors (plus center: a 3-light rig)
    OppositeCorners,
}

/// One point-light slot in a preset table
#[derive(Debug, Clone, Copy)]
struct LightSlot {
    color: Vec3,
    intensity: f32,
    /// Preset-specific scale applied to the shared falloff distance
    falloff_scale: f32,
}

/// Fixed configuration record for one preset
struct PresetTable {
    ambient: AmbientLight,
    /// Sky color, ground color, intensity
    hemisphere: Option<(Vec3, Vec3, f32)>,
    layout: CornerLayout,
    corner: LightSlot,
    center: LightSlot,
    /// Drop lights an extra [`LOWERED_OFFSET`] below ceiling height
    lowered: bool,
}

fn preset_table(preset: RoomLightingPreset) -> Option<PresetTable> {
    match preset {
        RoomLightingPreset::Off => None,
        RoomLightingPreset::WarmEvening => Some(PresetTable {
            ambient: AmbientLight {
                color: Vec3::new(1.0, 0.85, 0.7),
                intensity: 0.4,
            },
            hemisphere: Some((
                Vec3::new(1.0, 0.9, 0.8),
                Vec3::new(0.4, 0.3, 0.25),
                0.35,
            )),
            layout: CornerLayout::FourCorners,
            corner: LightSlot {
                color: Vec3::new(1.0, 0.75, 0.5),
                intensity: 0.8,
                falloff_scale: 1.0,
            },
            center: LightSlot {
                color: Vec3::new(1.0, 0.85, 0.65),
                intensity: 1.0,
                falloff_scale: 1.2,
            },
            lowered: false,
        }),
        RoomLightingPreset::BrightDay => Some(PresetTable {
            ambient: AmbientLight {
                color: Vec3::new(0.9, 0.95, 1.0),
                intensity: 0.7,
            },
            hemisphere: Some((
                Vec3::new(0.75, 0.85, 1.0),
                Vec3::new(0.5, 0.45, 0.4),
                0.6,
            )),
            layout: CornerLayout::FourCorners,
            corner: LightSlot {
                color: Vec3::new(1.0, 0.98, 0.92),
                intensity: 1.1,
                falloff_scale: 1.0,
            },
            center: LightSlot {
                color: Vec3::new(1.0, 1.0, 0.98),
                intensity: 1.2,
                falloff_scale: 1.2,
            },
            lowered: false,
        }),
        RoomLightingPreset::CoolNight => Some(PresetTable {
            ambient: AmbientLight {
                color: Vec3::new(0.5, 0.6, 0.8),
                intensity: 0.25,
            },
            hemisphere: None,
            layout: CornerLayout::OppositeCorners,
            corner: LightSlot {
                color: Vec3::new(0.6, 0.7, 1.0),
                intensity: 0.6,
                falloff_scale: 0.7,
            },
            center: LightSlot {
                color: Vec3::new(0.7, 0.8, 1.0),
                intensity: 0.7,
                falloff_scale: 0.7,
            },
            lowered: false,
        }),
        RoomLightingPreset::Intimate => Some(PresetTable {
            ambient: AmbientLight {
                color: Vec3::new(0.9, 0.7, 0.5),
                intensity: 0.2,
            },
            hemisphere: None,
            layout: CornerLayout::OppositeCorners,
            corner: LightSlot {
                color: Vec3::new(1.0, 0.6, 0.3),
                intensity: 0.5,
                falloff_scale: 0.6,
            },
            center: LightSlot {
                color: Vec3::new(1.0, 0.7, 0.4),
                intensity: 0.6,
                falloff_scale: 0.6,
            },
            lowered: true,
        }),
        RoomLightingPreset::Gallery => Some(PresetTable {
            ambient: AmbientLight {
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 0.5,
            },
            hemisphere: Some((
                Vec3::new(0.9, 0.9, 0.95),
                Vec3::new(0.6, 0.6, 0.6),
                0.3,
            )),
            layout: CornerLayout::FourCorners,
            corner: LightSlot {
                color: Vec3::new(1.0, 0.98, 0.95),
                intensity: 0.9,
                falloff_scale: 1.0,
            },
            center: LightSlot {
                color: Vec3::new(1.0, 1.0, 1.0),
                intensity: 1.0,
                falloff_scale: 1.2,
            },
            lowered: false,
        }),
    }
}

/// Resolve a room lighting rig from a preset and the current room bounds
///
/// Returns `None` for [`RoomLightingPreset::Off`] or when no room bounds
/// are available. All returned intensities are base values; the caller
/// applies the runtime multiplier via [`RoomRig::scaled`].
pub fn resolve_room(preset: RoomLightingPreset, bounds: Option<&RoomBounds>) -> Option<RoomRig> {
    let table = preset_table(preset)?;
    let bounds = bounds?;

    let mut light_y = bounds.max.y * CEILING_FACTOR;
    if table.lowered {
        light_y -= LOWERED_OFFSET;
    }
    let light_distance = bounds.width().max(bounds.depth()) * FALLOFF_FACTOR;

    // Diagonal pair first, so the reduced layout keeps opposite corners
    let all_corners = [
        (bounds.max.x, bounds.max.z),
        (bounds.min.x, bounds.min.z),
        (bounds.max.x, bounds.min.z),
        (bounds.min.x, bounds.max.z),
    ];
    let corner_anchors = match table.layout {
        CornerLayout::FourCorners => &all_corners[..],
        CornerLayout::OppositeCorners => &all_corners[..2],
    };

    let mut points = Vec::with_capacity(corner_anchors.len() + 1);
    for &(extreme_x, extreme_z) in corner_anchors {
        points.push(point_light(
            Point3::new(
                lerp(bounds.center.x, extreme_x, CORNER_BLEND),
                light_y,
                lerp(bounds.center.z, extreme_z, CORNER_BLEND),
            ),
            table.corner,
            light_distance,
        ));
    }
    points.push(point_light(
        Point3::new(bounds.center.x, light_y, bounds.center.z),
        table.center,
        light_distance,
    ));

    let hemisphere = table
        .hemisphere
        .map(|(sky_color, ground_color, intensity)| HemisphereLight {
            sky_color,
            ground_color,
            intensity,
            position: Point3::new(bounds.center.x, light_y, bounds.center.z),
        });

    Some(RoomRig {
        ambient: table.ambient,
        hemisphere,
        points,
    })
}

fn point_light(position: Point3, slot: LightSlot, light_distance: f32) -> PointLight {
    PointLight {
        position,
        color: slot.color,
        intensity: slot.intensity,
        falloff_distance: light_distance * slot.falloff_scale,
        falloff_exponent: 2.0,
        casts_shadow: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::EPSILON;

    /// The 10 x 4 x 10 room used throughout the resolver tests
    fn test_bounds() -> RoomBounds {
        RoomBounds::from_corners(Point3::new(-5.0, 0.0, -5.0), Point3::new(5.0, 4.0, 5.0))
    }

    fn all_presets() -> [RoomLightingPreset; 6] {
        [
            RoomLightingPreset::Off,
            RoomLightingPreset::WarmEvening,
            RoomLightingPreset::BrightDay,
            RoomLightingPreset::CoolNight,
            RoomLightingPreset::Intimate,
            RoomLightingPreset::Gallery,
        ]
    }

    #[test]
    fn test_off_resolves_to_none() {
        let bounds = test_bounds();
        assert!(resolve_room(RoomLightingPreset::Off, Some(&bounds)).is_none());
    }

    #[test]
    fn test_missing_bounds_resolve_to_none() {
        for preset in all_presets() {
            assert!(resolve_room(preset, None).is_none());
        }
    }

    #[test]
    fn test_unknown_key_behaves_like_off() {
        let bounds = test_bounds();
        let preset = RoomLightingPreset::from_key("disco-inferno");
        assert_eq!(preset, RoomLightingPreset::Off);
        assert!(resolve_room(preset, Some(&bounds)).is_none());
    }

    #[test]
    fn test_key_round_trip() {
        for preset in all_presets() {
            assert_eq!(RoomLightingPreset::from_key(preset.key()), preset);
        }
    }

    #[test]
    fn test_warm_evening_matches_reference_geometry() {
        let bounds = test_bounds();
        let rig = resolve_room(RoomLightingPreset::WarmEvening, Some(&bounds)).unwrap();

        // Ceiling height: 4.0 * 0.9
        let corner = &rig.points[0];
        assert!((corner.position.x - 4.0).abs() < EPSILON);
        assert!((corner.position.y - 3.6).abs() < EPSILON);
        assert!((corner.position.z - 4.0).abs() < EPSILON);

        // Center light last, falloff = max(10, 10) * 0.8 * 1.2
        let center = rig.points.last().unwrap();
        assert!((center.position.x - 0.0).abs() < EPSILON);
        assert!((center.position.y - 3.6).abs() < EPSILON);
        assert!((center.position.z - 0.0).abs() < EPSILON);
        assert!((center.falloff_distance - 9.6).abs() < EPSILON);

        assert_eq!(rig.points.len(), 5);
        assert!(rig.hemisphere.is_some());
    }

    #[test]
    fn test_lights_stay_within_bounds() {
        let bounds = test_bounds();
        for preset in all_presets() {
            let Some(rig) = resolve_room(preset, Some(&bounds)) else {
                continue;
            };
            for point in &rig.points {
                assert!(point.position.x >= bounds.min.x && point.position.x <= bounds.max.x);
                assert!(point.position.y >= bounds.min.y && point.position.y <= bounds.max.y);
                assert!(point.position.z >= bounds.min.z && point.position.z <= bounds.max.z);
                assert!((point.falloff_exponent - 2.0).abs() < EPSILON);
                assert!(point.casts_shadow);
            }
        }
    }

    #[test]
    fn test_corner_anchor_blend() {
        let bounds = test_bounds();
        for preset in all_presets() {
            let Some(rig) = resolve_room(preset, Some(&bounds)) else {
                continue;
            };
            // Every light except the trailing center one sits at an 80%
            // blend toward a horizontal extreme on both axes.
            for corner in &rig.points[..rig.points.len() - 1] {
                assert!((corner.position.x.abs() - 4.0).abs() < EPSILON);
                assert!((corner.position.z.abs() - 4.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_intimate_drops_below_ceiling() {
        let bounds = test_bounds();
        let rig = resolve_room(RoomLightingPreset::Intimate, Some(&bounds)).unwrap();
        for point in &rig.points {
            assert!((point.position.y - 3.1).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reduced_footprint_presets_have_three_lights() {
        let bounds = test_bounds();
        for preset in [RoomLightingPreset::CoolNight, RoomLightingPreset::Intimate] {
            let rig = resolve_room(preset, Some(&bounds)).unwrap();
            assert_eq!(rig.points.len(), 3);
            // Reduced footprint: shared falloff distance scaled under 1.0
            for point in &rig.points {
                assert!(point.falloff_distance < 8.0);
            }
        }
    }

    #[test]
    fn test_degenerate_bounds_still_resolve() {
        let bounds = RoomBounds::degenerate();
        let rig = resolve_room(RoomLightingPreset::WarmEvening, Some(&bounds)).unwrap();
        assert_eq!(rig.points.len(), 5);
        for point in &rig.points {
            assert!((point.falloff_distance - 0.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_resolver_is_deterministic() {
        let bounds = test_bounds();
        let a = resolve_room(RoomLightingPreset::Gallery, Some(&bounds));
        let b = resolve_room(RoomLightingPreset::Gallery, Some(&bounds));
        assert_eq!(a, b);
    }
}
