//! Axis-aligned bounding volumes
//!
//! [`Aabb`] is the per-mesh box reported by the rendering collaborator;
//! [`RoomBounds`] is the union volume the lighting resolver scales against.

use crate::foundation::math::Point3;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point3,
    /// Maximum corner
    pub max: Point3,
}

impl Aabb {
    /// Create a box from explicit corners
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Compute the box enclosing a set of points
    ///
    /// Returns `None` for an empty point set.
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut aabb = Self::new(first, first);
        for p in points {
            aabb.min.x = aabb.min.x.min(p.x);
            aabb.min.y = aabb.min.y.min(p.y);
            aabb.min.z = aabb.min.z.min(p.z);
            aabb.max.x = aabb.max.x.max(p.x);
            aabb.max.y = aabb.max.y.max(p.y);
            aabb.max.z = aabb.max.z.max(p.z);
        }
        Some(aabb)
    }

    /// Union of two boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Geometric center of the box
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Bounding volume of the currently loaded room asset
///
/// Derived, never persisted: recomputed whenever the room asset is
/// (re)loaded and cleared when it is removed. Invariant on each axis:
/// `min <= center <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    /// Minimum corner of the union volume
    pub min: Point3,
    /// Maximum corner of the union volume
    pub max: Point3,
    /// Center of the union volume
    pub center: Point3,
}

impl RoomBounds {
    /// Build bounds from explicit corners
    pub fn from_corners(min: Point3, max: Point3) -> Self {
        Self {
            min,
            max,
            center: nalgebra::center(&min, &max),
        }
    }

    /// Union bounding volume over all constituent meshes of the room asset
    ///
    /// An asset with no renderable geometry yields the degenerate all-zero
    /// bounds rather than an error; callers must tolerate the empty volume.
    pub fn from_meshes<'a>(meshes: impl IntoIterator<Item = &'a Aabb>) -> Self {
        let mut meshes = meshes.into_iter();
        let Some(first) = meshes.next() else {
            return Self::degenerate();
        };
        let union = meshes.fold(*first, |acc, aabb| acc.union(aabb));
        Self::from_corners(union.min, union.max)
    }

    /// The empty volume: all extents zero at the origin
    pub fn degenerate() -> Self {
        Self::from_corners(Point3::origin(), Point3::origin())
    }

    /// Whether this is the empty volume
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0 && self.depth() == 0.0
    }

    /// Extent along X
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along Y
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Extent along Z
    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }
}
