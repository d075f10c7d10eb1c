//! Axis-aligned 3D bounding box.
//!
//! [`Aabb3`] is the accumulator behind the room bounds calculation: it starts
//! empty (min at +∞, max at −∞) and grows to cover every surface footprint
//! folded into it.

use super::point::Point3D;

/// Axis-aligned 3D bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3D,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3D,
}

impl Aabb3 {
    /// Create a bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point3D, max: Point3D) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty box has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point3D::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3D::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the box is empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Expand the box to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point3D) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// X extent.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Y extent (vertical).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Z extent.
    #[inline]
    pub fn length(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point3D {
        Point3D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }
}
