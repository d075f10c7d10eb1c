//! Axis-aligned 2D rectangle for surface footprints.
//!
//! [`Rect2D`] records the footprint of a retained surface. When two
//! observations of the same physical surface are merged, their rectangles are
//! combined with [`Rect2D::union`], the smallest rectangle covering both.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned 2D rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect2D {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Rect2D {
    /// Create a rectangle from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Create a rectangle centered at a point with the given extents.
    #[inline]
    pub fn centered(center: Point2D, width: f32, height: f32) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self {
            min: Point2D::new(center.x - half_w, center.y - half_h),
            max: Point2D::new(center.x + half_w, center.y + half_h),
        }
    }

    /// Width of the rectangle (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle (y extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Smallest rectangle covering both inputs (component-wise min of minima,
    /// max of maxima).
    #[inline]
    pub fn union(&self, other: &Rect2D) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
