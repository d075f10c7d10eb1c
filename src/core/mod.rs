//! Core types for room understanding.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point3D`] and [`Point2D`]: coordinate types (meters, Y-up)
//! - [`Transform3D`]: 4x4 world transform of a plane anchor
//! - [`PlaneObservation`]: one detected plane from the tracking subsystem
//! - [`Rect2D`]: 2D surface footprint rectangle
//! - [`Aabb3`]: 3D bounding box accumulator

mod bounds;
mod observation;
mod point;
mod rect;
mod transform;

pub use bounds::Aabb3;
pub use observation::{PlaneAlignment, PlaneId, PlaneObservation};
pub use point::{Point2D, Point3D};
pub use rect::Rect2D;
pub use transform::Transform3D;
