//! Raw plane observations from the spatial-tracking subsystem.
//!
//! A [`PlaneObservation`] is one detected flat surface: a world transform, a
//! coarse alignment tag, and the plane's extent in meters. Observations are
//! owned by the tracking collaborator and immutable once received; the
//! room-understanding core borrows them for the duration of one analysis
//! pass and never mutates them.

use serde::{Deserialize, Serialize};

use super::point::Point3D;
use super::transform::Transform3D;

/// Opaque identifier assigned to a plane by the tracking subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlaneId(pub u64);

/// Coarse orientation tag assigned by the tracking subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneAlignment {
    /// Plane normal is (approximately) vertical: floors, ceilings, tables.
    Horizontal,
    /// Plane normal is (approximately) horizontal: walls, doors, windows.
    Vertical,
    /// The tracking subsystem could not determine an alignment.
    Unrecognized,
}

/// One detected planar surface reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneObservation {
    /// Identifier from the tracking subsystem.
    pub id: PlaneId,
    /// World transform of the plane anchor (position + orientation).
    pub transform: Transform3D,
    /// Coarse orientation tag.
    pub alignment: PlaneAlignment,
    /// Extent along the plane's local X axis (meters).
    pub width: f32,
    /// Extent along the plane's local Y axis (meters).
    pub height: f32,
    /// Tracking confidence in [0, 1], if the subsystem reports one.
    pub confidence: Option<f32>,
    /// Capture timestamp in microseconds.
    pub timestamp_us: u64,
}

impl PlaneObservation {
    /// Create a new observation.
    pub fn new(
        id: PlaneId,
        transform: Transform3D,
        alignment: PlaneAlignment,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            id,
            transform,
            alignment,
            width,
            height,
            confidence: None,
            timestamp_us: 0,
        }
    }

    /// Builder-style setter for confidence.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Builder-style setter for the capture timestamp.
    pub fn with_timestamp_us(mut self, timestamp_us: u64) -> Self {
        self.timestamp_us = timestamp_us;
        self
    }

    /// World position of the plane anchor.
    #[inline]
    pub fn position(&self) -> Point3D {
        self.transform.translation()
    }

    /// Surface area of the plane extent (m²).
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
