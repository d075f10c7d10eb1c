//! World transform of a detected plane.
//!
//! The tracking subsystem reports each plane's pose as a 4x4 column-major
//! matrix. The room-understanding core only consumes the translation column,
//! but the full matrix is retained so downstream consumers (rendering,
//! placement) can read the orientation without a second lookup.

use serde::{Deserialize, Serialize};

use super::point::Point3D;

/// A 4x4 world transform, column-major (the convention of spatial-tracking
/// APIs: `matrix[column][row]`, translation in column 3).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Matrix columns, each `[x, y, z, w]`.
    pub columns: [[f32; 4]; 4],
}

impl Transform3D {
    /// Identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            columns: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a transform with identity rotation and the given translation.
    pub fn from_translation(position: Point3D) -> Self {
        let mut transform = Self::identity();
        transform.columns[3] = [position.x, position.y, position.z, 1.0];
        transform
    }

    /// Extract the world-space translation.
    #[inline]
    pub fn translation(&self) -> Point3D {
        Point3D::new(self.columns[3][0], self.columns[3][1], self.columns[3][2])
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}
