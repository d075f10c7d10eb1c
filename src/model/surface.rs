//! Retained surface records for the incremental room model.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::core::{Point3D, Rect2D};

/// Identifier of a retained surface.
///
/// Fresh ids are handed out by the model; a merge produces a record with a
/// new id, the original is not preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

/// Structural role of a retained surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    /// Floor surface.
    Floor,
    /// Wall surface.
    Wall,
    /// Ceiling surface.
    Ceiling,
    /// Non-structural plane: tables, shelves, small verticals.
    Furniture,
}

impl SurfaceType {
    /// Map a classification onto a retained surface type.
    ///
    /// Mid-band horizontals and sub-wall verticals are retained as
    /// furniture; unknown-alignment observations are not retained at all.
    pub fn from_classification(classification: &Classification) -> Option<SurfaceType> {
        match classification {
            Classification::Floor { .. } => Some(SurfaceType::Floor),
            Classification::Wall { .. } => Some(SurfaceType::Wall),
            Classification::Ceiling { .. } => Some(SurfaceType::Ceiling),
            Classification::HorizontalOther { .. } | Classification::VerticalOther { .. } => {
                Some(SurfaceType::Furniture)
            }
            Classification::Unknown { .. } => None,
        }
    }

    /// Whether this type counts toward room structure (not furniture).
    #[inline]
    pub fn is_structural(&self) -> bool {
        !matches!(self, SurfaceType::Furniture)
    }
}

/// A retained, deduplicated surface.
///
/// Value-type record stored in a plain `Vec`; a merge replaces the record at
/// its index with a freshly built one rather than mutating shared state.
/// Only surfaces with `is_significant == true` count toward room statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedSurface {
    /// Identifier assigned by the model.
    pub id: SurfaceId,
    /// Structural role.
    pub kind: SurfaceType,
    /// World position of the source anchor. Sole input to merge matching.
    pub anchor_position: Point3D,
    /// Accumulated footprint rectangle.
    pub bounds: Rect2D,
    /// Tracking confidence in [0, 1].
    pub confidence: f32,
    /// Timestamp of the last observation folded in (microseconds).
    pub updated_at_us: u64,
    /// Accumulated surface area (m²).
    pub area: f32,
    /// Whether this surface counts toward room statistics.
    pub is_significant: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_classification() {
        let floor = Classification::Floor {
            area: 4.0,
            height: 0.0,
        };
        let table = Classification::HorizontalOther {
            area: 1.0,
            height: 0.8,
        };
        let unknown = Classification::Unknown {
            area: 1.0,
            height: 0.8,
        };

        assert_eq!(
            SurfaceType::from_classification(&floor),
            Some(SurfaceType::Floor)
        );
        assert_eq!(
            SurfaceType::from_classification(&table),
            Some(SurfaceType::Furniture)
        );
        assert_eq!(SurfaceType::from_classification(&unknown), None);
    }

    #[test]
    fn test_is_structural() {
        assert!(SurfaceType::Floor.is_structural());
        assert!(SurfaceType::Wall.is_structural());
        assert!(SurfaceType::Ceiling.is_structural());
        assert!(!SurfaceType::Furniture.is_structural());
    }
}
