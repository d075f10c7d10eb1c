//! Aggregate room statistics.
//!
//! Statistics are views over the retained surface collection, recomputed from
//! scratch after every accepted observation. Nothing here is independently
//! mutated, so the numbers can never drift from the surfaces they describe.

use serde::{Deserialize, Serialize};

use super::surface::{DetectedSurface, SurfaceType};

/// Running room extents (meters), maintained as maxima over the evidence.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Largest observed floor width (X).
    pub width: f32,
    /// Largest observed floor length (Z).
    pub length: f32,
    /// Largest observed wall/ceiling anchor height (Y).
    pub height: f32,
}

/// Aggregate statistics over significant retained surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomStats {
    /// Significant floor surfaces.
    pub floor_count: usize,
    /// Significant wall surfaces.
    pub wall_count: usize,
    /// Significant ceiling surfaces.
    pub ceiling_count: usize,
    /// Sum of significant floor areas (m²).
    pub room_area: f32,
    /// Running room extents.
    pub dimensions: RoomDimensions,
}

impl RoomStats {
    /// Recompute all statistics from the surface collection.
    ///
    /// Only significant surfaces contribute. Floors contribute footprint
    /// width/length; walls and ceilings contribute anchor height. Furniture
    /// is excluded from dimensions entirely.
    pub fn recompute(surfaces: &[DetectedSurface]) -> Self {
        let mut stats = RoomStats::default();

        for surface in surfaces.iter().filter(|s| s.is_significant) {
            match surface.kind {
                SurfaceType::Floor => {
                    stats.floor_count += 1;
                    stats.room_area += surface.area;
                    stats.dimensions.width = stats.dimensions.width.max(surface.bounds.width());
                    stats.dimensions.length = stats.dimensions.length.max(surface.bounds.height());
                }
                SurfaceType::Wall => {
                    stats.wall_count += 1;
                    stats.dimensions.height =
                        stats.dimensions.height.max(surface.anchor_position.y);
                }
                SurfaceType::Ceiling => {
                    stats.ceiling_count += 1;
                    stats.dimensions.height =
                        stats.dimensions.height.max(surface.anchor_position.y);
                }
                SurfaceType::Furniture => {}
            }
        }

        stats
    }

    /// Human-readable summary for display purposes only.
    pub fn summary(&self) -> String {
        format!(
            "Room: {:.1}m\u{b2}, {} walls, {} floor",
            self.room_area, self.wall_count, self.floor_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point2D, Point3D, Rect2D};
    use crate::model::surface::SurfaceId;

    fn surface(
        kind: SurfaceType,
        position: Point3D,
        width: f32,
        length: f32,
        area: f32,
        significant: bool,
    ) -> DetectedSurface {
        DetectedSurface {
            id: SurfaceId(0),
            kind,
            anchor_position: position,
            bounds: Rect2D::centered(Point2D::new(position.x, position.z), width, length),
            confidence: 1.0,
            updated_at_us: 0,
            area,
            is_significant: significant,
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = RoomStats::recompute(&[]);
        assert_eq!(stats, RoomStats::default());
    }

    #[test]
    fn test_counts_and_area() {
        let surfaces = vec![
            surface(SurfaceType::Floor, Point3D::ZERO, 3.0, 2.0, 6.0, true),
            surface(
                SurfaceType::Wall,
                Point3D::new(1.5, 1.25, 0.0),
                2.0,
                2.5,
                3.0,
                true,
            ),
            surface(
                SurfaceType::Ceiling,
                Point3D::new(0.0, 2.4, 0.0),
                3.0,
                2.0,
                6.0,
                true,
            ),
        ];

        let stats = RoomStats::recompute(&surfaces);

        assert_eq!(stats.floor_count, 1);
        assert_eq!(stats.wall_count, 1);
        assert_eq!(stats.ceiling_count, 1);
        assert_eq!(stats.room_area, 6.0);
        assert_eq!(stats.dimensions.width, 3.0);
        assert_eq!(stats.dimensions.length, 2.0);
        assert_eq!(stats.dimensions.height, 2.4);
    }

    #[test]
    fn test_insignificant_surfaces_excluded() {
        let surfaces = vec![
            surface(SurfaceType::Floor, Point3D::ZERO, 3.0, 2.0, 6.0, false),
            surface(
                SurfaceType::Wall,
                Point3D::new(0.0, 1.25, 0.0),
                2.0,
                2.5,
                3.0,
                false,
            ),
        ];

        let stats = RoomStats::recompute(&surfaces);
        assert_eq!(stats, RoomStats::default());
    }

    #[test]
    fn test_furniture_excluded_from_dimensions() {
        let surfaces = vec![surface(
            SurfaceType::Furniture,
            Point3D::new(0.0, 0.9, 0.0),
            1.5,
            0.8,
            1.2,
            true,
        )];

        let stats = RoomStats::recompute(&surfaces);

        assert_eq!(stats.floor_count, 0);
        assert_eq!(stats.room_area, 0.0);
        assert_eq!(stats.dimensions, RoomDimensions::default());
    }

    #[test]
    fn test_summary_format() {
        let surfaces = vec![
            surface(SurfaceType::Floor, Point3D::ZERO, 4.0, 3.1, 12.3, true),
            surface(
                SurfaceType::Wall,
                Point3D::new(2.0, 1.25, 0.0),
                3.0,
                2.5,
                7.5,
                true,
            ),
        ];

        let stats = RoomStats::recompute(&surfaces);
        assert_eq!(stats.summary(), "Room: 12.3m\u{b2}, 1 walls, 1 floor");
    }
}
