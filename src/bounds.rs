//! Room bounds calculation.
//!
//! Aggregates a set of classified planes into a 3D axis-aligned bounding
//! volume plus derived metrics (floor area, volume). Degenerate input is
//! well defined: no surfaces yields a zero-sized [`RoomBounds`] centered at
//! the origin, never NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::cluster::{ClassifiedSurface, Cluster};
use crate::core::{Aabb3, Point3D};

/// Axis-aligned bounding volume of a room.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomBounds {
    /// Extent along X (meters).
    pub width: f32,
    /// Extent along Y (meters, vertical).
    pub height: f32,
    /// Extent along Z (meters).
    pub length: f32,
    /// Center of the bounding volume.
    pub center: Point3D,
}

impl RoomBounds {
    /// Zero-sized bounds centered at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Floor area: width × length (m²). Derived, not stored.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.length
    }

    /// Enclosed volume: width × length × height (m³). Derived, not stored.
    #[inline]
    pub fn volume(&self) -> f32 {
        self.width * self.length * self.height
    }
}

/// Axis-aligned footprint of one plane observation.
///
/// The plane's local extents are projected conservatively onto world axes:
/// width spans X, height spans upward from the anchor in Y and sideways in Z.
fn fold_surface_footprint(aabb: &mut Aabb3, surface: &ClassifiedSurface<'_>) {
    let position = surface.observation.position();
    let half_width = surface.observation.width * 0.5;
    let half_height = surface.observation.height * 0.5;

    aabb.expand_to_include(Point3D::new(
        position.x - half_width,
        position.y,
        position.z - half_height,
    ));
    aabb.expand_to_include(Point3D::new(
        position.x + half_width,
        position.y + surface.observation.height,
        position.z + half_height,
    ));
}

/// Compute room bounds over any set of classified surfaces.
pub fn compute_room_bounds<'a: 'b, 'b, I>(surfaces: I) -> RoomBounds
where
    I: IntoIterator<Item = &'b ClassifiedSurface<'a>>,
{
    let mut aabb = Aabb3::empty();
    for surface in surfaces {
        fold_surface_footprint(&mut aabb, surface);
    }

    if aabb.is_empty() {
        return RoomBounds::zero();
    }

    RoomBounds {
        width: aabb.width(),
        height: aabb.height(),
        length: aabb.length(),
        center: aabb.center(),
    }
}

/// Compute room bounds over a collection of clusters.
pub fn compute_cluster_bounds(clusters: &[Cluster<'_>]) -> RoomBounds {
    compute_room_bounds(clusters.iter().flat_map(|cluster| &cluster.surfaces))
}
