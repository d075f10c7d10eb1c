//! The validated room structure produced by the batch pipeline.

use serde::{Deserialize, Serialize};

use crate::bounds::RoomBounds;
use crate::core::PlaneObservation;

/// A validated, accepted description of the room.
///
/// Holds the bounding volume and the raw planes that survived the batch
/// pipeline, grouped by structural role. Immutable once constructed; each
/// successful batch pass replaces the whole structure, and a failed pass
/// leaves the previous one untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomStructure {
    /// Bounding volume over all structural planes.
    pub bounds: RoomBounds,
    /// Planes classified as walls.
    pub walls: Vec<PlaneObservation>,
    /// Planes classified as floors.
    pub floors: Vec<PlaneObservation>,
    /// Planes classified as ceilings.
    pub ceilings: Vec<PlaneObservation>,
}

impl RoomStructure {
    /// Number of wall planes.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Number of floor planes.
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Number of ceiling planes.
    pub fn ceiling_count(&self) -> usize {
        self.ceilings.len()
    }
}
