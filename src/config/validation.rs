//! Batch structure validation configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Acceptance criteria for the batch room-structure pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationSection {
    /// Minimum number of raw planes before a batch pass is worthwhile.
    /// Default: 3
    #[serde(default = "defaults::min_plane_count")]
    pub min_plane_count: usize,

    /// Minimum room extent on each axis (meters). Default: 2.0
    #[serde(default = "defaults::min_room_dimension")]
    pub min_room_dimension: f32,

    /// Minimum room floor area, width × length (m²). Default: 4.0
    ///
    /// Intentionally looser than the incremental completeness area bar so
    /// that structure feedback keeps flowing while scanning continues.
    #[serde(default = "defaults::min_room_area")]
    pub min_room_area: f32,
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            min_plane_count: defaults::min_plane_count(),
            min_room_dimension: defaults::min_room_dimension(),
            min_room_area: defaults::min_room_area(),
        }
    }
}

impl ValidationSection {
    /// Create a new section with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the minimum room dimension.
    pub fn with_min_room_dimension(mut self, meters: f32) -> Self {
        self.min_room_dimension = meters;
        self
    }

    /// Builder-style setter for the minimum room area.
    pub fn with_min_room_area(mut self, square_meters: f32) -> Self {
        self.min_room_area = square_meters;
        self
    }
}

/// Completeness criteria for the incremental room model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletenessSection {
    /// Minimum number of significant walls. Default: 2
    #[serde(default = "defaults::min_wall_count")]
    pub min_wall_count: usize,

    /// Minimum accumulated floor area (m²). Default: 5.0
    ///
    /// Stricter than [`ValidationSection::min_room_area`]: "good enough to
    /// declare scanning done" versus "good enough to publish a structure".
    /// The two are independent knobs.
    #[serde(default = "defaults::min_complete_area")]
    pub min_complete_area: f32,
}

impl Default for CompletenessSection {
    fn default() -> Self {
        Self {
            min_wall_count: defaults::min_wall_count(),
            min_complete_area: defaults::min_complete_area(),
        }
    }
}

impl CompletenessSection {
    /// Create a new section with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the minimum wall count.
    pub fn with_min_wall_count(mut self, count: usize) -> Self {
        self.min_wall_count = count;
        self
    }

    /// Builder-style setter for the minimum complete area.
    pub fn with_min_complete_area(mut self, square_meters: f32) -> Self {
        self.min_complete_area = square_meters;
        self
    }
}
