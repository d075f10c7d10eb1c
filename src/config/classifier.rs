//! Surface classifier configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Classification thresholds for a single plane observation.
///
/// Horizontal planes are split into floor / ceiling / other by the height of
/// their anchor; vertical planes are split into wall / other by area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassifierSection {
    /// Horizontal planes with anchor height strictly below this are floors
    /// (meters). Default: 0.5
    #[serde(default = "defaults::floor_height_max")]
    pub floor_height_max: f32,

    /// Horizontal planes with anchor height strictly above this are ceilings
    /// (meters). Default: 2.0
    #[serde(default = "defaults::ceiling_height_min")]
    pub ceiling_height_min: f32,

    /// Vertical planes with at least this area are walls (m²).
    /// Default: 1.0 (minimum wall height of 1.0 m over a 1.0 m run)
    #[serde(default = "defaults::wall_area_threshold")]
    pub wall_area_threshold: f32,
}

impl Default for ClassifierSection {
    fn default() -> Self {
        Self {
            floor_height_max: defaults::floor_height_max(),
            ceiling_height_min: defaults::ceiling_height_min(),
            wall_area_threshold: defaults::wall_area_threshold(),
        }
    }
}

impl ClassifierSection {
    /// Create a new section with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the floor height band.
    pub fn with_floor_height_max(mut self, meters: f32) -> Self {
        self.floor_height_max = meters;
        self
    }

    /// Builder-style setter for the ceiling height band.
    pub fn with_ceiling_height_min(mut self, meters: f32) -> Self {
        self.ceiling_height_min = meters;
        self
    }

    /// Builder-style setter for the wall area threshold.
    pub fn with_wall_area_threshold(mut self, square_meters: f32) -> Self {
        self.wall_area_threshold = square_meters;
        self
    }
}
