//! Surface merge (deduplication) configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for folding repeated observations of one physical surface into
/// a single retained surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MergeSection {
    /// Maximum anchor-to-anchor distance for two surfaces of the same type
    /// to be considered the same physical surface (meters).
    ///
    /// Matching compares anchor origins only; the stored footprint
    /// rectangles are ignored for matching (they are unioned after a match
    /// is found). This is a deliberate approximation.
    /// Default: 0.5
    #[serde(default = "defaults::merge_distance")]
    pub merge_distance: f32,

    /// Observations below this area are discarded before merge or admission
    /// (m²). Default: 0.5
    #[serde(default = "defaults::min_surface_area")]
    pub min_surface_area: f32,

    /// A newly admitted surface is significant if its area meets this bar
    /// (m²). Default: 0.5
    #[serde(default = "defaults::min_significant_area")]
    pub min_significant_area: f32,

    /// A merged surface is significant if its combined area meets this bar
    /// (m²). Default: 1.0
    #[serde(default = "defaults::significant_merged_area")]
    pub significant_merged_area: f32,
}

impl Default for MergeSection {
    fn default() -> Self {
        Self {
            merge_distance: defaults::merge_distance(),
            min_surface_area: defaults::min_surface_area(),
            min_significant_area: defaults::min_significant_area(),
            significant_merged_area: defaults::significant_merged_area(),
        }
    }
}

impl MergeSection {
    /// Create a new section with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the merge distance.
    pub fn with_merge_distance(mut self, meters: f32) -> Self {
        self.merge_distance = meters;
        self
    }

    /// Builder-style setter for the minimum admitted area.
    pub fn with_min_surface_area(mut self, square_meters: f32) -> Self {
        self.min_surface_area = square_meters;
        self
    }
}
