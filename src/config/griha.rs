//! Main GrihaConfig and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::classifier::ClassifierSection;
use super::error::{ConfigError, ConfigLoadError};
use super::merge::MergeSection;
use super::validation::{CompletenessSection, ValidationSection};

/// Full room-understanding configuration, loadable from YAML.
///
/// Every field has a sensible default, so an empty file (or no file at all)
/// yields a working configuration.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GrihaConfig {
    /// Surface classifier thresholds.
    #[serde(default)]
    pub classifier: ClassifierSection,

    /// Surface merge / deduplication thresholds.
    #[serde(default)]
    pub merge: MergeSection,

    /// Batch structure validation criteria.
    #[serde(default)]
    pub validation: ValidationSection,

    /// Incremental completeness criteria.
    #[serde(default)]
    pub completeness: CompletenessSection,
}

impl GrihaConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file.
    ///
    /// Parses the file and validates the configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string and validate.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: GrihaConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Check all thresholds for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("classifier.wall_area_threshold", self.classifier.wall_area_threshold),
            ("merge.merge_distance", self.merge.merge_distance),
            ("merge.min_surface_area", self.merge.min_surface_area),
            ("merge.min_significant_area", self.merge.min_significant_area),
            (
                "merge.significant_merged_area",
                self.merge.significant_merged_area,
            ),
            ("validation.min_room_dimension", self.validation.min_room_dimension),
            ("validation.min_room_area", self.validation.min_room_area),
            (
                "completeness.min_complete_area",
                self.completeness.min_complete_area,
            ),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.classifier.floor_height_max >= self.classifier.ceiling_height_min {
            return Err(ConfigError::HeightBandsOverlap {
                floor_max: self.classifier.floor_height_max,
                ceiling_min: self.classifier.ceiling_height_min,
            });
        }

        Ok(())
    }
}
