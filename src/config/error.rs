//! Configuration error types.

use thiserror::Error;

/// A configuration value failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A threshold that must be positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Dotted config key, e.g. `merge.merge_distance`.
        field: &'static str,
        /// The offending value.
        value: f32,
    },

    /// The floor and ceiling height bands overlap.
    #[error("floor_height_max ({floor_max}) must be below ceiling_height_min ({ceiling_min})")]
    HeightBandsOverlap {
        /// Configured floor band upper edge.
        floor_max: f32,
        /// Configured ceiling band lower edge.
        ceiling_min: f32,
    },
}

/// Errors that can occur when loading configuration from YAML.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// IO error reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation failed.
    #[error("config validation error: {0}")]
    Validation(#[from] ConfigError),
}
