//! Unified configuration for room understanding.
//!
//! All thresholds live in one YAML-loadable [`GrihaConfig`], split into
//! sections by concern. Every value has a documented default; an empty
//! config file is valid.

mod classifier;
mod defaults;
mod error;
mod griha;
mod merge;
mod validation;

// Re-export main types
pub use error::{ConfigError, ConfigLoadError};
pub use griha::GrihaConfig;

// Re-export section types
pub use classifier::ClassifierSection;
pub use merge::MergeSection;
pub use validation::{CompletenessSection, ValidationSection};
