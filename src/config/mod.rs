// src/config/mod.rs
//! Engine configuration: preprocessing settings, asset locations and the
//! character table

pub mod constants;
pub mod loader;
pub mod asset_config;
pub mod processing_config;
pub mod character_config;

pub use constants::*;
pub use loader::{ConfigLoader, ConfigError};
pub use asset_config::AssetPaths;
pub use processing_config::PreprocessingConfig;
pub use character_config::{CharacterConfig, CharacterMeta};

use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub preprocessing: PreprocessingConfig,
    #[serde(default)]
    pub assets: AssetPaths,
}

/// Default value providers using constants
mod defaults {
    use std::path::PathBuf;
    use crate::config::constants::*;

    pub fn max_seq_length() -> usize { preprocessing::DEFAULT_MAX_SEQ_LENGTH }
    pub fn canvas_size() -> f64 { preprocessing::DEFAULT_CANVAS_SIZE }
    pub fn min_points() -> usize { preprocessing::DEFAULT_MIN_POINTS }

    pub fn character_model() -> PathBuf { PathBuf::from(paths::CHARACTER_MODEL) }
    pub fn quality_model() -> PathBuf { PathBuf::from(paths::QUALITY_MODEL) }
    pub fn character_scaler() -> PathBuf { PathBuf::from(paths::CHARACTER_SCALER) }
    pub fn quality_scaler() -> PathBuf { PathBuf::from(paths::QUALITY_SCALER) }
    pub fn character_config() -> PathBuf { PathBuf::from(paths::CHARACTER_CONFIG) }
}

impl EngineConfig {
    /// Validate configuration consistency
    pub fn validate_consistency(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let pre = &self.preprocessing;

        if pre.max_seq_length < preprocessing::MIN_SEQ_LENGTH {
            errors.push(format!(
                "max_seq_length must be at least {}, got {}",
                preprocessing::MIN_SEQ_LENGTH, pre.max_seq_length
            ));
        }

        if !pre.canvas_size.is_finite() || pre.canvas_size <= 0.0 {
            errors.push(format!("canvas_size must be a positive number, got {}", pre.canvas_size));
        }

        if pre.min_points < preprocessing::MIN_POINTS_FLOOR {
            errors.push(format!(
                "min_points must be at least {}, got {}",
                preprocessing::MIN_POINTS_FLOOR, pre.min_points
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Get configuration summary
    pub fn get_summary(&self) -> ConfigSummary {
        ConfigSummary {
            max_seq_length: self.preprocessing.max_seq_length,
            canvas_size: self.preprocessing.canvas_size,
            flat_feature_count: self.preprocessing.flat_feature_count(),
            custom_vocabulary: self.assets.vocabulary.is_some(),
        }
    }
}

/// Configuration summary for display/logging
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub max_seq_length: usize,
    pub canvas_size: f64,
    pub flat_feature_count: usize,
    pub custom_vocabulary: bool,
}
