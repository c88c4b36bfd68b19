// src/config/processing_config.rs
//! Stroke preprocessing configuration

use serde::{Deserialize, Serialize};

use super::defaults;

/// Resampling parameters shared by the evaluation engine and collection tooling
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PreprocessingConfig {
    /// Number of rows in every processed sample
    #[serde(default = "defaults::max_seq_length")]
    pub max_seq_length: usize,

    /// Canvas side length used to normalize positions into `[0, 1]`
    #[serde(default = "defaults::canvas_size")]
    pub canvas_size: f64,

    /// Fewest flattened points accepted
    #[serde(default = "defaults::min_points")]
    pub min_points: usize,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            max_seq_length: defaults::max_seq_length(),
            canvas_size: defaults::canvas_size(),
            min_points: defaults::min_points(),
        }
    }
}

impl PreprocessingConfig {
    /// Length of the flattened feature vector fed to a scaler
    pub fn flat_feature_count(&self) -> usize {
        self.max_seq_length * super::constants::preprocessing::FEATURE_CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_config_serialization() {
        let config = PreprocessingConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: PreprocessingConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: PreprocessingConfig = toml::from_str("canvas_size = 800.0").unwrap();
        assert_eq!(config.canvas_size, 800.0);
        assert_eq!(config.max_seq_length, 150);
        assert_eq!(config.flat_feature_count(), 750);
    }
}
