// src/evaluation/context.rs
//! Immutable process-wide assets the evaluator is built from

use std::sync::Arc;

use tracing::info;

use crate::config::{CharacterConfig, EngineConfig, PreprocessingConfig};
use crate::error::EvalResult;
use crate::inference::{CharacterClassifier, QualityClassifier, Vocabulary};
use crate::processing::FeatureScaler;

/// Scalers, lookup tables and vocabulary read from disk
#[derive(Debug, Clone)]
pub struct AssetBundle {
    pub character_scaler: FeatureScaler,
    pub quality_scaler: FeatureScaler,
    pub character_config: CharacterConfig,
    pub vocabulary: Vocabulary,
}

impl AssetBundle {
    /// Load every non-model asset named by the configuration
    pub fn load(config: &EngineConfig) -> EvalResult<Self> {
        let seq_len = config.preprocessing.max_seq_length;
        let assets = &config.assets;

        let vocabulary = match &assets.vocabulary {
            Some(path) => Vocabulary::load(path)?,
            None => Vocabulary::default(),
        };

        Ok(Self {
            character_scaler: FeatureScaler::load(&assets.character_scaler, seq_len)?,
            quality_scaler: FeatureScaler::load(&assets.quality_scaler, seq_len)?,
            character_config: CharacterConfig::load(&assets.character_config)?,
            vocabulary,
        })
    }
}

/// Everything an evaluation needs besides the request itself.
///
/// Built once, never mutated, and shared between requests behind an `Arc`.
#[derive(Clone)]
pub struct EvaluationContext {
    pub preprocessing: PreprocessingConfig,
    pub character_scaler: FeatureScaler,
    pub quality_scaler: FeatureScaler,
    pub character_classifier: Arc<dyn CharacterClassifier>,
    pub quality_classifier: Arc<dyn QualityClassifier>,
    pub vocabulary: Vocabulary,
    pub character_config: CharacterConfig,
}

impl EvaluationContext {
    pub fn new(
        preprocessing: PreprocessingConfig,
        assets: AssetBundle,
        character_classifier: Arc<dyn CharacterClassifier>,
        quality_classifier: Arc<dyn QualityClassifier>,
    ) -> Self {
        Self {
            preprocessing,
            character_scaler: assets.character_scaler,
            quality_scaler: assets.quality_scaler,
            character_classifier,
            quality_classifier,
            vocabulary: assets.vocabulary,
            character_config: assets.character_config,
        }
    }

    /// Load scalers, tables and both ONNX models named by the configuration
    #[cfg(feature = "onnx")]
    pub fn from_config(config: &EngineConfig) -> EvalResult<Self> {
        use crate::inference::{OnnxCharacterClassifier, OnnxQualityClassifier};

        let assets = AssetBundle::load(config)?;
        let character = OnnxCharacterClassifier::load(&config.assets.character_model)?;
        let quality = OnnxQualityClassifier::load(&config.assets.quality_model)?;

        info!(summary = ?config.get_summary(), "evaluation context ready");
        Ok(Self::new(
            config.preprocessing.clone(),
            assets,
            Arc::new(character),
            Arc::new(quality),
        ))
    }

    /// Build a context around caller-supplied classifiers, loading the rest
    /// of the assets from the configuration
    pub fn with_classifiers(
        config: &EngineConfig,
        character_classifier: Arc<dyn CharacterClassifier>,
        quality_classifier: Arc<dyn QualityClassifier>,
    ) -> EvalResult<Self> {
        let assets = AssetBundle::load(config)?;
        info!(summary = ?config.get_summary(), "evaluation context ready");
        Ok(Self::new(
            config.preprocessing.clone(),
            assets,
            character_classifier,
            quality_classifier,
        ))
    }
}

impl std::fmt::Debug for EvaluationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("preprocessing", &self.preprocessing)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("characters", &self.character_config.len())
            .finish_non_exhaustive()
    }
}
