// src/processing/scaler.rs
//! Pre-fit z-score scaling applied in front of each classifier

use std::path::Path;

use ndarray::Array3;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::resampler::ProcessedSample;
use crate::config::constants::preprocessing::FEATURE_CHANNELS;
use crate::error::{EvalError, EvalResult, IntoEvalError};

/// Scaled `(1, max_seq_length, 5)` single-sample batch, as models consume it
pub type ModelInput = Array3<f32>;

/// Exported parameters of a fitted standard scaler.
///
/// A missing `mean` means the scaler was fit without centering; a missing
/// `scale` means it was fit without variance scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

/// How scaler parameters line up with the flattened feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalerLayout {
    /// One `(mean, scale)` pair per channel, shared by every time step
    PerChannel,
    /// One pair per flattened feature, `max_seq_length * 5` in total
    PerFeature,
}

/// Immutable per-feature affine transform `(value - mean) / scale`
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
    layout: ScalerLayout,
}

impl FeatureScaler {
    /// Build a scaler for sequences of `seq_len` rows
    pub fn from_params(params: ScalerParams, seq_len: usize) -> EvalResult<Self> {
        let len = match (&params.mean, &params.scale) {
            (Some(mean), Some(scale)) if mean.len() != scale.len() => {
                return Err(EvalError::configuration(
                    "feature_scaler",
                    format!("mean has {} entries but scale has {}", mean.len(), scale.len()),
                ));
            }
            (Some(values), _) | (None, Some(values)) => values.len(),
            (None, None) => FEATURE_CHANNELS,
        };

        let layout = if len == FEATURE_CHANNELS {
            ScalerLayout::PerChannel
        } else if len == seq_len * FEATURE_CHANNELS {
            ScalerLayout::PerFeature
        } else {
            return Err(EvalError::configuration(
                "feature_scaler",
                format!(
                    "expected {} or {} parameters, got {}",
                    FEATURE_CHANNELS,
                    seq_len * FEATURE_CHANNELS,
                    len
                ),
            ));
        };

        let mean = params.mean.unwrap_or_else(|| vec![0.0; len]);
        let scale = params.scale.unwrap_or_else(|| vec![1.0; len]);

        if mean.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err(EvalError::configuration("feature_scaler", "parameters must be finite"));
        }
        if let Some(idx) = scale.iter().position(|&s| s == 0.0) {
            return Err(EvalError::configuration(
                "feature_scaler",
                format!("scale entry {} is zero", idx),
            ));
        }

        Ok(Self { mean, scale, layout })
    }

    pub fn load<P: AsRef<Path>>(path: P, seq_len: usize) -> EvalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).asset_err(path)?;
        let params: ScalerParams = serde_json::from_str(&content).asset_err(path)?;
        let scaler = Self::from_params(params, seq_len)
            .map_err(|e| EvalError::asset(path, e.to_string()))?;
        info!(path = %path.display(), layout = ?scaler.layout, "loaded feature scaler");
        Ok(scaler)
    }

    /// Pass-through scaler (mean 0, scale 1)
    pub fn identity() -> Self {
        Self {
            mean: vec![0.0; FEATURE_CHANNELS],
            scale: vec![1.0; FEATURE_CHANNELS],
            layout: ScalerLayout::PerChannel,
        }
    }

    pub fn layout(&self) -> ScalerLayout {
        self.layout
    }

    /// Scale the flattened sample and reshape it to `(1, seq_len, 5)`
    pub fn transform(&self, sample: &ProcessedSample) -> EvalResult<ModelInput> {
        let seq_len = sample.seq_len();
        if self.layout == ScalerLayout::PerFeature && self.mean.len() != seq_len * FEATURE_CHANNELS {
            return Err(EvalError::configuration(
                "feature_scaler",
                format!(
                    "scaler fit for {} features, sample has {}",
                    self.mean.len(),
                    seq_len * FEATURE_CHANNELS
                ),
            ));
        }

        let scaled: Vec<f32> = sample
            .flattened()
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                let p = match self.layout {
                    ScalerLayout::PerChannel => idx % FEATURE_CHANNELS,
                    ScalerLayout::PerFeature => idx,
                };
                ((value - self.mean[p]) / self.scale[p]) as f32
            })
            .collect();

        Array3::from_shape_vec((1, seq_len, FEATURE_CHANNELS), scaled).map_err(|e| {
            EvalError::configuration("feature_scaler", format!("reshape failed: {}", e))
        })
    }
}
