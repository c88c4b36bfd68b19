// src/error.rs
//! Unified error handling for the evaluation pipeline
//!
//! Every failure the pipeline can surface to a caller is a variant of
//! [`EvalError`]. Preprocessing rejections share one variant so that a
//! transport layer can map them to a single "invalid input" response while
//! still being able to tell them apart for diagnostics.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for the evaluation pipeline
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// The sample could not be resampled; no classifier was invoked
    #[error("[INPUT] Invalid input: {rejection}")]
    InvalidInput { rejection: InputRejection },

    /// A classifier produced no usable output
    #[error("[CLASSIFIER] {model} classifier failed: {reason}")]
    Classifier { model: ModelKind, reason: String },

    /// A static asset could not be read or parsed
    #[error("[ASSET] Failed to load {path}: {reason}")]
    Asset { path: String, reason: String },

    /// Invalid or inconsistent settings
    #[error("[CONFIG] Configuration error in {component}: {reason}")]
    Configuration { component: String, reason: String },
}

/// Why the resampler refused a sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputRejection {
    /// Too few points across all strokes (includes the empty sample)
    InsufficientData { points: usize, required: usize },
    /// Points exist but the path has zero total arc length
    DegenerateGeometry { points: usize },
    /// The stroke payload could not be parsed
    MalformedStrokes { reason: String },
}

/// Which of the two classifiers an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Character,
    Quality,
}

impl fmt::Display for InputRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRejection::InsufficientData { points, required } => {
                write!(f, "insufficient stroke data ({} points, need at least {})", points, required)
            }
            InputRejection::DegenerateGeometry { points } => {
                write!(f, "degenerate stroke geometry ({} points with zero arc length)", points)
            }
            InputRejection::MalformedStrokes { reason } => {
                write!(f, "malformed stroke data: {}", reason)
            }
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Character => write!(f, "CHARACTER"),
            ModelKind::Quality => write!(f, "QUALITY"),
        }
    }
}

impl EvalError {
    pub fn classifier(model: ModelKind, reason: impl Into<String>) -> Self {
        EvalError::Classifier { model, reason: reason.into() }
    }

    pub fn asset(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        EvalError::Asset {
            path: path.as_ref().display().to_string(),
            reason: reason.into(),
        }
    }

    pub fn configuration(component: &str, reason: impl Into<String>) -> Self {
        EvalError::Configuration {
            component: component.to_string(),
            reason: reason.into(),
        }
    }

    /// True for both preprocessing rejections
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EvalError::InvalidInput { .. })
    }

    pub fn rejection(&self) -> Option<&InputRejection> {
        match self {
            EvalError::InvalidInput { rejection } => Some(rejection),
            _ => None,
        }
    }
}

impl From<InputRejection> for EvalError {
    fn from(rejection: InputRejection) -> Self {
        EvalError::InvalidInput { rejection }
    }
}

impl From<ConfigError> for EvalError {
    fn from(err: ConfigError) -> Self {
        EvalError::configuration("config_loader", err.to_string())
    }
}

/// Result type alias for pipeline operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Convenience trait for mapping foreign errors into [`EvalError`]
pub trait IntoEvalError<T> {
    fn asset_err(self, path: &Path) -> EvalResult<T>;
    fn classifier_err(self, model: ModelKind) -> EvalResult<T>;
}

impl<T, E> IntoEvalError<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn asset_err(self, path: &Path) -> EvalResult<T> {
        self.map_err(|err| EvalError::asset(path, err.to_string()))
    }

    fn classifier_err(self, model: ModelKind) -> EvalResult<T> {
        self.map_err(|err| EvalError::classifier(model, err.to_string()))
    }
}
