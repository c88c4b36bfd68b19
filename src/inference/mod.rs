// src/inference/mod.rs
//! Classifier boundary
//!
//! Both models are opaque functions over a scaled `(1, max_seq_length, 5)`
//! tensor. Implementations must be safe to call from several threads at once;
//! the evaluator runs the two models concurrently for every request.

pub mod vocabulary;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use vocabulary::{argmax, Vocabulary};
#[cfg(feature = "onnx")]
pub use onnx::{OnnxCharacterClassifier, OnnxModel, OnnxQualityClassifier};

use crate::error::EvalResult;
use crate::processing::ModelInput;

/// Character identity model
pub trait CharacterClassifier: Send + Sync {
    /// Class probabilities in vocabulary order
    fn predict(&self, input: &ModelInput) -> EvalResult<Vec<f32>>;
}

/// Stroke quality model
pub trait QualityClassifier: Send + Sync {
    /// Normalized quality score, nominally in `[0, 1]`
    fn predict(&self, input: &ModelInput) -> EvalResult<f32>;
}
