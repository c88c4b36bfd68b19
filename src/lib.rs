//! Stroke-Eval: preprocessing and evaluation pipeline for handwritten
//! character practice
//!
//! A drawn character arrives as pen strokes. This crate:
//!
//! - Resamples the strokes by arc length into a fixed `(150, 5)` feature matrix
//! - Applies the z-score scaling each classifier was trained with
//! - Runs a character classifier and a stroke-quality classifier
//! - Reports letter correctness, quality and stroke counts
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stroke_eval::config::ConfigLoader;
//! use stroke_eval::evaluation::{EvaluationContext, Evaluator};
//! use stroke_eval::stroke::StrokeRecorder;
//!
//! # #[cfg(feature = "onnx")]
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load_engine_config()?;
//!     let context = Arc::new(EvaluationContext::from_config(&config)?);
//!     let evaluator = Evaluator::new(context)?;
//!
//!     let mut recorder = StrokeRecorder::new();
//!     recorder.begin_stroke(120.0, 300.0);
//!     for step in 1..40 {
//!         recorder.extend_stroke(120.0 + step as f64 * 8.0, 300.0);
//!     }
//!     recorder.end_stroke();
//!
//!     let result = evaluator.evaluate(&recorder.finish(), "Aa")?;
//!     println!("{:?} ({} stars)", result, result.star_rating());
//!     Ok(())
//! }
//! # #[cfg(not(feature = "onnx"))]
//! # fn main() {}
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod error;
pub mod evaluation;
pub mod inference;
pub mod processing;
pub mod stroke;

// Re-export commonly used types for convenience
pub use error::{EvalError, EvalResult, InputRejection, ModelKind};
pub use evaluation::{EvaluationContext, EvaluationResult, Evaluator};
pub use processing::{FeatureScaler, ProcessedSample, Resampler};
pub use stroke::{Point, Sample, Stroke};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "stroke-eval");
    }
}
