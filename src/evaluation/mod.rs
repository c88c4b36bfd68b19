// src/evaluation/mod.rs
//! Evaluation engine: turns a drawn sample and an expected character into a
//! verdict

pub mod context;
pub mod evaluator;
pub mod result;

pub use context::{AssetBundle, EvaluationContext};
pub use evaluator::{compose_result, quality_percentage, Evaluator};
pub use result::{Analysis, EvaluationResponse, EvaluationResult};
