// src/processing/mod.rs
//! Stroke preprocessing: arc-length resampling and feature scaling

pub mod interpolation;
pub mod resampler;
pub mod scaler;
pub mod batch;

pub use resampler::{ProcessedSample, Resampler};
pub use scaler::{FeatureScaler, ModelInput, ScalerLayout, ScalerParams};
pub use batch::{preprocess_records, PreprocessedRecord};
