// src/stroke/mod.rs
//! Stroke model: raw pen input, capture recorder and saved dataset records

pub mod types;
pub mod recorder;
pub mod dataset;

pub use types::*;
pub use recorder::StrokeRecorder;
pub use dataset::{load_dataset_dir, SampleRecord};
