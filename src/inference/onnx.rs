// src/inference/onnx.rs
//! ONNX Runtime backed classifiers

use std::path::{Path, PathBuf};

use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;
use tracing::{debug, info};

use super::{CharacterClassifier, QualityClassifier};
use crate::error::{EvalError, EvalResult, IntoEvalError, ModelKind};
use crate::processing::ModelInput;

/// A loaded model session. Running a session needs exclusive access, so calls
/// on one model are serialized; the two models still run in parallel.
pub struct OnnxModel {
    session: Mutex<Session>,
    kind: ModelKind,
    path: PathBuf,
}

impl OnnxModel {
    pub fn load<P: AsRef<Path>>(path: P, kind: ModelKind) -> EvalResult<Self> {
        let path = path.as_ref();
        let builder = Session::builder().asset_err(path)?;
        let builder = builder
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .asset_err(path)?;
        let session = builder.commit_from_file(path).asset_err(path)?;

        info!(path = %path.display(), model = %kind, "loaded onnx model");
        Ok(Self {
            session: Mutex::new(session),
            kind,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the model on one input and return its first output, flattened
    pub fn run(&self, input: &ModelInput) -> EvalResult<Vec<f32>> {
        let (batch, seq_len, channels) = input.dim();
        let data: Vec<f32> = input.iter().copied().collect();
        let tensor = Tensor::from_array(([batch, seq_len, channels], data)).classifier_err(self.kind)?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![tensor]).classifier_err(self.kind)?;
        if outputs.len() == 0 {
            return Err(EvalError::classifier(self.kind, "model produced no outputs"));
        }

        let (shape, values) = outputs[0].try_extract_tensor::<f32>().classifier_err(self.kind)?;
        debug!(model = %self.kind, shape = ?shape, "onnx inference complete");
        Ok(values.to_vec())
    }
}

pub struct OnnxCharacterClassifier {
    model: OnnxModel,
}

impl OnnxCharacterClassifier {
    pub fn load<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        Ok(Self { model: OnnxModel::load(path, ModelKind::Character)? })
    }
}

impl CharacterClassifier for OnnxCharacterClassifier {
    fn predict(&self, input: &ModelInput) -> EvalResult<Vec<f32>> {
        self.model.run(input)
    }
}

pub struct OnnxQualityClassifier {
    model: OnnxModel,
}

impl OnnxQualityClassifier {
    pub fn load<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        Ok(Self { model: OnnxModel::load(path, ModelKind::Quality)? })
    }
}

impl QualityClassifier for OnnxQualityClassifier {
    fn predict(&self, input: &ModelInput) -> EvalResult<f32> {
        let output = self.model.run(input)?;
        output
            .first()
            .copied()
            .ok_or_else(|| EvalError::classifier(ModelKind::Quality, "empty output tensor"))
    }
}
