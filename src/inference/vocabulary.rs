// src/inference/vocabulary.rs
//! Ordered class labels of the character classifier
//!
//! The order must match the class order the model was trained with; nothing
//! here can detect a reordering.

use std::path::Path;

use tracing::info;

use crate::config::constants::vocabulary::DEFAULT_LABELS;
use crate::error::{EvalError, EvalResult, IntoEvalError, ModelKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    pub fn new(labels: Vec<String>) -> EvalResult<Self> {
        if labels.is_empty() {
            return Err(EvalError::configuration("vocabulary", "label list is empty"));
        }
        Ok(Self { labels })
    }

    /// Load a JSON array of labels
    pub fn load<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).asset_err(path)?;
        let labels: Vec<String> = serde_json::from_str(&content).asset_err(path)?;
        let vocabulary = Self::new(labels).map_err(|e| EvalError::asset(path, e.to_string()))?;
        info!(path = %path.display(), classes = vocabulary.len(), "loaded character vocabulary");
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Map a class distribution to its arg-max label
    pub fn decode(&self, distribution: &[f32]) -> EvalResult<(usize, &str)> {
        if distribution.len() != self.labels.len() {
            return Err(EvalError::classifier(
                ModelKind::Character,
                format!(
                    "output has {} classes, vocabulary has {}",
                    distribution.len(),
                    self.labels.len()
                ),
            ));
        }

        let index = argmax(distribution)
            .ok_or_else(|| EvalError::classifier(ModelKind::Character, "output is empty or non-finite"))?;
        Ok((index, &self.labels[index]))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Index of the first maximum; `None` for empty or non-finite input
pub fn argmax(values: &[f32]) -> Option<usize> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = idx;
        }
    }
    Some(best)
}
