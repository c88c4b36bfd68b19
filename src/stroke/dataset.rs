// src/stroke/dataset.rs
//! Read access to samples saved by the collection tooling
//!
//! Each record is one JSON file holding the label the contributor was asked
//! to draw and the raw strokes. Writing records is the collection tool's job;
//! this module only reads them so that training-side preprocessing goes
//! through the same resampler as live evaluation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::types::Sample;
use crate::config::constants::paths::DATASET_RECORD_EXTENSION;
use crate::error::{EvalResult, IntoEvalError};

/// One saved drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Rendered image name the record belongs to
    #[serde(default)]
    pub filename: Option<String>,
    pub label: String,
    /// Whether the image side of the record was processed
    #[serde(default)]
    pub processed: bool,
    /// Stroke count stored at save time; absent in early records
    #[serde(default)]
    pub stroke_count: Option<usize>,
    #[serde(default)]
    pub strokes: Sample,
}

impl SampleRecord {
    /// Stored stroke count, or the number of strokes when none was stored
    pub fn stroke_count(&self) -> usize {
        self.stroke_count.unwrap_or_else(|| self.strokes.stroke_count())
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> EvalResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).asset_err(path)?;
        Self::from_json_str(&content).asset_err(path)
    }
}

/// Load every `*.json` record in `dir`, newest file name first.
///
/// Unreadable records are logged and skipped; a missing or unreadable
/// directory is an error.
pub fn load_dataset_dir<P: AsRef<Path>>(dir: P) -> EvalResult<Vec<(PathBuf, SampleRecord)>> {
    let dir = dir.as_ref();
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .asset_err(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(DATASET_RECORD_EXTENSION)
        })
        .collect();

    files.sort();
    files.reverse();

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        match SampleRecord::load(&path) {
            Ok(record) => records.push((path, record)),
            Err(err) => warn!(path = %path.display(), error = %err, "skipping unreadable dataset record"),
        }
    }

    debug!(dir = %dir.display(), records = records.len(), "loaded dataset records");
    Ok(records)
}
