// src/processing/batch.rs
//! Parallel preprocessing of saved dataset records

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{info, warn};

use super::resampler::{ProcessedSample, Resampler};
use crate::error::EvalResult;
use crate::stroke::SampleRecord;

/// Outcome of preprocessing one record
#[derive(Debug, Clone)]
pub struct PreprocessedRecord {
    pub path: PathBuf,
    pub label: String,
    pub stroke_count: usize,
    pub features: EvalResult<ProcessedSample>,
}

/// Resample every record in parallel, preserving input order.
///
/// A record that fails to resample is kept with its error so the caller can
/// decide whether to drop it.
pub fn preprocess_records(
    resampler: &Resampler,
    records: &[(PathBuf, SampleRecord)],
) -> Vec<PreprocessedRecord> {
    let results: Vec<PreprocessedRecord> = records
        .par_iter()
        .map(|(path, record)| PreprocessedRecord {
            path: path.clone(),
            label: record.label.clone(),
            stroke_count: record.stroke_count(),
            features: resampler.resample(&record.strokes),
        })
        .collect();

    let mut rejected = 0usize;
    for record in &results {
        if let Err(err) = &record.features {
            rejected += 1;
            warn!(path = %record.path.display(), label = %record.label, error = %err, "record rejected by resampler");
        }
    }
    info!(total = results.len(), rejected, "preprocessed dataset records");

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{Sample, Stroke};

    fn record(label: &str, n: usize) -> (PathBuf, SampleRecord) {
        let positions: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, i as f64 * 2.0)).collect();
        (
            PathBuf::from(format!("{}_{}.json", label, n)),
            SampleRecord {
                filename: None,
                label: label.to_string(),
                processed: false,
                stroke_count: None,
                strokes: Sample::new(vec![Stroke::from_positions(&positions)]),
            },
        )
    }

    #[test]
    fn test_batch_matches_single_resampling() {
        let resampler = Resampler::default();
        let records = vec![record("A", 20), record("G", 3), record("Ka", 40)];

        let results = preprocess_records(&resampler, &records);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].label, "A");
        assert!(results[1].features.as_ref().unwrap_err().is_invalid_input());

        let direct = resampler.resample(&records[2].1.strokes).unwrap();
        assert_eq!(results[2].features.as_ref().unwrap(), &direct);
        assert_eq!(results[2].stroke_count, 1);
    }
}
