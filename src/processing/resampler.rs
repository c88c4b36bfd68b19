// src/processing/resampler.rs
//! Arc-length resampling of multi-stroke samples into fixed-length sequences
//!
//! Every consumer of stroke features (live evaluation and dataset
//! preprocessing alike) goes through [`Resampler::resample`], so the same
//! strokes always yield the same matrix.
//!
//! The sample is flattened into one path, parameterized by cumulative
//! distance along `(x, y)`, and each of the five channels is linearly
//! interpolated at `max_seq_length` evenly spaced distances. Positions are
//! then divided by the canvas size, deltas are left in pixels, and pen state is
//! rounded back to an integer flag.

use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::debug;

use super::interpolation::{cumulative_arc_length, interp, linspace};
use crate::config::constants::preprocessing::{
    CHANNEL_DX, CHANNEL_DY, CHANNEL_PEN, CHANNEL_X, CHANNEL_Y, FEATURE_CHANNELS, MIN_POINTS_FLOOR,
    MIN_SEQ_LENGTH,
};
use crate::config::PreprocessingConfig;
use crate::error::{EvalError, EvalResult, InputRejection};
use crate::stroke::{Point, Sample};

/// Fixed-length `(max_seq_length, 5)` feature matrix with rows
/// `[nx, ny, ndx, ndy, pen_state]`
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSample {
    features: Array2<f64>,
}

impl ProcessedSample {
    pub fn seq_len(&self) -> usize {
        self.features.nrows()
    }

    /// `(rows, channels)`
    pub fn shape(&self) -> (usize, usize) {
        self.features.dim()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    pub fn channel(&self, channel: usize) -> ArrayView1<'_, f64> {
        self.features.column(channel)
    }

    /// Row-major flattening: time step major, channel minor
    pub fn flattened(&self) -> Vec<f64> {
        self.features.iter().copied().collect()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.features
    }
}

/// Stateless resampler; cheap to clone and share
#[derive(Debug, Clone)]
pub struct Resampler {
    config: PreprocessingConfig,
}

impl Resampler {
    pub fn new(config: PreprocessingConfig) -> EvalResult<Self> {
        if config.max_seq_length < MIN_SEQ_LENGTH {
            return Err(EvalError::configuration(
                "resampler",
                format!("max_seq_length must be at least {}", MIN_SEQ_LENGTH),
            ));
        }
        if !config.canvas_size.is_finite() || config.canvas_size <= 0.0 {
            return Err(EvalError::configuration("resampler", "canvas_size must be positive"));
        }
        if config.min_points < MIN_POINTS_FLOOR {
            return Err(EvalError::configuration(
                "resampler",
                format!("min_points must be at least {}", MIN_POINTS_FLOOR),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &PreprocessingConfig {
        &self.config
    }

    /// Resample a sample into a `(max_seq_length, 5)` matrix.
    ///
    /// Fails with [`InputRejection::InsufficientData`] below `min_points`
    /// total points and with [`InputRejection::DegenerateGeometry`] when the
    /// path has no usable length.
    pub fn resample(&self, sample: &Sample) -> EvalResult<ProcessedSample> {
        let points: Vec<&Point> = sample.flattened_points().collect();
        self.resample_points(&points)
    }

    /// Resample an already flattened point sequence
    pub fn resample_points(&self, points: &[&Point]) -> EvalResult<ProcessedSample> {
        if points.len() < self.config.min_points {
            return Err(InputRejection::InsufficientData {
                points: points.len(),
                required: self.config.min_points,
            }
            .into());
        }

        let cum_dist = cumulative_arc_length(points);
        let total = cum_dist[cum_dist.len() - 1];

        // a NaN coordinate poisons the whole axis, same as a zero-length path
        if total == 0.0 || !total.is_finite() {
            return Err(InputRejection::DegenerateGeometry { points: points.len() }.into());
        }

        let seq_len = self.config.max_seq_length;
        let targets = linspace(0.0, total, seq_len);
        let mut features = Array2::<f64>::zeros((seq_len, FEATURE_CHANNELS));

        for channel in 0..FEATURE_CHANNELS {
            let values: Vec<f64> = points.iter().map(|p| p.channels()[channel]).collect();
            let resampled = interp(&targets, &cum_dist, &values);

            for (row, value) in resampled.into_iter().enumerate() {
                features[[row, channel]] = self.finish_channel(channel, value);
            }
        }

        debug!(
            points = points.len(),
            arc_length = total,
            seq_len,
            "resampled stroke sample"
        );

        Ok(ProcessedSample { features })
    }

    fn finish_channel(&self, channel: usize, value: f64) -> f64 {
        match channel {
            CHANNEL_X | CHANNEL_Y => value / self.config.canvas_size,
            CHANNEL_DX | CHANNEL_DY => value,
            CHANNEL_PEN => value.round_ties_even(),
            _ => unreachable!("feature channel out of range"),
        }
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self { config: PreprocessingConfig::default() }
    }
}
