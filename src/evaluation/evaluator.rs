// src/evaluation/evaluator.rs
//! Request-level evaluation: resample, scale, classify, decide

use std::sync::Arc;

use tracing::debug;

use super::context::EvaluationContext;
use super::result::EvaluationResult;
use crate::config::constants::evaluation::{PERCENTAGE_DECIMALS, QUALITY_PASS_THRESHOLD};
use crate::config::CharacterConfig;
use crate::error::{EvalError, EvalResult, InputRejection, ModelKind};
use crate::processing::Resampler;
use crate::stroke::Sample;

/// Stateless per-request evaluator over a shared, immutable context
#[derive(Debug, Clone)]
pub struct Evaluator {
    context: Arc<EvaluationContext>,
    resampler: Resampler,
}

impl Evaluator {
    pub fn new(context: Arc<EvaluationContext>) -> EvalResult<Self> {
        let resampler = Resampler::new(context.preprocessing.clone())?;
        Ok(Self { context, resampler })
    }

    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    /// Evaluate one attempt at `expected_char`.
    ///
    /// A sample the resampler rejects fails with [`EvalError::InvalidInput`]
    /// before either classifier runs. A classifier failure fails the whole
    /// request; no partial result is produced.
    pub fn evaluate(&self, sample: &Sample, expected_char: &str) -> EvalResult<EvaluationResult> {
        let ctx = &*self.context;
        let processed = self.resampler.resample(sample)?;

        let character_input = ctx.character_scaler.transform(&processed)?;
        let quality_input = ctx.quality_scaler.transform(&processed)?;

        let (distribution, quality_score) = rayon::join(
            || ctx.character_classifier.predict(&character_input),
            || ctx.quality_classifier.predict(&quality_input),
        );
        let distribution = distribution?;
        let quality_score = quality_score?;

        if !quality_score.is_finite() {
            return Err(EvalError::classifier(
                ModelKind::Quality,
                format!("non-finite quality score {}", quality_score),
            ));
        }

        let (class_index, identified_label) = ctx.vocabulary.decode(&distribution)?;
        debug!(
            expected_char,
            identified_label,
            class_index,
            quality_score,
            strokes = sample.stroke_count(),
            "classified sample"
        );

        Ok(compose_result(
            identified_label,
            quality_score,
            sample.stroke_count(),
            expected_char,
            &ctx.character_config,
        ))
    }

    /// Evaluate a raw JSON stroke payload (array of strokes of point objects)
    pub fn evaluate_json(&self, expected_char: &str, strokes_json: &str) -> EvalResult<EvaluationResult> {
        let sample = Sample::from_json_str(strokes_json).map_err(|e| {
            EvalError::from(InputRejection::MalformedStrokes { reason: e.to_string() })
        })?;
        self.evaluate(&sample, expected_char)
    }
}

/// Combine classifier outputs and the character table into a result
pub fn compose_result(
    identified_label: &str,
    quality_score: f32,
    actual_stroke_count: usize,
    expected_char: &str,
    character_config: &CharacterConfig,
) -> EvaluationResult {
    let expected = character_config.expected_or_default(expected_char);

    EvaluationResult {
        is_correct_letter: identified_label == expected_char,
        identified_label: identified_label.to_string(),
        identified_symbol: character_config.symbol_for(identified_label),
        quality_percentage: quality_percentage(quality_score),
        is_quality_pass: quality_score >= QUALITY_PASS_THRESHOLD,
        actual_stroke_count,
        expected_stroke_count: expected.stroke_count,
    }
}

/// `score * 100` rounded to two decimals, halves to even
pub fn quality_percentage(score: f32) -> f64 {
    let factor = 10f64.powi(PERCENTAGE_DECIMALS);
    (score as f64 * 100.0 * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CharacterConfig {
        CharacterConfig::from_json_str(
            r#"{ "G": { "symbol": "ග", "strokes": 1 },
                 "K": { "symbol": "ක්", "strokes": 2 },
                 "Ka": { "symbol": "ක", "strokes": 2 } }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_quality_threshold_boundary() {
        let config = table();
        assert!(compose_result("G", 0.5, 1, "G", &config).is_quality_pass);
        assert!(!compose_result("G", 0.499999, 1, "G", &config).is_quality_pass);
    }

    #[test]
    fn test_quality_percentage_rounding() {
        assert_eq!(quality_percentage(0.82), 82.0);
        assert_eq!(quality_percentage(0.12345), 12.35);
        assert_eq!(quality_percentage(1.0), 100.0);
        assert_eq!(quality_percentage(0.0), 0.0);
    }

    #[test]
    fn test_quality_percentage_halves_round_to_even() {
        // exactly representable halves at the second decimal
        assert_eq!(quality_percentage(0.03125), 3.12);
        assert_eq!(quality_percentage(0.53125), 53.12);
        assert_eq!(quality_percentage(0.09375), 9.38);
    }

    #[test]
    fn test_wrong_letter_uses_identified_symbol() {
        let result = compose_result("K", 0.7, 2, "Ka", &table());
        assert!(!result.is_correct_letter);
        assert_eq!(result.identified_symbol, "ක්");
        assert_eq!(result.expected_stroke_count, 2);
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        let config = table();
        assert!(!compose_result("g", 0.9, 1, "G", &config).is_correct_letter);
        assert!(!compose_result("Kii ", 0.9, 1, "Kii", &config).is_correct_letter);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        let result = compose_result("Th", 0.6, 3, "Zz", &table());
        assert_eq!(result.identified_symbol, "Th");
        assert_eq!(result.expected_stroke_count, 1);
        assert_eq!(result.actual_stroke_count, 3);
    }
}
