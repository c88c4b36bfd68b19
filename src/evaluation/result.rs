// src/evaluation/result.rs
//! Evaluation verdict and its transport envelope

use serde::{Deserialize, Serialize};

use crate::config::constants::evaluation::{MAX_STARS, MIN_STARS, PERCENT_PER_STAR};

/// Independent signals describing one evaluated attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub is_correct_letter: bool,
    pub identified_label: String,
    pub identified_symbol: String,
    /// Quality score × 100, rounded to two decimals
    pub quality_percentage: f64,
    pub is_quality_pass: bool,
    pub actual_stroke_count: usize,
    pub expected_stroke_count: u32,
}

impl EvaluationResult {
    /// Stroke-count agreement; informational, never gates the other signals
    pub fn stroke_count_matches(&self) -> bool {
        self.actual_stroke_count == self.expected_stroke_count as usize
    }

    /// 1–5 stars, one per 20 percentage points, halves rounded to even
    pub fn star_rating(&self) -> u8 {
        let stars = (self.quality_percentage / PERCENT_PER_STAR).round_ties_even();
        stars.clamp(MIN_STARS as f64, MAX_STARS as f64) as u8
    }

    pub fn into_response(self) -> EvaluationResponse {
        EvaluationResponse::success(self)
    }
}

/// Wire form handed to the calling transport layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub status: String,
    pub analysis: Analysis,
}

/// Response body field names as existing clients read them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub is_correct_letter: bool,
    pub identified_letter_label: String,
    pub identified_letter_symbol: String,
    pub quality_percentage: f64,
    pub is_quality_pass: bool,
    pub strokes_actual: usize,
    pub strokes_expected: u32,
}

impl EvaluationResponse {
    pub fn success(result: EvaluationResult) -> Self {
        Self {
            status: "success".to_string(),
            analysis: Analysis {
                is_correct_letter: result.is_correct_letter,
                identified_letter_label: result.identified_label,
                identified_letter_symbol: result.identified_symbol,
                quality_percentage: result.quality_percentage,
                is_quality_pass: result.is_quality_pass,
                strokes_actual: result.actual_stroke_count,
                strokes_expected: result.expected_stroke_count,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(quality_percentage: f64) -> EvaluationResult {
        EvaluationResult {
            is_correct_letter: true,
            identified_label: "Aa".to_string(),
            identified_symbol: "ආ".to_string(),
            quality_percentage,
            is_quality_pass: quality_percentage >= 50.0,
            actual_stroke_count: 2,
            expected_stroke_count: 2,
        }
    }

    #[test]
    fn test_star_rating_bounds() {
        assert_eq!(result(0.0).star_rating(), 1);
        assert_eq!(result(9.0).star_rating(), 1);
        assert_eq!(result(82.0).star_rating(), 4);
        assert_eq!(result(95.0).star_rating(), 5);
        assert_eq!(result(100.0).star_rating(), 5);
    }

    #[test]
    fn test_star_rating_halves_round_to_even() {
        assert_eq!(result(50.0).star_rating(), 2);
        assert_eq!(result(70.0).star_rating(), 4);
    }

    #[test]
    fn test_response_field_names() {
        let json = serde_json::to_value(result(82.0).into_response()).unwrap();
        assert_eq!(json["status"], "success");
        let analysis = &json["analysis"];
        assert_eq!(analysis["identified_letter_label"], "Aa");
        assert_eq!(analysis["identified_letter_symbol"], "ආ");
        assert_eq!(analysis["strokes_actual"], 2);
        assert_eq!(analysis["strokes_expected"], 2);
        assert_eq!(analysis["quality_percentage"], 82.0);
    }

    #[test]
    fn test_stroke_count_match() {
        let mut r = result(60.0);
        assert!(r.stroke_count_matches());
        r.actual_stroke_count = 3;
        assert!(!r.stroke_count_matches());
    }
}
