// tests/evaluation_scenarios.rs
//! End-to-end evaluation scenarios with substitute classifiers

use std::f64::consts::PI;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stroke_eval::config::{CharacterConfig, PreprocessingConfig};
use stroke_eval::error::{EvalError, EvalResult, InputRejection, ModelKind};
use stroke_eval::evaluation::{AssetBundle, EvaluationContext, Evaluator};
use stroke_eval::inference::{CharacterClassifier, QualityClassifier, Vocabulary};
use stroke_eval::processing::{FeatureScaler, ModelInput};
use stroke_eval::stroke::{Sample, Stroke};

/// Always predicts one label with full confidence
struct FixedCharacter {
    label: String,
    calls: AtomicUsize,
}

impl FixedCharacter {
    fn new(label: &str) -> Arc<Self> {
        Arc::new(Self { label: label.to_string(), calls: AtomicUsize::new(0) })
    }
}

impl CharacterClassifier for FixedCharacter {
    fn predict(&self, input: &ModelInput) -> EvalResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(input.dim(), (1, 150, 5));

        let vocab = Vocabulary::default();
        let mut distribution = vec![0.0f32; vocab.len()];
        let index = vocab
            .labels()
            .iter()
            .position(|l| l == &self.label)
            .expect("label in vocabulary");
        distribution[index] = 1.0;
        Ok(distribution)
    }
}

struct FixedQuality {
    score: f32,
    calls: AtomicUsize,
}

impl FixedQuality {
    fn new(score: f32) -> Arc<Self> {
        Arc::new(Self { score, calls: AtomicUsize::new(0) })
    }
}

impl QualityClassifier for FixedQuality {
    fn predict(&self, input: &ModelInput) -> EvalResult<f32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(input.dim(), (1, 150, 5));
        Ok(self.score)
    }
}

struct FailingQuality;

impl QualityClassifier for FailingQuality {
    fn predict(&self, _input: &ModelInput) -> EvalResult<f32> {
        Err(EvalError::classifier(ModelKind::Quality, "model unavailable"))
    }
}

fn character_table() -> CharacterConfig {
    CharacterConfig::from_json_str(
        r#"{
            "G":  { "symbol": "ග", "strokes": 1 },
            "K":  { "symbol": "ක්", "strokes": 2 },
            "Ka": { "symbol": "ක", "strokes": 2 },
            "Aa": { "symbol": "ආ", "strokes": 2 }
        }"#,
    )
    .unwrap()
}

fn evaluator(
    character: Arc<dyn CharacterClassifier>,
    quality: Arc<dyn QualityClassifier>,
) -> Evaluator {
    let assets = AssetBundle {
        character_scaler: FeatureScaler::identity(),
        quality_scaler: FeatureScaler::identity(),
        character_config: character_table(),
        vocabulary: Vocabulary::default(),
    };
    let context = EvaluationContext::new(PreprocessingConfig::default(), assets, character, quality);
    Evaluator::new(Arc::new(context)).unwrap()
}

/// Closed circle split into two strokes, 200 points in total
fn closed_loop_two_strokes() -> Sample {
    let positions: Vec<(f64, f64)> = (0..=199)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / 199.0;
            (300.0 + 150.0 * angle.cos(), 300.0 + 150.0 * angle.sin())
        })
        .collect();

    Sample::new(vec![
        Stroke::from_positions(&positions[..120]),
        Stroke::from_positions(&positions[120..]),
    ])
}

#[test]
fn test_three_point_stroke_is_invalid_input() {
    let character = FixedCharacter::new("A");
    let quality = FixedQuality::new(0.9);
    let evaluator = evaluator(character.clone(), quality.clone());

    let sample = Sample::new(vec![Stroke::from_positions(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])]);
    let err = evaluator.evaluate(&sample, "A").unwrap_err();

    assert_eq!(
        err.rejection(),
        Some(&InputRejection::InsufficientData { points: 3, required: 5 })
    );
    assert_eq!(character.calls.load(Ordering::SeqCst), 0);
    assert_eq!(quality.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_correct_letter_with_stroke_mismatch() {
    let character = FixedCharacter::new("G");
    let quality = FixedQuality::new(0.82);
    let evaluator = evaluator(character.clone(), quality.clone());

    let sample = closed_loop_two_strokes();
    assert_eq!(sample.point_count(), 200);

    let result = evaluator.evaluate(&sample, "G").unwrap();
    assert!(result.is_correct_letter);
    assert_eq!(result.identified_label, "G");
    assert_eq!(result.identified_symbol, "ග");
    assert!((result.quality_percentage - 82.0).abs() < 1e-9);
    assert!(result.is_quality_pass);
    assert_eq!(result.actual_stroke_count, 2);
    assert_eq!(result.expected_stroke_count, 1);
    assert!(!result.stroke_count_matches());

    assert_eq!(character.calls.load(Ordering::SeqCst), 1);
    assert_eq!(quality.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_wrong_letter_reports_identified_symbol() {
    let evaluator = evaluator(FixedCharacter::new("K"), FixedQuality::new(0.4));

    let result = evaluator.evaluate(&closed_loop_two_strokes(), "Ka").unwrap();
    assert!(!result.is_correct_letter);
    assert_eq!(result.identified_label, "K");
    assert_eq!(result.identified_symbol, "ක්");
    assert_eq!(result.expected_stroke_count, 2);
    assert!(!result.is_quality_pass);
    assert_eq!(result.star_rating(), 2);
}

#[test]
fn test_single_dot_is_invalid_input() {
    let character = FixedCharacter::new("A");
    let evaluator = evaluator(character.clone(), FixedQuality::new(0.9));

    let sample = Sample::new(vec![
        Stroke::from_positions(&[(50.0, 50.0); 4]),
        Stroke::from_positions(&[(50.0, 50.0); 4]),
    ]);
    let err = evaluator.evaluate(&sample, "A").unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err.rejection(), Some(&InputRejection::DegenerateGeometry { points: 8 }));
    assert_eq!(character.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_classifier_failure_fails_request() {
    let evaluator = evaluator(FixedCharacter::new("G"), Arc::new(FailingQuality));

    match evaluator.evaluate(&closed_loop_two_strokes(), "G") {
        Err(EvalError::Classifier { model, reason }) => {
            assert_eq!(model, ModelKind::Quality);
            assert!(reason.contains("unavailable"));
        }
        other => panic!("Expected classifier failure, got {:?}", other),
    }
}

#[test]
fn test_unknown_expected_character_uses_defaults() {
    let evaluator = evaluator(FixedCharacter::new("Th"), FixedQuality::new(0.5));

    let result = evaluator.evaluate(&closed_loop_two_strokes(), "NotALetter").unwrap();
    assert!(!result.is_correct_letter);
    assert_eq!(result.identified_symbol, "Th");
    assert_eq!(result.expected_stroke_count, 1);
    assert!(result.is_quality_pass);
}

#[test]
fn test_evaluate_json_payload() {
    let evaluator = evaluator(FixedCharacter::new("Aa"), FixedQuality::new(0.91));

    let points: Vec<String> = (0..30)
        .map(|i| format!(r#"{{ "x": {}, "y": 200, "dx": {}, "dy": 0, "p": 0 }}"#, 100 + i * 5, if i == 0 { 0 } else { 5 }))
        .collect();
    let payload = format!("[[{}]]", points.join(","));

    let result = evaluator.evaluate_json("Aa", &payload).unwrap();
    assert!(result.is_correct_letter);
    assert_eq!(result.identified_symbol, "ආ");
    assert_eq!(result.actual_stroke_count, 1);

    let response = serde_json::to_value(result.into_response()).unwrap();
    assert_eq!(response["analysis"]["quality_percentage"], 91.0);

    let err = evaluator.evaluate_json("Aa", "{ not strokes").unwrap_err();
    assert!(matches!(
        err.rejection(),
        Some(InputRejection::MalformedStrokes { .. })
    ));
}

#[test]
fn test_concurrent_requests_share_context() {
    let character = FixedCharacter::new("G");
    let quality = FixedQuality::new(0.75);
    let evaluator = evaluator(character.clone(), quality.clone());
    let sample = closed_loop_two_strokes();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let result = evaluator.evaluate(&sample, "G").unwrap();
                assert!(result.is_correct_letter);
            });
        }
    });

    assert_eq!(character.calls.load(Ordering::SeqCst), 8);
    assert_eq!(quality.calls.load(Ordering::SeqCst), 8);
}
