//! End-to-end pipeline tests: batch file → engine → saved report → comparison.

use std::path::Path;
use std::sync::Arc;

use studywise_core::engine::{AnalysisEngine, NoopReporter};
use studywise_core::estimator::{FixedEstimator, UniformEstimator};
use studywise_core::model::{DifficultyTier, PersonalDifficulty};
use studywise_core::parser::{parse_batch_str, validate_batch};
use studywise_core::report::AnalysisReport;

const TERM_1: &str = r#"
[batch]
id = "term-1"
name = "Term 1"

[[subjects]]
name = "Mathematics"
marks = ["90", "85", "95"]

[[subjects]]
name = "Physics"
marks = ["40", "55", "-5", "abc", "105"]

[[subjects]]
name = "Chemistry"
marks = []

[[subjects]]
name = "Biology"
marks = ["60", "65", "70"]
"#;

const TERM_2: &str = r#"
[batch]
id = "term-2"
name = "Term 2"

[[subjects]]
name = "Mathematics"
marks = ["70", "72"]

[[subjects]]
name = "Physics"
marks = ["75", "80"]

[[subjects]]
name = "Chemistry"
marks = ["88"]

[[subjects]]
name = "Biology"
marks = ["66", "64"]
"#;

fn fixed_engine() -> AnalysisEngine {
    AnalysisEngine::new(Arc::new(FixedEstimator(DifficultyTier::Moderate)))
}

#[test]
fn batch_results_match_rules() {
    let batch = parse_batch_str(TERM_1, Path::new("term-1.toml")).unwrap();
    let report = fixed_engine().analyze_batch(&batch, &NoopReporter);

    let tiers: Vec<_> = report.results.iter().map(|r| r.personal_difficulty).collect();
    assert_eq!(
        tiers,
        vec![
            PersonalDifficulty::Classified(DifficultyTier::Easy),
            PersonalDifficulty::Classified(DifficultyTier::VeryHard),
            PersonalDifficulty::Unknown,
            PersonalDifficulty::Classified(DifficultyTier::Hard),
        ]
    );

    let chemistry = &report.results[2];
    assert!(chemistry.strengths.is_empty());
    assert!(chemistry.weaknesses.is_empty());
    assert_eq!(chemistry.recommendations.len(), 5);

    assert!(!validate_batch(&batch).is_empty());
}

#[test]
fn saved_reports_compare_across_terms() {
    let dir = tempfile::tempdir().unwrap();
    let engine = fixed_engine();

    let term_1 = engine.analyze_batch(
        &parse_batch_str(TERM_1, Path::new("term-1.toml")).unwrap(),
        &NoopReporter,
    );
    let term_2 = engine.analyze_batch(
        &parse_batch_str(TERM_2, Path::new("term-2.toml")).unwrap(),
        &NoopReporter,
    );

    let p1 = dir.path().join("term-1.json");
    let p2 = dir.path().join("term-2.json");
    term_1.save_json(&p1).unwrap();
    term_2.save_json(&p2).unwrap();

    let baseline = AnalysisReport::load_json(&p1).unwrap();
    let current = AnalysisReport::load_json(&p2).unwrap();
    let progress = current.compare(&baseline);

    // Physics: very hard -> moderate; Mathematics: easy -> moderate;
    // Biology: hard -> hard; Chemistry: unknown -> easy
    assert_eq!(progress.improved.len(), 1);
    assert_eq!(progress.improved[0].subject, "Physics");
    assert_eq!(progress.declined.len(), 1);
    assert_eq!(progress.declined[0].subject, "Mathematics");
    assert_eq!(progress.unchanged, 1);
    assert_eq!(progress.unclassified, 1);
    assert_eq!(progress.new_subjects, 0);
    assert_eq!(progress.removed_subjects, 0);
}

#[test]
fn random_predictions_never_change_personal_fields() {
    let batch = parse_batch_str(TERM_1, Path::new("term-1.toml")).unwrap();
    let engine = AnalysisEngine::new(Arc::new(UniformEstimator::new()));

    let first = engine.analyze_batch(&batch, &NoopReporter);
    let second = engine.analyze_batch(&batch, &NoopReporter);

    for (a, b) in first.results.iter().zip(&second.results) {
        assert_eq!(a.personal_difficulty, b.personal_difficulty);
        assert_eq!(a.strengths, b.strengths);
        assert_eq!(a.weaknesses, b.weaknesses);
        assert!(DifficultyTier::ALL.contains(&a.predicted_difficulty));
    }
    assert_ne!(first.id, second.id);
}
