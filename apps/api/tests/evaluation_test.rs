//! Integration tests for the quality evaluator's observable properties.

use proptest::prelude::*;

use quill::evaluation::scorer::{
    compute_overall, CategoryScores, EmailDraft, Grade, QualityEvaluator,
};

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[test]
fn test_no_tone_signals_scores_zero() {
    let report = QualityEvaluator::default().evaluate(
        &EmailDraft::new("Yo. Quick note about the thing.", None),
        "formal",
        "short",
    );
    assert_eq!(report.scores.tone, 0.0);
}

#[test]
fn test_medium_lower_boundary() {
    let evaluator = QualityEvaluator::default();
    let at_min = evaluator.evaluate(&EmailDraft::new(words(150), None), "casual", "medium");
    let under = evaluator.evaluate(&EmailDraft::new(words(149), None), "casual", "medium");

    assert_eq!(at_min.scores.length, 100.0);
    assert!(under.scores.length < 100.0);
}

#[test]
fn test_short_professional_email_scenario() {
    let content = "Dear Ms. Patel,\n\nThank you for sending the quarterly report. I have completed my review and attached a few notes on the budget section. Could you confirm whether the figures for March are final? I would like to schedule a short call this week.\n\nSincerely,\nJordan";
    let report = QualityEvaluator::default().evaluate(
        &EmailDraft::new(content, Some("review")),
        "professional",
        "medium",
    );

    // No professional keywords; "Dear" and "Sincerely" give the two bonuses.
    assert_eq!(report.scores.tone, 20.0);
    assert_eq!(report.scores.structure, 100.0);
    assert_eq!(report.scores.content, 100.0);
    // 43 space-separated tokens against a 150-word minimum
    assert!((report.scores.length - 43.0 / 150.0 * 100.0).abs() < 1e-9);
    assert!((report.scores.overall - 61.733_333_333).abs() < 1e-6);
    assert_eq!(report.grade, Grade::from_score(report.scores.overall));
    assert_eq!(report.grade, Grade::D);
    assert_eq!(
        report.feedback,
        vec![
            "Tone could be more professional. Consider using more appropriate language for this tone."
                .to_string(),
            "Length should be more appropriate for medium emails.".to_string(),
        ]
    );
}

#[test]
fn test_capitalized_labels_count_as_unknown() {
    let evaluator = QualityEvaluator;
    let draft = EmailDraft::new(words(200), None);

    assert_eq!(evaluator.evaluate(&draft, "casual", "medium").scores.length, 100.0);
    assert_eq!(evaluator.evaluate(&draft, "Casual", "MEDIUM").scores.length, 50.0);
    assert_eq!(evaluator.evaluate(&draft, " casual", "medium ").scores.length, 50.0);
}

#[test]
fn test_unknown_tone_degrades_gracefully() {
    let report = QualityEvaluator::default().evaluate(
        &EmailDraft::new("Dear team,\nThanks. More. Text.", None),
        "",
        "",
    );
    // empty keyword list, professional greeting bonus only
    assert_eq!(report.scores.tone, 10.0);
    assert_eq!(report.scores.length, 50.0);
}

proptest! {
    #[test]
    fn prop_overall_is_weighted_sum(
        tone in 0.0f64..=100.0,
        structure in 0.0f64..=100.0,
        content in 0.0f64..=100.0,
        length in 0.0f64..=100.0,
    ) {
        let scores = CategoryScores::new(tone, structure, content, length);
        let expected = 0.30 * tone + 0.25 * structure + 0.25 * content + 0.20 * length;
        prop_assert!((scores.overall - expected).abs() < 1e-9);
        prop_assert!((compute_overall(tone, structure, content, length) - expected).abs() < 1e-9);
        prop_assert!((0.0..=100.0).contains(&scores.overall));
    }

    #[test]
    fn prop_report_scores_bounded_and_graded(
        content in "\\PC{0,400}",
        purpose in proptest::option::of("[a-z]{0,10}"),
        tone in prop::sample::select(vec!["professional", "casual", "friendly", "formal", "persuasive", "other"]),
        length in prop::sample::select(vec!["short", "medium", "long", "other"]),
    ) {
        let report = QualityEvaluator::default().evaluate(
            &EmailDraft { content, purpose },
            tone,
            length,
        );
        let s = report.scores;
        for value in [s.tone, s.structure, s.content, s.length, s.overall] {
            prop_assert!((0.0..=100.0).contains(&value), "out of range: {value}");
        }
        prop_assert_eq!(report.grade, Grade::from_score(s.overall));
        if s.overall >= 80.0 {
            prop_assert_eq!(report.feedback.last().map(String::as_str), Some("Overall, this is a well-written email!"));
        }
    }
}
