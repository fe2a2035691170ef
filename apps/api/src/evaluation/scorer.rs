//! Quality evaluator — heuristic scoring of an email against an expected
//! tone and length.
//!
//! Four sub-scores, each in [0, 100]:
//! 1. tone      — share of tone keywords present, +10 greeting, +10 closing, capped at 100
//! 2. structure — 25 points per passed structure check
//! 3. content   — 40 purpose mentioned, 30 specific, 30 actionable
//! 4. length    — 100 inside the word range, proportional penalty outside it
//!
//! overall = Σ(weight × sub-score); grade is a step function of overall.

use serde::{Deserialize, Serialize};

use crate::evaluation::criteria::{
    length_range, tone_criteria, word_count, ACTION_PHRASES, POINTS_PER_STRUCTURE_CHECK,
    STRUCTURE_CHECKS,
};
use crate::generation::tone::{EmailLength, Tone};

/// Sub-scores below this get a feedback line.
pub const FEEDBACK_THRESHOLD: f64 = 70.0;
/// Overall scores at or above this earn the positive remark.
pub const PRAISE_THRESHOLD: f64 = 80.0;

const GREETING_BONUS: f64 = 10.0;
const CLOSING_BONUS: f64 = 10.0;
const PURPOSE_POINTS: f64 = 40.0;
const SPECIFICITY_POINTS: f64 = 30.0;
const ACTIONABILITY_POINTS: f64 = 30.0;
const SPECIFIC_MIN_TOKENS: usize = 20;
const UNKNOWN_LENGTH_SCORE: f64 = 50.0;

// Fixed category weights. They sum to 1, so `overall` stays in [0, 100].
const TONE_WEIGHT: f64 = 0.30;
const STRUCTURE_WEIGHT: f64 = 0.25;
const CONTENT_WEIGHT: f64 = 0.25;
const LENGTH_WEIGHT: f64 = 0.20;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The part of an email the evaluator reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub content: String,
    #[serde(default)]
    pub purpose: Option<String>,
}

impl EmailDraft {
    pub fn new(content: impl Into<String>, purpose: Option<&str>) -> Self {
        Self {
            content: content.into(),
            purpose: purpose.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub tone: f64,
    pub structure: f64,
    pub content: f64,
    pub length: f64,
    pub overall: f64,
}

impl CategoryScores {
    /// Builds the score set, deriving `overall` from the four sub-scores.
    pub fn new(tone: f64, structure: f64, content: f64, length: f64) -> Self {
        let overall = compute_overall(tone, structure, content, length);
        Self {
            tone,
            structure,
            content,
            length,
            overall,
        }
    }
}

/// Weighted sum of the four sub-scores.
pub fn compute_overall(tone: f64, structure: f64, content: f64, length: f64) -> f64 {
    TONE_WEIGHT * tone
        + STRUCTURE_WEIGHT * structure
        + CONTENT_WEIGHT * content
        + LENGTH_WEIGHT * length
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Grade {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

/// Full evaluation returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub scores: CategoryScores,
    pub grade: Grade,
    pub feedback: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluator
// ────────────────────────────────────────────────────────────────────────────

/// Stateless evaluator. Never fails: unknown tone/length labels degrade to
/// empty keyword lists and a flat length score.
///
/// Labels are matched exactly (`"casual"`, not `"Casual"`), unlike the
/// lenient parsing on the generate path.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityEvaluator;

impl QualityEvaluator {
    pub fn evaluate(
        &self,
        email: &EmailDraft,
        expected_tone: &str,
        expected_length: &str,
    ) -> ScoreReport {
        let tone = Tone::ALL.into_iter().find(|t| t.as_str() == expected_tone);
        let length = EmailLength::ALL
            .into_iter()
            .find(|l| l.as_str() == expected_length);

        let scores = CategoryScores::new(
            score_tone(&email.content, tone),
            score_structure(&email.content),
            score_content(&email.content, email.purpose.as_deref()),
            score_length(&email.content, length),
        );

        ScoreReport {
            grade: Grade::from_score(scores.overall),
            feedback: build_feedback(&scores, expected_tone, expected_length),
            scores,
        }
    }
}

pub fn score_tone(content: &str, tone: Option<Tone>) -> f64 {
    let criteria = tone_criteria(tone);
    let content_lower = content.to_lowercase();

    let mut score = if criteria.keywords.is_empty() {
        0.0
    } else {
        let matched = criteria
            .keywords
            .iter()
            .filter(|kw| content_lower.contains(*kw))
            .count();
        matched as f64 / criteria.keywords.len() as f64 * 100.0
    };

    if criteria.greetings.iter().any(|g| content_lower.starts_with(g)) {
        score += GREETING_BONUS;
    }
    if criteria.closings.iter().any(|c| content_lower.contains(c)) {
        score += CLOSING_BONUS;
    }

    score.min(100.0)
}

pub fn score_structure(content: &str) -> f64 {
    STRUCTURE_CHECKS
        .iter()
        .filter(|check| check.passes(content))
        .count() as f64
        * POINTS_PER_STRUCTURE_CHECK
}

pub fn score_content(content: &str, purpose: Option<&str>) -> f64 {
    let content_lower = content.to_lowercase();
    let mut score = 0.0;

    if let Some(purpose) = purpose.filter(|p| !p.is_empty()) {
        if content_lower.contains(&purpose.to_lowercase()) {
            score += PURPOSE_POINTS;
        }
    }

    let has_digit = content.chars().any(|c| c.is_ascii_digit());
    if has_digit || word_count(content) > SPECIFIC_MIN_TOKENS {
        score += SPECIFICITY_POINTS;
    }

    if ACTION_PHRASES.iter().any(|p| content_lower.contains(p)) {
        score += ACTIONABILITY_POINTS;
    }

    score
}

pub fn score_length(content: &str, length: Option<EmailLength>) -> f64 {
    let Some(length) = length else {
        return UNKNOWN_LENGTH_SCORE;
    };
    let range = length_range(length);
    let words = word_count(content);

    if (range.min..=range.max).contains(&words) {
        100.0
    } else if words < range.min {
        (words as f64 / range.min as f64 * 100.0).max(0.0)
    } else {
        let excess = (words - range.max) as f64;
        (100.0 - excess / range.max as f64 * 50.0).max(0.0)
    }
}

/// Advisory lines for each sub-score under threshold, in tone/structure/
/// content/length order, plus praise for a high overall score.
fn build_feedback(
    scores: &CategoryScores,
    expected_tone: &str,
    expected_length: &str,
) -> Vec<String> {
    let mut feedback = Vec::new();

    if scores.tone < FEEDBACK_THRESHOLD {
        feedback.push(format!(
            "Tone could be more {expected_tone}. Consider using more appropriate language for this tone."
        ));
    }
    if scores.structure < FEEDBACK_THRESHOLD {
        feedback.push(
            "Email structure could be improved. Ensure clear opening, logical flow, and proper closing."
                .to_string(),
        );
    }
    if scores.content < FEEDBACK_THRESHOLD {
        feedback.push("Content could be more relevant and specific to the purpose.".to_string());
    }
    if scores.length < FEEDBACK_THRESHOLD {
        feedback.push(format!(
            "Length should be more appropriate for {expected_length} emails."
        ));
    }
    if scores.overall >= PRAISE_THRESHOLD {
        feedback.push("Overall, this is a well-written email!".to_string());
    }

    feedback
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
