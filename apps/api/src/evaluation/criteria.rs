//! Static evaluation criteria: per-tone keyword/greeting/closing lists,
//! the structure checklist, action phrases and word-count ranges.

use crate::generation::tone::{ByTone, EmailLength, Tone};

/// What the evaluator looks for in an email of a given tone.
#[derive(Debug, Clone, Copy)]
pub struct ToneCriteria {
    pub keywords: &'static [&'static str],
    /// Lowercase; matched against the start of the lowercased content.
    pub greetings: &'static [&'static str],
    /// Lowercase; matched anywhere in the lowercased content.
    pub closings: &'static [&'static str],
}

static TONE_CRITERIA: ByTone<ToneCriteria> = ByTone {
    professional: ToneCriteria {
        keywords: &["formal language", "business appropriate", "respectful"],
        greetings: &["dear", "hello", "good day"],
        closings: &["best regards", "sincerely", "kind regards"],
    },
    casual: ToneCriteria {
        keywords: &["conversational", "friendly", "relaxed"],
        greetings: &["hi", "hey", "hello"],
        closings: &["thanks", "best", "cheers"],
    },
    friendly: ToneCriteria {
        keywords: &["warm", "enthusiastic", "personal"],
        greetings: &["hi there", "hello", "hey"],
        closings: &["best wishes", "take care", "warm regards"],
    },
    formal: ToneCriteria {
        keywords: &["structured", "official", "decorous"],
        greetings: &["dear", "to whom it may concern"],
        closings: &["respectfully", "sincerely", "yours truly"],
    },
    persuasive: ToneCriteria {
        keywords: &["compelling", "confident", "action-oriented"],
        greetings: &["dear", "hello"],
        closings: &["best regards", "looking forward", "thank you"],
    },
};

/// Criteria for an expected tone. An unknown tone has no keywords and
/// borrows the professional greetings and closings.
pub fn tone_criteria(tone: Option<Tone>) -> ToneCriteria {
    match tone {
        Some(tone) => *TONE_CRITERIA.get(tone),
        None => ToneCriteria {
            keywords: &[],
            ..*TONE_CRITERIA.get(Tone::Professional)
        },
    }
}

/// True when the lowercased content contains a closing phrase of any tone.
pub fn has_any_closing(content_lower: &str) -> bool {
    Tone::ALL
        .into_iter()
        .flat_map(|t| TONE_CRITERIA.get(t).closings.iter())
        .any(|closing| content_lower.contains(closing))
}

/// Phrases that make an email actionable.
pub const ACTION_PHRASES: &[&str] = &[
    "please",
    "would you",
    "could you",
    "let me know",
    "schedule",
    "meet",
    "call",
];

// ────────────────────────────────────────────────────────────────────────────
// Structure checklist
// ────────────────────────────────────────────────────────────────────────────

/// One 25-point structure check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureCheck {
    /// First line longer than 10 characters.
    ClearOpening,
    /// At least 3 non-empty sentences.
    LogicalFlow,
    /// A closing phrase of any tone.
    AppropriateClosing,
    /// Multi-line and longer than 50 characters.
    ProperFormatting,
}

pub const STRUCTURE_CHECKS: [StructureCheck; 4] = [
    StructureCheck::ClearOpening,
    StructureCheck::LogicalFlow,
    StructureCheck::AppropriateClosing,
    StructureCheck::ProperFormatting,
];

pub const POINTS_PER_STRUCTURE_CHECK: f64 = 25.0;

const MIN_OPENING_CHARS: usize = 10;
const MIN_SENTENCES: usize = 3;
const MIN_FORMATTED_CHARS: usize = 50;

impl StructureCheck {
    pub fn passes(self, content: &str) -> bool {
        match self {
            StructureCheck::ClearOpening => content
                .split('\n')
                .next()
                .is_some_and(|line| line.chars().count() > MIN_OPENING_CHARS),
            StructureCheck::LogicalFlow => sentence_count(content) >= MIN_SENTENCES,
            StructureCheck::AppropriateClosing => has_any_closing(&content.to_lowercase()),
            StructureCheck::ProperFormatting => {
                content.contains('\n') && content.chars().count() > MIN_FORMATTED_CHARS
            }
        }
    }
}

/// Sentences are runs between `.`, `!` and `?` with non-whitespace content.
pub fn sentence_count(content: &str) -> usize {
    content
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Tokens separated by single spaces. Newlines do not split tokens.
pub fn word_count(content: &str) -> usize {
    content.split(' ').count()
}

// ────────────────────────────────────────────────────────────────────────────
// Length ranges
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive word-count range for an expected length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

pub fn length_range(length: EmailLength) -> LengthRange {
    match length {
        EmailLength::Short => LengthRange { min: 50, max: 150 },
        EmailLength::Medium => LengthRange { min: 150, max: 300 },
        EmailLength::Long => LengthRange { min: 300, max: 500 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tone_has_no_keywords_but_professional_phrases() {
        let c = tone_criteria(None);
        assert!(c.keywords.is_empty());
        assert_eq!(c.greetings, &["dear", "hello", "good day"]);
        assert_eq!(c.closings, &["best regards", "sincerely", "kind regards"]);
    }

    #[test]
    fn test_persuasive_criteria() {
        let c = tone_criteria(Some(Tone::Persuasive));
        assert_eq!(c.keywords.len(), 3);
        assert!(c.closings.contains(&"looking forward"));
    }

    #[test]
    fn test_any_closing_spans_tones() {
        assert!(has_any_closing("cheers,\nsam"));
        assert!(has_any_closing("yours truly"));
        assert!(!has_any_closing("bye"));
    }

    #[test]
    fn test_sentence_count_ignores_empty_segments() {
        assert_eq!(sentence_count("One. Two!! Three?"), 3);
        assert_eq!(sentence_count("...!?"), 0);
        assert_eq!(sentence_count("No terminator"), 1);
    }

    #[test]
    fn test_word_count_splits_on_spaces_only() {
        assert_eq!(word_count("Dear Sam,\n\nHello there"), 3);
        assert_eq!(word_count("a  b"), 3);
        assert_eq!(word_count(""), 1);
    }

    #[test]
    fn test_clear_opening_threshold() {
        assert!(!StructureCheck::ClearOpening.passes("Hi Sam,\nrest of the email"));
        assert!(StructureCheck::ClearOpening.passes("Dear Samantha,\nrest"));
        // exactly 10 characters is not enough
        assert!(!StructureCheck::ClearOpening.passes("0123456789\nrest"));
    }

    #[test]
    fn test_proper_formatting_needs_newline_and_length() {
        let long_single_line = "x".repeat(60);
        assert!(!StructureCheck::ProperFormatting.passes(&long_single_line));
        assert!(!StructureCheck::ProperFormatting.passes("short\ntext"));
        assert!(StructureCheck::ProperFormatting.passes(&format!("{long_single_line}\nmore")));
    }

    #[test]
    fn test_length_ranges() {
        assert_eq!(length_range(EmailLength::Short), LengthRange { min: 50, max: 150 });
        assert_eq!(length_range(EmailLength::Medium), LengthRange { min: 150, max: 300 });
        assert_eq!(length_range(EmailLength::Long), LengthRange { min: 300, max: 500 });
    }
}
