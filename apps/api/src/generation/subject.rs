//! Subject classification — buckets a free-text subject into the category
//! whose narrative bundles are used for the body.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubjectCategory {
    Meeting,
    FollowUp,
    Thanks,
    Generic,
}

/// Keyword rules in precedence order. The first rule with any matching
/// keyword wins; a subject matching nothing is `Generic`.
const CATEGORY_RULES: &[(SubjectCategory, &[&str])] = &[
    (SubjectCategory::Meeting, &["meeting", "coffee", "chat"]),
    (SubjectCategory::FollowUp, &["follow"]),
    (SubjectCategory::Thanks, &["thank"]),
];

/// Classifies a subject by case-insensitive substring match.
pub fn classify_subject(subject: &str) -> SubjectCategory {
    let subject_lower = subject.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| subject_lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(SubjectCategory::Generic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_keywords() {
        assert_eq!(classify_subject("Meeting Request"), SubjectCategory::Meeting);
        assert_eq!(classify_subject("Coffee Chat"), SubjectCategory::Meeting);
        assert_eq!(classify_subject("quick chat?"), SubjectCategory::Meeting);
    }

    #[test]
    fn test_follow_up() {
        assert_eq!(classify_subject("Follow up on proposal"), SubjectCategory::FollowUp);
        assert_eq!(classify_subject("Following our call"), SubjectCategory::FollowUp);
    }

    #[test]
    fn test_thanks() {
        assert_eq!(classify_subject("Thank you!"), SubjectCategory::Thanks);
        assert_eq!(classify_subject("THANKS for everything"), SubjectCategory::Thanks);
    }

    #[test]
    fn test_generic_when_nothing_matches() {
        assert_eq!(classify_subject("Quarterly budget"), SubjectCategory::Generic);
        assert_eq!(classify_subject(""), SubjectCategory::Generic);
    }

    #[test]
    fn test_meeting_preempts_follow_up() {
        assert_eq!(classify_subject("Follow up meeting"), SubjectCategory::Meeting);
        assert_eq!(classify_subject("Follow-up coffee"), SubjectCategory::Meeting);
    }

    #[test]
    fn test_follow_up_preempts_thanks() {
        assert_eq!(
            classify_subject("Follow up: thank you note"),
            SubjectCategory::FollowUp
        );
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "chat" inside "chateau" still counts; matching is plain substring.
        assert_eq!(classify_subject("Chateau visit"), SubjectCategory::Meeting);
    }
}
