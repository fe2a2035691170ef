//! Narrative template bundles — the four prose fragments (intro, body,
//! request, close) used for each `(SubjectCategory, Tone)` pair.
//!
//! Fragments may contain `{subject}`, `{subject_lower}` and `{purpose}`
//! placeholders, filled by [`render_fragment`].

use crate::generation::subject::SubjectCategory;
use crate::generation::tone::{ByTone, Tone};

#[derive(Debug, Clone, Copy)]
pub struct NarrativeBundle {
    pub intro: &'static str,
    pub body: &'static str,
    pub request: &'static str,
    pub close: &'static str,
    /// Substituted for `{purpose}` when the request carries no purpose.
    pub default_purpose: &'static str,
}

static MEETING_BUNDLES: ByTone<NarrativeBundle> = ByTone {
    professional: NarrativeBundle {
        intro: "I hope this email finds you well. I would like to schedule a {subject_lower} to discuss potential collaboration opportunities.",
        body: "I believe there could be significant mutual benefits from connecting and sharing insights about our respective areas of expertise.",
        request: "Would you be available for a meeting in the coming weeks? I'm flexible with timing and can accommodate your schedule.",
        close: "I look forward to hearing from you and the possibility of working together.",
        default_purpose: "potential collaboration opportunities",
    },
    casual: NarrativeBundle {
        intro: "Hope you're doing well! I'd love to grab a coffee and chat about {purpose}.",
        body: "I think it would be great to connect and share some thoughts - I'm sure we could both benefit from the conversation.",
        request: "Are you free for coffee sometime this week or next? I'm pretty flexible with timing.",
        close: "Let me know what works for you - I'm excited about the possibility of connecting!",
        default_purpose: "some ideas I have",
    },
    friendly: NarrativeBundle {
        intro: "I hope you're having a wonderful day! I'd love the chance to meet up for a coffee and chat about {purpose}.",
        body: "I think we could have a really valuable conversation and I'd love to share some ideas with you.",
        request: "Would you be interested in meeting up for coffee? I'm happy to work around your schedule.",
        close: "I'd really appreciate the chance to connect - looking forward to hearing from you!",
        default_purpose: "some exciting opportunities",
    },
    formal: NarrativeBundle {
        intro: "I trust this correspondence finds you in good health. I am writing to request a meeting to discuss {purpose}.",
        body: "I believe this presents a mutually beneficial opportunity for us to engage in meaningful discourse about our respective professional domains.",
        request: "I would be honored to schedule a meeting at your convenience. I am entirely flexible with regard to timing and location.",
        close: "I respectfully await your response and look forward to the possibility of a productive collaboration.",
        default_purpose: "potential business opportunities",
    },
    persuasive: NarrativeBundle {
        intro: "I hope this message finds you well. I'm reaching out because I have an exciting opportunity that I believe could provide significant value for your business.",
        body: "This could be a game-changing opportunity for both of us. I'm confident we can create something remarkable together.",
        request: "I strongly encourage you to consider meeting with me. This could be the breakthrough you've been looking for.",
        close: "I'm excited about the potential here and look forward to your positive response.",
        default_purpose: "an exciting opportunity",
    },
};

static FOLLOW_UP_BUNDLES: ByTone<NarrativeBundle> = ByTone {
    professional: NarrativeBundle {
        intro: "I wanted to follow up on our previous conversation regarding {subject_lower}.",
        body: "I believe we have a solid foundation to build upon and I'm excited about the potential for collaboration.",
        request: "I'd like to schedule a follow-up meeting to discuss next steps and how we can move forward together.",
        close: "Please let me know your availability and I'll coordinate accordingly.",
        default_purpose: "next steps",
    },
    casual: NarrativeBundle {
        intro: "Just wanted to check in about our conversation regarding {subject_lower}.",
        body: "I think we're onto something good here and I'd love to keep the momentum going.",
        request: "How about we grab coffee again to discuss where we go from here?",
        close: "Let me know when you're free - I'm excited to continue this conversation!",
        default_purpose: "next steps",
    },
    friendly: NarrativeBundle {
        intro: "I was thinking about our chat regarding {subject_lower} and wanted to follow up.",
        body: "I really enjoyed our conversation and I think we have some great opportunities ahead.",
        request: "Would you be interested in meeting up again to discuss how we can take this forward?",
        close: "I'd love to continue this conversation - let me know what works for you!",
        default_purpose: "next steps",
    },
    formal: NarrativeBundle {
        intro: "I am following up on our prior correspondence concerning {subject_lower}.",
        body: "I believe we have established a strong foundation for potential collaboration and mutual benefit.",
        request: "I would like to schedule a follow-up meeting to discuss the next phase of our potential partnership.",
        close: "I respectfully await your response regarding your availability for further discussion.",
        default_purpose: "the next phase of our partnership",
    },
    persuasive: NarrativeBundle {
        intro: "I'm reaching out again because I'm confident we have something special here with {subject_lower}.",
        body: "This could be the breakthrough opportunity that transforms both our businesses.",
        request: "I strongly encourage you to schedule a follow-up meeting - this could be the turning point you've been waiting for.",
        close: "I'm excited about the potential and look forward to your positive response.",
        default_purpose: "next steps",
    },
};

static THANKS_BUNDLES: ByTone<NarrativeBundle> = ByTone {
    professional: NarrativeBundle {
        intro: "Thank you for your time and consideration during our recent meeting.",
        body: "I truly appreciate the opportunity to connect with you and discuss {purpose}.",
        request: "I look forward to our continued partnership and the positive outcomes we can achieve together.",
        close: "Thank you again for your time and I hope to speak with you soon.",
        default_purpose: "our potential collaboration",
    },
    casual: NarrativeBundle {
        intro: "Thanks so much for taking the time to meet with me!",
        body: "I really appreciated our conversation about {purpose} and I think we're going to do great things together.",
        request: "I'm excited about what we discussed and can't wait to see where this leads.",
        close: "Thanks again and talk to you soon!",
        default_purpose: "everything",
    },
    friendly: NarrativeBundle {
        intro: "I really appreciate you taking the time to meet with me!",
        body: "Our conversation about {purpose} was fantastic and I'm so excited about the possibilities.",
        request: "I can't wait to continue this journey with you and see what amazing things we can create together.",
        close: "Thanks again for everything - you're awesome to work with!",
        default_purpose: "everything",
    },
    formal: NarrativeBundle {
        intro: "I extend my sincere gratitude for your time and consideration during our recent meeting.",
        body: "I am deeply appreciative of the opportunity to engage with you regarding {purpose}.",
        request: "I look forward to our continued professional relationship and the mutual benefits it will bring.",
        close: "I thank you once again for your time and look forward to our future correspondence.",
        default_purpose: "our potential collaboration",
    },
    persuasive: NarrativeBundle {
        intro: "I'm incredibly grateful for the opportunity you provided during our recent meeting.",
        body: "This could be the breakthrough moment that transforms both our businesses and creates something truly remarkable.",
        request: "I'm excited about the potential we've uncovered and confident this will be a game-changing partnership.",
        close: "Thank you for believing in this opportunity - I can't wait to show you what we can achieve together.",
        default_purpose: "our partnership",
    },
};

static GENERIC_BUNDLES: ByTone<NarrativeBundle> = ByTone {
    professional: NarrativeBundle {
        intro: "I hope this email finds you well. I am writing to you regarding {subject}.",
        body: "I believe this presents an excellent opportunity for us to connect and explore potential collaboration.",
        request: "I would appreciate the opportunity to discuss this matter with you in greater detail.",
        close: "I look forward to your response and the possibility of working together.",
        default_purpose: "this matter",
    },
    casual: NarrativeBundle {
        intro: "Hope you're doing well! I wanted to reach out about {subject}.",
        body: "I think this could be a great opportunity for us to connect and share some ideas.",
        request: "Would you be interested in chatting about this? I think we could both benefit from the conversation.",
        close: "Let me know what you think - I'm excited about the possibilities!",
        default_purpose: "this",
    },
    friendly: NarrativeBundle {
        intro: "I hope you're having a wonderful day! I wanted to reach out about {subject}.",
        body: "I'd love the chance to connect with you and share some thoughts about this opportunity.",
        request: "Would you be interested in meeting up to discuss this? I think we could have a really valuable conversation.",
        close: "I'd really appreciate the chance to connect - let me know what works for you!",
        default_purpose: "this opportunity",
    },
    formal: NarrativeBundle {
        intro: "I trust this correspondence finds you in good health. I am writing to you regarding {subject}.",
        body: "I believe this presents a mutually beneficial opportunity for us to engage in meaningful professional discourse.",
        request: "I would be honored to schedule a meeting to discuss this matter in greater detail.",
        close: "I respectfully await your response and look forward to the possibility of a productive collaboration.",
        default_purpose: "this matter",
    },
    persuasive: NarrativeBundle {
        intro: "I hope this message finds you well. I'm reaching out because {subject} represents an exceptional opportunity.",
        body: "This could be the breakthrough moment that provides significant value for both our organizations.",
        request: "I strongly encourage you to consider this opportunity - it could be the game-changer you've been looking for.",
        close: "I'm excited about the potential here and look forward to your positive response.",
        default_purpose: "this opportunity",
    },
};

/// Returns the bundle for a category/tone pair.
pub fn narrative_bundle(category: SubjectCategory, tone: Tone) -> &'static NarrativeBundle {
    let table = match category {
        SubjectCategory::Meeting => &MEETING_BUNDLES,
        SubjectCategory::FollowUp => &FOLLOW_UP_BUNDLES,
        SubjectCategory::Thanks => &THANKS_BUNDLES,
        SubjectCategory::Generic => &GENERIC_BUNDLES,
    };
    table.get(tone)
}

/// Values available to fragment placeholders.
#[derive(Debug, Clone, Copy)]
pub struct FragmentVars<'a> {
    pub subject: &'a str,
    pub purpose: Option<&'a str>,
}

/// Fills `{subject}`, `{subject_lower}` and `{purpose}` in a single pass, so
/// substituted text is never re-scanned for placeholders. Unknown `{...}`
/// sequences are copied through unchanged.
pub fn render_fragment(fragment: &str, bundle: &NarrativeBundle, vars: FragmentVars<'_>) -> String {
    let mut out = String::with_capacity(fragment.len() + vars.subject.len());
    let mut rest = fragment;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };

        match &tail[1..end] {
            "subject" => out.push_str(vars.subject),
            "subject_lower" => out.push_str(&vars.subject.to_lowercase()),
            "purpose" => out.push_str(
                vars.purpose
                    .filter(|p| !p.is_empty())
                    .unwrap_or(bundle.default_purpose),
            ),
            _ => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [SubjectCategory; 4] = [
        SubjectCategory::Meeting,
        SubjectCategory::FollowUp,
        SubjectCategory::Thanks,
        SubjectCategory::Generic,
    ];

    fn vars<'a>(subject: &'a str, purpose: Option<&'a str>) -> FragmentVars<'a> {
        FragmentVars { subject, purpose }
    }

    #[test]
    fn test_every_pair_has_a_complete_bundle() {
        for category in CATEGORIES {
            for tone in Tone::ALL {
                let b = narrative_bundle(category, tone);
                assert!(!b.intro.is_empty(), "{category:?}/{tone}");
                assert!(!b.body.is_empty(), "{category:?}/{tone}");
                assert!(!b.request.is_empty(), "{category:?}/{tone}");
                assert!(!b.close.is_empty(), "{category:?}/{tone}");
                assert!(!b.default_purpose.is_empty(), "{category:?}/{tone}");
            }
        }
    }

    #[test]
    fn test_purpose_substituted() {
        let b = narrative_bundle(SubjectCategory::Meeting, Tone::Casual);
        let intro = render_fragment(b.intro, b, vars("Coffee Chat", Some("discuss collaboration")));
        assert_eq!(
            intro,
            "Hope you're doing well! I'd love to grab a coffee and chat about discuss collaboration."
        );
    }

    #[test]
    fn test_missing_or_empty_purpose_uses_default() {
        let b = narrative_bundle(SubjectCategory::Meeting, Tone::Casual);
        let missing = render_fragment(b.intro, b, vars("Coffee", None));
        let empty = render_fragment(b.intro, b, vars("Coffee", Some("")));
        assert!(missing.ends_with("chat about some ideas I have."));
        assert_eq!(missing, empty);
    }

    #[test]
    fn test_subject_lower_placeholder() {
        let b = narrative_bundle(SubjectCategory::FollowUp, Tone::Professional);
        let intro = render_fragment(b.intro, b, vars("Follow Up On Q3 Plan", None));
        assert_eq!(
            intro,
            "I wanted to follow up on our previous conversation regarding follow up on q3 plan."
        );
    }

    #[test]
    fn test_generic_keeps_subject_case() {
        let b = narrative_bundle(SubjectCategory::Generic, Tone::Professional);
        let intro = render_fragment(b.intro, b, vars("Q3 Budget Review", None));
        assert!(intro.ends_with("regarding Q3 Budget Review."));
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let b = narrative_bundle(SubjectCategory::Generic, Tone::Casual);
        let intro = render_fragment(b.intro, b, vars("the {purpose} field", Some("X")));
        assert!(intro.contains("the {purpose} field"));
    }

    #[test]
    fn test_unknown_and_unclosed_braces_pass_through() {
        let b = narrative_bundle(SubjectCategory::Generic, Tone::Casual);
        assert_eq!(render_fragment("a {other} b", b, vars("s", None)), "a {other} b");
        assert_eq!(render_fragment("a { b", b, vars("s", None)), "a { b");
    }
}
