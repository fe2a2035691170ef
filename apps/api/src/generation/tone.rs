//! Tone and length vocabulary shared by the generator and the evaluator,
//! plus the static per-tone profile table (greetings, closings, narrative style).
//!
//! Unknown tone/length labels never fail: callers resolve them with
//! `Tone::parse(..).unwrap_or_default()` and friends.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Categorical register of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
    Persuasive,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Formal,
        Tone::Persuasive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Persuasive => "persuasive",
        }
    }

    /// Case-insensitive parse. Returns `None` for anything outside the five tones.
    pub fn parse(raw: &str) -> Option<Tone> {
        let raw = raw.trim();
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested email length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl EmailLength {
    pub const ALL: [EmailLength; 3] = [EmailLength::Short, EmailLength::Medium, EmailLength::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            EmailLength::Short => "short",
            EmailLength::Medium => "medium",
            EmailLength::Long => "long",
        }
    }

    pub fn parse(raw: &str) -> Option<EmailLength> {
        let raw = raw.trim();
        EmailLength::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for EmailLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde helper: missing, null or unrecognized tone labels become `Tone::default()`.
pub fn lenient_tone<'de, D>(deserializer: D) -> Result<Tone, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Tone::parse).unwrap_or_default())
}

/// Serde helper: missing, null or unrecognized length labels become `EmailLength::default()`.
pub fn lenient_length<'de, D>(deserializer: D) -> Result<EmailLength, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(EmailLength::parse).unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Lookup table keyed by tone
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-shape table with one slot per tone. Every static table in the crate
/// that varies by tone is a `ByTone`, so a missing tone is a compile error.
#[derive(Debug, Clone, Copy)]
pub struct ByTone<T> {
    pub professional: T,
    pub casual: T,
    pub friendly: T,
    pub formal: T,
    pub persuasive: T,
}

impl<T> ByTone<T> {
    pub fn get(&self, tone: Tone) -> &T {
        match tone {
            Tone::Professional => &self.professional,
            Tone::Casual => &self.casual,
            Tone::Friendly => &self.friendly,
            Tone::Formal => &self.formal,
            Tone::Persuasive => &self.persuasive,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tone profiles
// ────────────────────────────────────────────────────────────────────────────

/// Stock phrasing for a tone, independent of the subject.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeStyle {
    pub opening: &'static str,
    pub connector: &'static str,
    pub body: &'static str,
    pub request: &'static str,
    pub ending: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ToneProfile {
    pub greetings: &'static [&'static str],
    pub closings: &'static [&'static str],
    pub style: NarrativeStyle,
}

static TONE_PROFILES: ByTone<ToneProfile> = ByTone {
    professional: ToneProfile {
        greetings: &["Dear", "Hello", "Good day"],
        closings: &["Best regards", "Sincerely", "Kind regards"],
        style: NarrativeStyle {
            opening: "I hope this email finds you well.",
            connector: "I wanted to reach out regarding",
            body: "I believe this would be a valuable opportunity for both of us to connect and discuss our respective areas of expertise.",
            request: "Would you be available for a meeting? I'm flexible with timing and can accommodate your schedule.",
            ending: "Please let me know what works best for you.",
        },
    },
    casual: ToneProfile {
        greetings: &["Hi", "Hey", "Hello"],
        closings: &["Thanks", "Best", "Cheers"],
        style: NarrativeStyle {
            opening: "Hope you're doing well!",
            connector: "I wanted to touch base about",
            body: "I think it would be great to connect and chat about our respective areas.",
            request: "Are you free for a meeting sometime? I'm pretty flexible with timing.",
            ending: "Let me know what works for you!",
        },
    },
    friendly: ToneProfile {
        greetings: &["Hi there", "Hello", "Hey"],
        closings: &["Best wishes", "Take care", "Warm regards"],
        style: NarrativeStyle {
            opening: "I hope you're having a great day!",
            connector: "I wanted to reach out about",
            body: "I'd love the chance to connect and share some ideas with you - I think we could both benefit from the conversation.",
            request: "Would you be interested in meeting up? I'm happy to work around your schedule.",
            ending: "I'd really appreciate hearing your thoughts!",
        },
    },
    formal: ToneProfile {
        greetings: &["Dear", "To whom it may concern"],
        closings: &["Respectfully", "Sincerely", "Yours truly"],
        style: NarrativeStyle {
            opening: "I trust this correspondence finds you in good health.",
            connector: "I am writing to you regarding",
            body: "I believe this presents a mutually beneficial opportunity for us to engage in meaningful discourse about our respective professional domains.",
            request: "I would be honored to schedule a meeting at your convenience. I am entirely flexible with regard to timing.",
            ending: "I respectfully await your response at your earliest convenience.",
        },
    },
    persuasive: ToneProfile {
        greetings: &["Dear", "Hello", "I hope this finds you well"],
        closings: &[
            "Best regards",
            "Looking forward to your response",
            "Thank you for your consideration",
        ],
        style: NarrativeStyle {
            opening: "I hope this message finds you well.",
            connector: "I'm reaching out because",
            body: "This is an exceptional opportunity that could provide significant value for both of us. I'm confident we can create something remarkable together.",
            request: "I strongly encourage you to consider meeting with me. This could be a game-changing opportunity for your business.",
            ending: "I'm excited about the potential here and look forward to your positive response.",
        },
    },
};

/// Returns the static profile for a tone.
pub fn tone_profile(tone: Tone) -> &'static ToneProfile {
    TONE_PROFILES.get(tone)
}
