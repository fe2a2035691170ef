//! Template generator — the local, rule-based email writer.
//!
//! Flow: resolve tone profile → pick greeting/closing → classify subject →
//!       select narrative bundle → assemble paragraph blocks → length post-process.
//!
//! Pure apart from the greeting/closing pick, which draws from a caller-supplied
//! RNG (`generate_with_rng`). No setup, no shared state: safe to call as the
//! fallback path at any time.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generation::length::{apply_length, join_blocks};
use crate::generation::subject::classify_subject;
use crate::generation::templates::{narrative_bundle, render_fragment, FragmentVars};
use crate::generation::tone::{lenient_length, lenient_tone, tone_profile, EmailLength, Tone};

/// Salutation target when no recipient is given.
pub const DEFAULT_RECIPIENT: &str = "there";

/// Sign-off line the sender replaces with their own name.
pub const SIGNATURE_PLACEHOLDER: &str = "[Your Name]";

const FALLBACK_GREETING: &str = "Hello";
const FALLBACK_CLOSING: &str = "Best regards";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Parameters for one email. `subject` presence is validated by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub subject: String,
    #[serde(default, deserialize_with = "lenient_tone")]
    pub tone: Tone,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient_length")]
    pub length: EmailLength,
}

impl GenerationRequest {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            tone: Tone::default(),
            purpose: None,
            recipient: None,
            length: EmailLength::default(),
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn length(mut self, length: EmailLength) -> Self {
        self.length = length;
        self
    }
}

/// A finished email. Created fresh per request, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEmail {
    pub subject: String,
    pub content: String,
    pub tone: Tone,
    pub purpose: Option<String>,
    pub recipient: Option<String>,
    pub length: EmailLength,
}

impl GeneratedEmail {
    /// Wraps text produced elsewhere (e.g. a remote drafter) with the request's metadata.
    pub fn from_request(request: &GenerationRequest, content: String) -> Self {
        Self {
            subject: request.subject.clone(),
            content,
            tone: request.tone,
            purpose: request.purpose.clone(),
            recipient: request.recipient.clone(),
            length: request.length,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

/// Stateless template generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailGenerator;

impl EmailGenerator {
    /// Generates with the thread-local RNG.
    pub fn generate(&self, request: &GenerationRequest) -> GeneratedEmail {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    /// Generates with an injected RNG; a seeded RNG gives reproducible output.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GeneratedEmail {
        let profile = tone_profile(request.tone);
        let greeting = profile
            .greetings
            .choose(&mut *rng)
            .copied()
            .unwrap_or(FALLBACK_GREETING);
        let closing = profile
            .closings
            .choose(&mut *rng)
            .copied()
            .unwrap_or(FALLBACK_CLOSING);

        let blocks = compose_blocks(request, greeting, closing);
        let content = join_blocks(&apply_length(blocks, request.length));

        GeneratedEmail::from_request(request, content)
    }
}

/// Builds the five medium-length blocks: salutation, intro, body,
/// request + close, sign-off.
fn compose_blocks(request: &GenerationRequest, greeting: &str, closing: &str) -> Vec<String> {
    let category = classify_subject(&request.subject);
    let bundle = narrative_bundle(category, request.tone);
    let vars = FragmentVars {
        subject: &request.subject,
        purpose: request.purpose.as_deref(),
    };
    let render = |fragment: &str| render_fragment(fragment, bundle, vars);

    let recipient = request
        .recipient
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_RECIPIENT);

    vec![
        format!("{greeting} {recipient},"),
        render(bundle.intro),
        render(bundle.body),
        format!("{} {}", render(bundle.request), render(bundle.close)),
        format!("{closing},\n{SIGNATURE_PLACEHOLDER}"),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
