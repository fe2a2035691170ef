//! Quill: rule-based email drafting and heuristic quality scoring.
//!
//! Two pure components sit at the core:
//!
//! - [`generation::generator::EmailGenerator`] maps subject, tone, purpose,
//!   recipient and length to a complete email body.
//! - [`evaluation::scorer::QualityEvaluator`] scores email text against an
//!   expected tone and length, producing sub-scores, a letter grade and feedback.
//!
//! Around them, a thin axum service tries an optional remote LLM first and
//! falls back to the local generator on any failure or timeout.
//!
//! # Example
//!
//! ```
//! use quill::evaluation::scorer::{EmailDraft, QualityEvaluator};
//! use quill::generation::generator::{EmailGenerator, GenerationRequest};
//! use quill::generation::tone::{EmailLength, Tone};
//!
//! let request = GenerationRequest::new("Coffee Chat")
//!     .tone(Tone::Casual)
//!     .recipient("Mike")
//!     .length(EmailLength::Medium);
//! let email = EmailGenerator.generate(&request);
//! assert!(email.content.ends_with("[Your Name]"));
//!
//! let report = QualityEvaluator::default().evaluate(
//!     &EmailDraft::new(email.content, None),
//!     "casual",
//!     "medium",
//! );
//! assert!(report.scores.overall <= 100.0);
//! ```

pub mod config;
pub mod errors;
pub mod evaluation;
pub mod generation;
pub mod llm_client;
pub mod routes;
pub mod state;
