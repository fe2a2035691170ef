//! Axum route handlers for the Email API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::scorer::{EmailDraft, ScoreReport};
use crate::generation::generator::{GeneratedEmail, GenerationRequest};
use crate::generation::pipeline::{compose_email, DraftSource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub email: GeneratedEmail,
    pub source: DraftSource,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub content: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub expected_tone: Option<String>,
    #[serde(default)]
    pub expected_length: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/emails/generate
///
/// Drafts an email remotely when an LLM is configured, otherwise (or on any
/// remote failure) from the local templates. Unknown tone/length values fall
/// back to professional/medium.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;

    if request.subject.trim().is_empty() {
        return Err(AppError::Validation("Subject is required".to_string()));
    }

    info!(
        "Generating {} {} email for subject {:?}",
        request.length, request.tone, request.subject
    );

    let composed = compose_email(
        state.drafter.as_deref(),
        &state.generator,
        &request,
        state.config.llm_timeout,
    )
    .await;

    Ok(Json(GenerateResponse {
        success: true,
        email: composed.email,
        source: composed.source,
    }))
}

/// POST /api/v1/emails/evaluate
///
/// Scores arbitrary email text against an expected tone and length.
/// Missing or unknown labels degrade to neutral scoring rather than failing.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let Json(request) = payload?;

    let draft = EmailDraft {
        content: request.content,
        purpose: request.purpose,
    };
    let report = state.evaluator.evaluate(
        &draft,
        request.expected_tone.as_deref().unwrap_or_default(),
        request.expected_length.as_deref().unwrap_or_default(),
    );

    info!(
        "Evaluated email: overall={:.1} grade={:?}",
        report.scores.overall, report.grade
    );

    Ok(Json(report))
}
