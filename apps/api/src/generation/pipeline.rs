//! Remote-first drafting with local fallback.
//!
//! A remote drafter (the LLM client) is raced against a timeout. Any failure,
//! timeout or blank response falls back to the template generator, which is
//! synchronous and needs no setup.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::generation::generator::{EmailGenerator, GeneratedEmail, GenerationRequest};
use crate::generation::prompts::{build_email_prompt, EMAIL_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Remote text source for email bodies. Implement this to swap backends
/// without touching the handler.
///
/// Carried in `AppState` as `Option<Arc<dyn EmailDrafter>>`.
#[async_trait]
pub trait EmailDrafter: Send + Sync {
    async fn draft(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl EmailDrafter for LlmClient {
    async fn draft(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.call_text(prompt, system).await
    }
}

/// Which path produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    Llm,
    Template,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposedEmail {
    pub email: GeneratedEmail,
    pub source: DraftSource,
}

/// Drafts remotely when a drafter is configured, falling back to `generator`.
pub async fn compose_email(
    drafter: Option<&dyn EmailDrafter>,
    generator: &EmailGenerator,
    request: &GenerationRequest,
    timeout: Duration,
) -> ComposedEmail {
    if let Some(drafter) = drafter {
        match draft_remote(drafter, request, timeout).await {
            Ok(content) => {
                info!("Drafted email remotely for subject {:?}", request.subject);
                return ComposedEmail {
                    email: GeneratedEmail::from_request(request, content),
                    source: DraftSource::Llm,
                };
            }
            Err(e) => warn!("Remote drafting failed, using template generator: {e}"),
        }
    }

    ComposedEmail {
        email: generator.generate(request),
        source: DraftSource::Template,
    }
}

async fn draft_remote(
    drafter: &dyn EmailDrafter,
    request: &GenerationRequest,
    timeout: Duration,
) -> Result<String, LlmError> {
    let prompt = build_email_prompt(request);
    let content = tokio::time::timeout(timeout, drafter.draft(&prompt, EMAIL_SYSTEM))
        .await
        .map_err(|_| LlmError::Timeout(timeout))??;

    if content.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator::SIGNATURE_PLACEHOLDER;
    use crate::generation::tone::Tone;

    struct FixedDrafter(&'static str);

    #[async_trait]
    impl EmailDrafter for FixedDrafter {
        async fn draft(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
            assert!(prompt.contains("Write an email with the subject"));
            assert_eq!(system, EMAIL_SYSTEM);
            Ok(self.0.to_string())
        }
    }

    struct FailingDrafter;

    #[async_trait]
    impl EmailDrafter for FailingDrafter {
        async fn draft(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 401,
                message: "Invalid API key".to_string(),
            })
        }
    }

    struct SlowDrafter;

    #[async_trait]
    impl EmailDrafter for SlowDrafter {
        async fn draft(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("Coffee Chat")
            .tone(Tone::Casual)
            .recipient("Mike")
    }

    #[tokio::test]
    async fn test_remote_success_is_used() {
        let drafter = FixedDrafter("Hey Mike,\n\nCoffee soon?\n\nCheers,\nJo");
        let composed = compose_email(
            Some(&drafter),
            &EmailGenerator,
            &request(),
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(composed.source, DraftSource::Llm);
        assert_eq!(composed.email.content, "Hey Mike,\n\nCoffee soon?\n\nCheers,\nJo");
        assert_eq!(composed.email.tone, Tone::Casual);
    }

    #[tokio::test]
    async fn test_remote_error_falls_back() {
        let composed = compose_email(
            Some(&FailingDrafter),
            &EmailGenerator,
            &request(),
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(composed.source, DraftSource::Template);
        assert!(composed.email.content.ends_with(SIGNATURE_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_blank_remote_content_falls_back() {
        let composed = compose_email(
            Some(&FixedDrafter("  \n ")),
            &EmailGenerator,
            &request(),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(composed.source, DraftSource::Template);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_timeout_falls_back() {
        let composed = compose_email(
            Some(&SlowDrafter),
            &EmailGenerator,
            &request(),
            Duration::from_secs(2),
        )
        .await;
        assert_eq!(composed.source, DraftSource::Template);
        assert!(composed.email.content.contains("Mike,"));
    }

    #[tokio::test]
    async fn test_no_drafter_uses_template() {
        let composed =
            compose_email(None, &EmailGenerator, &request(), Duration::from_secs(5)).await;
        assert_eq!(composed.source, DraftSource::Template);
    }

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DraftSource::Llm).unwrap(), "\"llm\"");
        assert_eq!(
            serde_json::to_string(&DraftSource::Template).unwrap(),
            "\"template\""
        );
    }
}
