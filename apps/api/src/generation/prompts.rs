// Prompt constants for remote email drafting.

use crate::generation::generator::GenerationRequest;
use crate::generation::tone::{tone_profile, EmailLength};

/// System prompt for the remote drafter.
pub const EMAIL_SYSTEM: &str = "You are an expert email writer. \
    Generate professional, engaging emails based on the user's requirements.";

/// Final instruction appended to every drafting prompt.
const CLOSING_INSTRUCTION: &str = "Please generate a well-structured email that is \
    professional, engaging, and appropriate for the context.";

/// Length guidance phrased for the remote model.
pub fn length_guideline(length: EmailLength) -> &'static str {
    match length {
        EmailLength::Short => "Keep it concise (2-3 sentences)",
        EmailLength::Medium => "Write a standard length email (1-2 paragraphs)",
        EmailLength::Long => "Write a detailed email (3+ paragraphs)",
    }
}

/// Builds the user prompt for a generation request. The tone line is followed
/// by that tone's narrative opening as a style example for the model.
pub fn build_email_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!("Write an email with the subject: \"{}\"", request.subject);

    prompt.push_str(&format!("\nTone: {}", request.tone));
    prompt.push_str(&format!(
        "\nStyle example: \"{}\"",
        tone_profile(request.tone).style.opening
    ));

    if let Some(purpose) = request.purpose.as_deref().filter(|p| !p.is_empty()) {
        prompt.push_str(&format!("\nPurpose: {purpose}"));
    }

    if let Some(recipient) = request.recipient.as_deref().filter(|r| !r.is_empty()) {
        prompt.push_str(&format!("\nRecipient: {recipient}"));
    }

    prompt.push_str(&format!("\nLength: {}", length_guideline(request.length)));
    prompt.push_str("\n\n");
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}
