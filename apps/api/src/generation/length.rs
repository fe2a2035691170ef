//! Length post-processing over an explicit sequence of paragraph blocks.
//!
//! `short` keeps the first and last block (salutation + sign-off).
//! `long` inserts the elaboration pair at every boundary between blocks.
//! `medium` is untouched.

use crate::generation::tone::EmailLength;

/// Blank line between paragraph blocks.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Inserted at each paragraph boundary of a `long` email.
pub const ELABORATION: [&str; 2] = [
    "I wanted to provide some additional context to help you understand the situation better. This matter is important to me, and I believe we can work together to find a mutually beneficial solution.",
    "Please don't hesitate to reach out if you have any questions or need clarification on any points I've mentioned.",
];

/// Reshapes paragraph blocks for the requested length.
pub fn apply_length(blocks: Vec<String>, length: EmailLength) -> Vec<String> {
    match length {
        EmailLength::Medium => blocks,
        EmailLength::Short => keep_outer_blocks(blocks),
        EmailLength::Long => elaborate_boundaries(blocks),
    }
}

/// Joins blocks with a blank line between each.
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join(PARAGRAPH_SEPARATOR)
}

fn keep_outer_blocks(mut blocks: Vec<String>) -> Vec<String> {
    if blocks.len() <= 2 {
        return blocks;
    }
    let last = blocks.pop();
    blocks.truncate(1);
    blocks.extend(last);
    blocks
}

fn elaborate_boundaries(blocks: Vec<String>) -> Vec<String> {
    let boundaries = blocks.len().saturating_sub(1);
    let mut out = Vec::with_capacity(blocks.len() + boundaries * ELABORATION.len());

    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            out.extend(ELABORATION.iter().map(|p| p.to_string()));
        }
        out.push(block);
    }
    out
}
