// Email generation: tone tables, subject classification, narrative templates,
// length shaping, and the remote-first drafting pipeline.
// Remote calls go through llm_client via the EmailDrafter trait only.

pub mod generator;
pub mod handlers;
pub mod length;
pub mod pipeline;
pub mod prompts;
pub mod subject;
pub mod templates;
pub mod tone;
