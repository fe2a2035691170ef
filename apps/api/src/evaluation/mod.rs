// Quality evaluation: heuristic scoring of emails against an expected tone and length.
// Pure and stateless; shares the tone/length vocabulary with the generator.

pub mod criteria;
pub mod samples;
pub mod scorer;
