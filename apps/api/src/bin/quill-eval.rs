//! Offline quality run: scores the built-in sample emails and a seeded sweep
//! of template-generated emails, logging per-email scores and averages.
//!
//! Usage: `quill-eval [seed]` (default seed 42). Prints the full run as JSON on stdout.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quill::evaluation::samples::{run_generator_evaluation, run_sample_evaluation, EvaluationRun};
use quill::evaluation::scorer::QualityEvaluator;
use quill::generation::generator::EmailGenerator;

const DEFAULT_SEED: u64 = 42;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let seed = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got '{raw}'"))?,
        None => DEFAULT_SEED,
    };

    let evaluator = QualityEvaluator::default();

    info!("Running sample email evaluation");
    let samples = run_sample_evaluation(&evaluator);
    log_run("samples", &samples);

    info!("Running template generator evaluation (seed {seed})");
    let generated = run_generator_evaluation(&EmailGenerator, &evaluator, seed);
    log_run("generated", &generated);

    let output = serde_json::json!({
        "samples": samples,
        "generated": generated,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn log_run(label: &str, run: &EvaluationRun) {
    for result in &run.results {
        let scores = &result.evaluation.scores;
        info!(
            "[{label}] {} ({} / {}): overall {:.1} ({:?}) tone {:.1} structure {:.1} content {:.1} length {:.1}",
            result.subject,
            result.tone,
            result.length,
            scores.overall,
            result.evaluation.grade,
            scores.tone,
            scores.structure,
            scores.content,
            scores.length,
        );
        if !result.evaluation.feedback.is_empty() {
            info!("[{label}]   feedback: {}", result.evaluation.feedback.join(" "));
        }
    }

    let s = &run.summary;
    info!(
        "[{label}] averages over {} emails: overall {:.1} tone {:.1} structure {:.1} content {:.1} length {:.1}",
        run.results.len(),
        s.avg_overall,
        s.avg_tone,
        s.avg_structure,
        s.avg_content,
        s.avg_length,
    );
}
