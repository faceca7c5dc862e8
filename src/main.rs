//! `tad-eval` binary: score a results file against a ground-truth database.
//!
//! # Usage
//!
//! ```bash
//! tad-eval --results results.json --labels labels.json --score_threshold 0.3
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tad_eval::config::EvalConfig;
use tad_eval::evaluator::evaluate;
use tad_eval::loader::{load_ground_truth_from_file, load_results_from_file};
use tad_eval::report::{render_per_label, render_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tad-eval",
    version,
    about = "Calculate temporal action detection metrics",
    long_about = None
)]
struct Args {
    /// Path to the results JSON file
    #[arg(long, value_name = "FILE")]
    results: PathBuf,

    /// Path to the ground-truth labels JSON file
    #[arg(long, value_name = "FILE")]
    labels: PathBuf,

    /// Minimum confidence score threshold (default: 0.3)
    #[arg(long = "score_threshold", alias = "score-threshold")]
    score_threshold: Option<f64>,

    /// JSON configuration file; command-line flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// IoU thresholds to report (comma-separated, e.g. "0.1,0.25,0.5")
    #[arg(long, value_delimiter = ',')]
    iou_thresholds: Option<Vec<f64>>,

    /// Also print per-label metrics
    #[arg(long, default_value_t = false)]
    per_label: bool,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tad_eval={}", args.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = match &args.config {
        Some(path) => EvalConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EvalConfig::default(),
    };
    if let Some(score_threshold) = args.score_threshold {
        config.score_threshold = score_threshold;
    }
    if let Some(iou_thresholds) = args.iou_thresholds {
        config.iou_thresholds = iou_thresholds;
    }

    info!("Loading results from {}", args.results.display());
    let results = load_results_from_file(&args.results)
        .with_context(|| format!("failed to load results from {}", args.results.display()))?;

    info!("Loading ground truth from {}", args.labels.display());
    let ground_truth = load_ground_truth_from_file(&args.labels)
        .with_context(|| format!("failed to load labels from {}", args.labels.display()))?;

    let report = evaluate(&results, &ground_truth, &config).context("evaluation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
        if args.per_label {
            print!("{}", render_per_label(&report));
        }
    }

    Ok(())
}
