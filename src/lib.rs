//! # tad-eval
//!
//! A Rust library for evaluating temporal action detection and segmentation
//! output against per-video ground truth.
//!
//! This library provides:
//! - **Temporal IoU** between two time segments
//! - **Frame-level accuracy** on a fixed 50 ms frame grid
//! - **Segment-level accuracy** (ground-truth segments detected with IoU > 0.5)
//! - **Precision**, **Recall** and **F1** at multiple IoU thresholds
//!   (F1@10%, F1@25%, F1@50% by default), with a per-label breakdown
//! - Confidence-score filtering of predictions before evaluation
//!
//! Matching is greedy and follows input order; it is not an optimal
//! assignment, and reordering predictions can change the numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use tad_eval::config::EvalConfig;
//! use tad_eval::evaluator::evaluate;
//! use tad_eval::loader::{load_ground_truth_from_str, load_results_from_str};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ground_truth = load_ground_truth_from_str(r#"{
//!     "database": {
//!         "v1": {"duration": 10.0, "annotations": [{"segment": [0.0, 10.0], "label": "walk"}]}
//!     }
//! }"#)?;
//! let results = load_results_from_str(r#"{
//!     "v1": [{"segment": [0.0, 9.0], "label": "walk", "score": 0.9}]
//! }"#)?;
//!
//! let report = evaluate(&results, &ground_truth, &EvalConfig::default())?;
//! println!("F1@50%: {:.4}", report.at_threshold(0.5).unwrap().f1 * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Input Format
//!
//! Results map video ids to predictions, optionally wrapped in a `results` key:
//!
//! ```json
//! {
//!   "results": {
//!     "video_1": [
//!       { "segment": [1.2, 4.8], "label": "pour", "score": 0.93 }
//!     ]
//!   }
//! }
//! ```
//!
//! Ground truth lives under a `database` key:
//!
//! ```json
//! {
//!   "database": {
//!     "video_1": {
//!       "duration": 30.0,
//!       "annotations": [ { "segment": [1.0, 5.0], "label": "pour" } ]
//!     }
//!   }
//! }
//! ```

pub mod error;
pub mod types;
pub mod loader;
pub mod config;
pub mod threshold;
pub mod stats;
pub mod metrics;
pub mod frames;
pub mod matching;
pub mod accuracy;
pub mod evaluator;
pub mod report;

// Re-export commonly used types and functions
pub use error::{Result, TadEvalError};
pub use types::{
    AccuracyMetrics, Annotation, EvaluationReport, GroundTruthCollection, LabelCounts,
    LabeledSegment, Prediction, ResultsCollection, Segment, ThresholdMetrics, VideoRecord,
};
pub use config::EvalConfig;
pub use loader::{
    load_ground_truth_from_file, load_ground_truth_from_str, load_results_from_file,
    load_results_from_str,
};
pub use threshold::{filter_by_score, FilteredResults};
pub use accuracy::calculate_accuracy;
pub use evaluator::{evaluate, evaluate_at_threshold};
