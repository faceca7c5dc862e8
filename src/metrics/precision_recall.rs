//! Precision and Recall calculation.

use serde::{Deserialize, Serialize};

/// Container for precision and recall values together with the counts behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecall {
    pub precision: f64,
    pub recall: f64,
    pub correct: usize,
    pub predictions: usize,
    pub ground_truth: usize,
}

/// Calculate precision: correct matches over predictions.
///
/// Returns 0.0 when there are no predictions.
///
/// # Example
///
/// ```
/// use tad_eval::metrics::precision_recall::calculate_precision;
///
/// assert_eq!(calculate_precision(8, 10), 0.8);
/// assert_eq!(calculate_precision(0, 0), 0.0);
/// ```
#[must_use]
pub fn calculate_precision(correct: usize, predictions: usize) -> f64 {
    if predictions == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let precision = correct as f64 / predictions as f64;
    precision
}

/// Calculate recall: correct matches over ground-truth segments.
///
/// Returns 0.0 when there is no ground truth.
#[must_use]
pub fn calculate_recall(correct: usize, ground_truth: usize) -> f64 {
    if ground_truth == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let recall = correct as f64 / ground_truth as f64;
    recall
}

/// Calculate precision and recall from match counts.
///
/// # Arguments
///
/// * `correct` - Number of predictions matched to a ground-truth segment
/// * `predictions` - Number of predictions evaluated
/// * `ground_truth` - Number of ground-truth segments evaluated
///
/// # Example
///
/// ```
/// use tad_eval::metrics::precision_recall::calculate_precision_recall;
///
/// let pr = calculate_precision_recall(8, 10, 11);
/// assert_eq!(pr.precision, 0.8);
/// assert!((pr.recall - 0.7272).abs() < 0.001);
/// ```
pub fn calculate_precision_recall(
    correct: usize,
    predictions: usize,
    ground_truth: usize,
) -> PrecisionRecall {
    PrecisionRecall {
        precision: calculate_precision(correct, predictions),
        recall: calculate_recall(correct, ground_truth),
        correct,
        predictions,
        ground_truth,
    }
}
