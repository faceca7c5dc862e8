//! Confidence score filtering and threshold validation.

use crate::error::{Result, TadEvalError};
use crate::stats::FilterStats;
use crate::types::{Prediction, ResultsCollection};
use tracing::debug;

/// Default minimum confidence a prediction needs to be evaluated.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.3;

/// IoU thresholds reported by default.
pub const DEFAULT_IOU_THRESHOLDS: [f64; 3] = [0.1, 0.25, 0.5];

/// A score-filtered results collection and the counts behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResults {
    pub results: ResultsCollection,
    pub stats: FilterStats,
}

/// Check whether a single prediction passes the score threshold.
///
/// Predictions without a score never pass.
pub fn passes_score_threshold(prediction: &Prediction, threshold: f64) -> bool {
    prediction.score.is_some_and(|score| score >= threshold)
}

/// Filter predictions by confidence score.
///
/// Keeps predictions whose score is at least `threshold`. Every video of the
/// input keeps its entry, even if all of its predictions are removed.
///
/// # Errors
///
/// Returns an error if the threshold is NaN or infinite.
///
/// # Example
///
/// ```
/// use tad_eval::threshold::filter_by_score;
/// use tad_eval::types::{Prediction, ResultsCollection};
///
/// let mut results = ResultsCollection::new();
/// results.insert("v1".into(), vec![
///     Prediction::new(0.0, 1.0, "walk", Some(0.9)),
///     Prediction::new(2.0, 3.0, "walk", Some(0.2)),
///     Prediction::new(4.0, 5.0, "walk", None),
/// ]);
///
/// let filtered = filter_by_score(&results, 0.3).unwrap();
/// assert_eq!(filtered.results["v1"].len(), 1);
/// assert_eq!(filtered.stats.filtered_out(), 2);
/// ```
pub fn filter_by_score(results: &ResultsCollection, threshold: f64) -> Result<FilteredResults> {
    if !threshold.is_finite() {
        return Err(TadEvalError::InvalidThreshold(format!(
            "Score threshold must be finite, got {}",
            threshold
        )));
    }

    let mut stats = FilterStats::new();
    let mut filtered = ResultsCollection::with_capacity(results.len());

    for (video_id, predictions) in results {
        let mut kept = Vec::with_capacity(predictions.len());

        for prediction in predictions {
            stats.add_prediction();
            match prediction.score {
                None => stats.skip_missing_score(),
                Some(_) if !passes_score_threshold(prediction, threshold) => {
                    stats.skip_low_score()
                }
                Some(_) => kept.push(prediction.clone()),
            }
        }

        if kept.is_empty() {
            stats.empty_videos += 1;
        }
        filtered.insert(video_id.clone(), kept);
    }
    stats.processed_videos = results.len();

    debug!(summary = %stats.summary_string(), threshold, "score filter applied");

    Ok(FilteredResults {
        results: filtered,
        stats,
    })
}

/// Validate that an IoU threshold is in the valid range [0.0, 1.0].
pub fn validate_iou_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(TadEvalError::InvalidThreshold(format!(
            "IoU threshold must be between 0.0 and 1.0, got {}",
            threshold
        )));
    }
    Ok(())
}
