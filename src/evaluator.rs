//! Main evaluation orchestrator for temporal action detection metrics.

use crate::accuracy::calculate_accuracy;
use crate::config::EvalConfig;
use crate::error::Result;
use crate::matching::match_best_per_prediction;
use crate::metrics::f1_score::calculate_f1_score;
use crate::metrics::precision_recall::calculate_precision_recall;
use crate::threshold::{filter_by_score, validate_iou_threshold};
use crate::types::{
    EvaluationReport, GroundTruthCollection, LabelCounts, ResultsCollection, ThresholdMetrics,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Evaluate precision, recall and F1 at a single IoU threshold.
///
/// Videos are taken from `results`; a video with no ground-truth record is
/// skipped with a warning and contributes nothing. Within a video each
/// prediction, in order, claims its best unmatched same-label ground-truth
/// segment if that IoU reaches `iou_threshold`.
///
/// # Arguments
///
/// * `results` - Predictions per video, already score-filtered
/// * `ground_truth` - Ground-truth records per video
/// * `iou_threshold` - Minimum IoU for a match
///
/// # Errors
///
/// Returns an error if `iou_threshold` is outside [0.0, 1.0].
pub fn evaluate_at_threshold(
    results: &ResultsCollection,
    ground_truth: &GroundTruthCollection,
    iou_threshold: f64,
) -> Result<ThresholdMetrics> {
    validate_iou_threshold(iou_threshold)?;

    let mut total_predictions = 0;
    let mut total_ground_truth = 0;
    let mut total_correct = 0;
    let mut per_label: BTreeMap<String, LabelCounts> = BTreeMap::new();

    for (video_id, predictions) in results {
        let Some(record) = ground_truth.get(video_id) else {
            warn!(video_id = %video_id, "video in results but not in ground truth");
            continue;
        };

        let outcome = match_best_per_prediction(predictions, &record.annotations, iou_threshold);

        total_predictions += predictions.len();
        total_ground_truth += record.annotations.len();

        for (prediction, m) in predictions.iter().zip(&outcome.matches) {
            let counts = per_label.entry(prediction.label.clone()).or_default();
            counts.predictions += 1;
            if m.is_true_positive {
                counts.correct += 1;
                total_correct += 1;
            }
        }
        for annotation in &record.annotations {
            per_label
                .entry(annotation.label.clone())
                .or_default()
                .ground_truth += 1;
        }
    }

    let pr = calculate_precision_recall(total_correct, total_predictions, total_ground_truth);
    let f1 = calculate_f1_score(pr.precision, pr.recall);

    debug!(
        iou_threshold,
        total_correct, total_predictions, total_ground_truth, "threshold evaluated"
    );

    Ok(ThresholdMetrics {
        iou_threshold,
        precision: pr.precision,
        recall: pr.recall,
        f1,
        total_predictions,
        total_ground_truth,
        total_correct,
        per_label,
    })
}

/// Run a full evaluation.
///
/// Predictions are score-filtered once; accuracy and every per-threshold
/// evaluation then run on the same filtered collection. Thresholds are
/// independent and are evaluated in parallel; the report lists them in
/// configuration order.
///
/// # Arguments
///
/// * `results` - Raw, unfiltered predictions per video
/// * `ground_truth` - Ground-truth records per video
/// * `config` - Evaluation parameters
///
/// # Example
///
/// ```
/// use tad_eval::config::EvalConfig;
/// use tad_eval::evaluator::evaluate;
/// use tad_eval::types::{
///     Annotation, GroundTruthCollection, Prediction, ResultsCollection, VideoRecord,
/// };
///
/// let mut gt = GroundTruthCollection::new();
/// let walk = vec![Annotation::new(0.0, 10.0, "walk")];
/// gt.insert("v1".into(), VideoRecord::new(Some(10.0), walk));
/// let mut results = ResultsCollection::new();
/// results.insert("v1".into(), vec![Prediction::new(0.0, 9.0, "walk", Some(0.9))]);
///
/// let report = evaluate(&results, &gt, &EvalConfig::default()).unwrap();
/// assert_eq!(report.at_threshold(0.5).unwrap().f1, 1.0);
/// ```
pub fn evaluate(
    results: &ResultsCollection,
    ground_truth: &GroundTruthCollection,
    config: &EvalConfig,
) -> Result<EvaluationReport> {
    config.validate()?;

    let filtered = filter_by_score(results, config.score_threshold)?;
    info!(
        total = filtered.stats.total_predictions,
        filtered_out = filtered.stats.filtered_out(),
        remaining = filtered.stats.remaining(),
        "filtered predictions by score"
    );

    let accuracy = calculate_accuracy(
        &filtered.results,
        ground_truth,
        config.frame_interval,
        config.segment_iou_threshold,
    )?;

    let thresholds = config
        .iou_thresholds
        .par_iter()
        .map(|&iou_threshold| evaluate_at_threshold(&filtered.results, ground_truth, iou_threshold))
        .collect::<Result<Vec<_>>>()?;

    info!(videos = filtered.results.len(), thresholds = thresholds.len(), "evaluation complete");

    Ok(EvaluationReport {
        score_threshold: config.score_threshold,
        filter: filtered.stats,
        accuracy,
        thresholds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Annotation, Prediction, VideoRecord};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between a test and its fmt subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn walk_dataset(pred_label: &str, score: f64) -> (ResultsCollection, GroundTruthCollection) {
        let mut gt = GroundTruthCollection::new();
        gt.insert(
            "v1".to_string(),
            VideoRecord::new(Some(10.0), vec![Annotation::new(0.0, 10.0, "walk")]),
        );
        let mut results = ResultsCollection::new();
        results.insert(
            "v1".to_string(),
            vec![Prediction::new(0.0, 9.0, pred_label, Some(score))],
        );
        (results, gt)
    }

    #[test]
    fn test_walk_scenario() {
        let (results, gt) = walk_dataset("walk", 0.9);
        let metrics = evaluate_at_threshold(&results, &gt, 0.5).unwrap();

        assert_eq!(metrics.precision, 1.0);
        assert_eq!(metrics.recall, 1.0);
        assert_eq!(metrics.f1, 1.0);
        assert_eq!(metrics.per_label["walk"].correct, 1);
    }

    #[test]
    fn test_label_mismatch() {
        let (results, gt) = walk_dataset("run", 0.9);
        let metrics = evaluate_at_threshold(&results, &gt, 0.1).unwrap();

        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
        assert_eq!(metrics.per_label["run"].predictions, 1);
        assert_eq!(metrics.per_label["walk"].ground_truth, 1);
    }

    #[test]
    fn test_unknown_video_does_not_count() {
        let (mut results, gt) = walk_dataset("walk", 0.9);
        results.insert(
            "ghost".to_string(),
            vec![Prediction::new(0.0, 1.0, "walk", Some(0.9))],
        );

        let metrics = evaluate_at_threshold(&results, &gt, 0.5).unwrap();
        assert_eq!(metrics.total_predictions, 1);
        assert_eq!(metrics.precision, 1.0);
    }

    #[test]
    fn test_unknown_video_warns_on_every_evaluation() {
        let (mut results, gt) = walk_dataset("walk", 0.9);
        results.insert(
            "ghost".to_string(),
            vec![Prediction::new(0.0, 1.0, "walk", Some(0.9))],
        );

        let output = with_captured_logs(|| {
            evaluate_at_threshold(&results, &gt, 0.5).unwrap();
            evaluate_at_threshold(&results, &gt, 0.1).unwrap();
        });

        let warnings: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("video in results but not in ground truth"))
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings
            .iter()
            .all(|line| line.contains("WARN") && line.contains("video_id=ghost")));
        assert!(!output.contains("video_id=v1"));
    }

    #[test]
    fn test_known_videos_do_not_warn() {
        let (results, gt) = walk_dataset("walk", 0.9);
        let output = with_captured_logs(|| {
            evaluate_at_threshold(&results, &gt, 0.5).unwrap();
        });
        assert!(output.is_empty(), "unexpected log output: {}", output);
    }

    #[test]
    fn test_ground_truth_only_video_does_not_count() {
        let (results, mut gt) = walk_dataset("walk", 0.9);
        gt.insert(
            "unpredicted".to_string(),
            VideoRecord::new(Some(5.0), vec![Annotation::new(0.0, 5.0, "run")]),
        );

        let metrics = evaluate_at_threshold(&results, &gt, 0.5).unwrap();
        assert_eq!(metrics.total_ground_truth, 1);
        assert_eq!(metrics.recall, 1.0);
    }

    #[test]
    fn test_invalid_iou_threshold() {
        let (results, gt) = walk_dataset("walk", 0.9);
        assert!(evaluate_at_threshold(&results, &gt, 1.5).is_err());
    }

    #[test]
    fn test_evaluate_filters_before_metrics() {
        let (results, gt) = walk_dataset("walk", 0.2);
        let report = evaluate(&results, &gt, &EvalConfig::default()).unwrap();

        assert_eq!(report.filter.total_predictions, 1);
        assert_eq!(report.filter.filtered_out(), 1);
        for metrics in &report.thresholds {
            assert_eq!(metrics.total_predictions, 0);
            assert_eq!(metrics.total_ground_truth, 1);
            assert_eq!(metrics.f1, 0.0);
        }
        assert_eq!(report.accuracy.segment_accuracy, 0.0);
    }

    #[test]
    fn test_evaluate_keeps_threshold_order() {
        let (results, gt) = walk_dataset("walk", 0.9);
        let config = EvalConfig {
            iou_thresholds: vec![0.5, 0.1, 0.95, 0.25],
            ..EvalConfig::default()
        };

        let report = evaluate(&results, &gt, &config).unwrap();
        let order: Vec<f64> = report.thresholds.iter().map(|m| m.iou_threshold).collect();
        assert_eq!(order, vec![0.5, 0.1, 0.95, 0.25]);
        assert_eq!(report.at_threshold(0.95).unwrap().total_correct, 0);
    }

    #[test]
    fn test_evaluate_rejects_oversized_video() {
        let (results, mut gt) = walk_dataset("walk", 0.9);
        gt["v1"].duration = Some(1e30);

        let result = evaluate(&results, &gt, &EvalConfig::default());
        assert!(matches!(result, Err(crate::TadEvalError::InvalidDuration(_))));
    }
}
