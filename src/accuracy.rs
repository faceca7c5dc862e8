//! Frame-level and segment-level accuracy.

use crate::error::Result;
use crate::frames::FrameLabels;
use crate::matching::match_first_qualifying;
use crate::types::{
    AccuracyMetrics, GroundTruthCollection, LabeledSegment, ResultsCollection, VideoRecord,
};
use tracing::{debug, warn};

/// IoU a prediction must exceed for its ground-truth segment to count as detected.
pub const DEFAULT_SEGMENT_IOU_THRESHOLD: f64 = 0.5;

/// Correct and total frame counts for one video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub correct: usize,
    pub total: usize,
}

impl FrameCounts {
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }
}

/// Frame tally for a single video.
///
/// Frames where both sides are background count as correct.
///
/// # Errors
///
/// Returns an error if the video is too long for the frame grid.
pub fn video_frame_counts<P: LabeledSegment>(
    record: &VideoRecord,
    predictions: &[P],
    frame_interval: f64,
) -> Result<FrameCounts> {
    let labels = FrameLabels::for_video(record, predictions, frame_interval)?;
    Ok(FrameCounts {
        correct: labels.correct(),
        total: labels.len(),
    })
}

/// Calculate frame-level and segment-level accuracy.
///
/// Only videos present in both collections contribute; prediction-only
/// videos are skipped without a warning.
///
/// # Arguments
///
/// * `results` - Predictions per video, already score-filtered
/// * `ground_truth` - Ground-truth records per video
/// * `frame_interval` - Frame length in seconds
/// * `segment_iou_threshold` - IoU a prediction must strictly exceed to detect a segment
///
/// # Errors
///
/// Returns [`crate::TadEvalError::InvalidDuration`] if a video needs more
/// than [`crate::frames::MAX_FRAMES_PER_VIDEO`] frames.
///
/// # Example
///
/// ```
/// use tad_eval::accuracy::calculate_accuracy;
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
/// let acc = calculate_accuracy(&results, &gt, 0.05, 0.5).unwrap();
/// assert_eq!(acc.segment_accuracy, 1.0);
/// ```
pub fn calculate_accuracy(
    results: &ResultsCollection,
    ground_truth: &GroundTruthCollection,
    frame_interval: f64,
    segment_iou_threshold: f64,
) -> Result<AccuracyMetrics> {
    let mut metrics = AccuracyMetrics::default();

    for (video_id, predictions) in results {
        let Some(record) = ground_truth.get(video_id) else {
            debug!(video_id = %video_id, "no ground truth for video, skipping accuracy");
            continue;
        };

        let frames = match video_frame_counts(record, predictions, frame_interval) {
            Ok(frames) => frames,
            Err(err) => {
                warn!(video_id = %video_id, error = %err, "cannot discretize video");
                return Err(err);
            }
        };
        let detected =
            match_first_qualifying(predictions, &record.annotations, segment_iou_threshold)
                .num_matched();

        debug!(
            video_id = %video_id,
            correct_frames = frames.correct,
            total_frames = frames.total,
            detected_segments = detected,
            total_segments = record.annotations.len(),
            "video accuracy"
        );

        metrics.correct_frames += frames.correct;
        metrics.total_frames += frames.total;
        metrics.correct_segments += detected;
        metrics.total_segments += record.annotations.len();
    }

    metrics.frame_accuracy = ratio(metrics.correct_frames, metrics.total_frames);
    metrics.segment_accuracy = ratio(metrics.correct_segments, metrics.total_segments);
    Ok(metrics)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
