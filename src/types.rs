//! Core data types for temporal annotations, predictions and evaluation results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A temporal segment in seconds.
///
/// Serialized as a two-element array `[start, end]`. `start < end` is
/// expected but not enforced; malformed segments simply never overlap
/// anything (see [`crate::metrics::iou::calculate_iou`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the segment in seconds (negative for reversed segments).
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Check that the segment has positive length.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

impl From<[f64; 2]> for Segment {
    fn from([start, end]: [f64; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Segment> for [f64; 2] {
    fn from(segment: Segment) -> Self {
        [segment.start, segment.end]
    }
}

/// Anything that occupies a labeled stretch of a video timeline.
///
/// Implemented by ground-truth [`Annotation`]s and [`Prediction`]s so the
/// frame discretizer and the matchers can treat both uniformly.
pub trait LabeledSegment {
    fn segment(&self) -> &Segment;
    fn label(&self) -> &str;
}

/// A ground-truth action instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub segment: Segment,
    pub label: String,
}

impl Annotation {
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            segment: Segment::new(start, end),
            label: label.into(),
        }
    }
}

impl LabeledSegment for Annotation {
    fn segment(&self) -> &Segment {
        &self.segment
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// A detector output for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub segment: Segment,
    pub label: String,
    /// Confidence score. Predictions without one never pass score filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Prediction {
    pub fn new(start: f64, end: f64, label: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            segment: Segment::new(start, end),
            label: label.into(),
            score,
        }
    }
}

impl LabeledSegment for Prediction {
    fn segment(&self) -> &Segment {
        &self.segment
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Ground truth for a single video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video duration in seconds. Absent or zero means "derive from annotations".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl VideoRecord {
    pub fn new(duration: Option<f64>, annotations: Vec<Annotation>) -> Self {
        Self {
            duration,
            annotations,
        }
    }
}

/// Predictions keyed by video id, in input order.
pub type ResultsCollection = IndexMap<String, Vec<Prediction>>;

/// Ground-truth records keyed by video id, in input order.
pub type GroundTruthCollection = IndexMap<String, VideoRecord>;

/// Frame- and segment-level accuracy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Fraction of frames whose predicted label equals the ground-truth label.
    pub frame_accuracy: f64,
    /// Fraction of ground-truth segments detected with IoU above the segment threshold.
    pub segment_accuracy: f64,
    pub correct_frames: usize,
    pub total_frames: usize,
    pub correct_segments: usize,
    pub total_segments: usize,
}

/// Per-label tallies from a single threshold evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub predictions: usize,
    pub ground_truth: usize,
    pub correct: usize,
}

impl LabelCounts {
    pub fn precision(&self) -> f64 {
        crate::metrics::calculate_precision(self.correct, self.predictions)
    }

    pub fn recall(&self) -> f64 {
        crate::metrics::calculate_recall(self.correct, self.ground_truth)
    }

    pub fn f1(&self) -> f64 {
        crate::metrics::calculate_f1_score(self.precision(), self.recall())
    }
}

/// Precision, recall and F1 at one IoU threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMetrics {
    pub iou_threshold: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub total_predictions: usize,
    pub total_ground_truth: usize,
    pub total_correct: usize,
    /// Breakdown by label, sorted by label name.
    pub per_label: BTreeMap<String, LabelCounts>,
}

/// Everything one evaluation run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub score_threshold: f64,
    pub filter: crate::stats::FilterStats,
    pub accuracy: AccuracyMetrics,
    pub thresholds: Vec<ThresholdMetrics>,
}

impl EvaluationReport {
    /// Look up the metrics computed for a given IoU threshold.
    pub fn at_threshold(&self, iou_threshold: f64) -> Option<&ThresholdMetrics> {
        self.thresholds
            .iter()
            .find(|m| (m.iou_threshold - iou_threshold).abs() < 1e-9)
    }
}
