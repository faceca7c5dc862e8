//! Greedy matching of predictions to ground-truth segments within one video.
//!
//! Both passes walk predictions in input order and keep a `matched` flag per
//! ground-truth position. A ground-truth segment claimed by one prediction is
//! never offered to a later one. Neither pass is a globally optimal
//! assignment; results depend on prediction order.

use crate::metrics::iou::calculate_iou;
use crate::types::LabeledSegment;

/// Outcome of matching a single prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub prediction_index: usize,
    /// Index of the claimed ground-truth segment, if any.
    pub ground_truth_index: Option<usize>,
    /// IoU of the best candidate considered (0.0 if none).
    pub iou: f64,
    pub is_true_positive: bool,
}

/// Result of a matching pass over one video.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// One entry per prediction, in input order.
    pub matches: Vec<Match>,
    /// One flag per ground-truth segment, in input order.
    pub matched: Vec<bool>,
}

impl MatchOutcome {
    /// Number of ground-truth segments claimed by some prediction.
    pub fn num_matched(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count()
    }
}

/// Best-match-per-prediction pass used for precision/recall.
///
/// Each prediction looks at every unmatched ground-truth segment with the
/// same label and keeps the highest IoU; ties keep the earliest candidate.
/// The candidate is claimed when its IoU is at least `iou_threshold`.
/// A candidate needs positive overlap, so nothing matches at IoU 0.
pub fn match_best_per_prediction<P, G>(
    predictions: &[P],
    ground_truths: &[G],
    iou_threshold: f64,
) -> MatchOutcome
where
    P: LabeledSegment,
    G: LabeledSegment,
{
    let mut matched = vec![false; ground_truths.len()];
    let mut matches = Vec::with_capacity(predictions.len());

    for (pred_idx, pred) in predictions.iter().enumerate() {
        let mut best_iou = 0.0;
        let mut best_gt_idx: Option<usize> = None;

        for (gt_idx, gt) in ground_truths.iter().enumerate() {
            if matched[gt_idx] || gt.label() != pred.label() {
                continue;
            }

            let iou = calculate_iou(pred.segment(), gt.segment());
            if iou > best_iou {
                best_iou = iou;
                best_gt_idx = Some(gt_idx);
            }
        }

        let claimed = best_gt_idx.filter(|_| best_iou >= iou_threshold);
        if let Some(gt_idx) = claimed {
            matched[gt_idx] = true;
        }

        matches.push(Match {
            prediction_index: pred_idx,
            ground_truth_index: claimed,
            iou: best_iou,
            is_true_positive: claimed.is_some(),
        });
    }

    MatchOutcome { matches, matched }
}

/// First-qualifying-match pass used for segment accuracy.
///
/// Each prediction claims the first unmatched ground-truth segment (in list
/// order) with the same label and IoU strictly above `iou_threshold`, then
/// stops searching.
pub fn match_first_qualifying<P, G>(
    predictions: &[P],
    ground_truths: &[G],
    iou_threshold: f64,
) -> MatchOutcome
where
    P: LabeledSegment,
    G: LabeledSegment,
{
    let mut matched = vec![false; ground_truths.len()];
    let mut matches = Vec::with_capacity(predictions.len());

    for (pred_idx, pred) in predictions.iter().enumerate() {
        let mut outcome = Match {
            prediction_index: pred_idx,
            ground_truth_index: None,
            iou: 0.0,
            is_true_positive: false,
        };

        for (gt_idx, gt) in ground_truths.iter().enumerate() {
            if matched[gt_idx] || gt.label() != pred.label() {
                continue;
            }

            let iou = calculate_iou(pred.segment(), gt.segment());
            if iou > iou_threshold {
                matched[gt_idx] = true;
                outcome.ground_truth_index = Some(gt_idx);
                outcome.iou = iou;
                outcome.is_true_positive = true;
                break;
            }
        }

        matches.push(outcome);
    }

    MatchOutcome { matches, matched }
}
