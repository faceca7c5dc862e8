//! Temporal Intersection over Union (IoU) calculation.

use crate::types::Segment;

/// Calculate the temporal Intersection over Union between two segments.
///
/// IoU is the length of the overlap divided by the length of the union.
/// Touching or disjoint segments return exactly 0.0, as do reversed
/// segments (`end <= start`) and a zero-length union, so the result is
/// always a finite value in `[0.0, 1.0]` for finite inputs.
///
/// # Arguments
///
/// * `pred` - Predicted segment
/// * `gt` - Ground-truth segment
///
/// # Example
///
/// ```
/// use tad_eval::metrics::iou::calculate_iou;
/// use tad_eval::types::Segment;
///
/// let iou = calculate_iou(&Segment::new(0.0, 9.0), &Segment::new(0.0, 10.0));
/// assert!((iou - 0.9).abs() < 1e-12);
/// ```
pub fn calculate_iou(pred: &Segment, gt: &Segment) -> f64 {
    let intersection = pred.end.min(gt.end) - pred.start.max(gt.start);

    // Also catches NaN endpoints.
    if !(intersection > 0.0) {
        return 0.0;
    }

    let union = pred.length() + gt.length() - intersection;
    if !(union > 0.0) {
        return 0.0;
    }

    (intersection / union).min(1.0)
}
