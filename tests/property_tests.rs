//! Property-based tests using proptest
//!
//! These tests verify mathematical properties and invariants that should
//! always hold regardless of the input values.

use proptest::prelude::*;
use tad_eval::accuracy::calculate_accuracy;
use tad_eval::evaluator::evaluate_at_threshold;
use tad_eval::frames::{discretize, DEFAULT_FRAME_INTERVAL};
use tad_eval::metrics::{calculate_f1_score, calculate_iou, calculate_precision, calculate_recall};
use tad_eval::types::{
    Annotation, GroundTruthCollection, Prediction, ResultsCollection, Segment, VideoRecord,
};

const LABELS: [&str; 3] = ["pour", "stir", "cut"];

fn segment_strategy() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..100.0, 0.1f64..30.0).prop_map(|(start, len)| (start, start + len))
}

fn prediction_strategy() -> impl Strategy<Value = Prediction> {
    (segment_strategy(), 0usize..LABELS.len())
        .prop_map(|((start, end), label)| Prediction::new(start, end, LABELS[label], Some(0.9)))
}

fn annotation_strategy() -> impl Strategy<Value = Annotation> {
    (segment_strategy(), 0usize..LABELS.len())
        .prop_map(|((start, end), label)| Annotation::new(start, end, LABELS[label]))
}

fn video_strategy() -> impl Strategy<Value = (Vec<Prediction>, Vec<Annotation>)> {
    (
        prop::collection::vec(prediction_strategy(), 0..12),
        prop::collection::vec(annotation_strategy(), 0..12),
    )
}

fn single_video(
    predictions: Vec<Prediction>,
    annotations: Vec<Annotation>,
) -> (ResultsCollection, GroundTruthCollection) {
    let mut results = ResultsCollection::new();
    results.insert("v".to_string(), predictions);
    let mut ground_truth = GroundTruthCollection::new();
    ground_truth.insert("v".to_string(), VideoRecord::new(None, annotations));
    (results, ground_truth)
}

// Property: IoU is symmetric and bounded
proptest! {
    #[test]
    fn prop_iou_symmetric(a in segment_strategy(), b in segment_strategy()) {
        let a = Segment::new(a.0, a.1);
        let b = Segment::new(b.0, b.1);

        let iou1 = calculate_iou(&a, &b);
        let iou2 = calculate_iou(&b, &a);
        prop_assert!((iou1 - iou2).abs() < 1e-12,
                     "IoU should be symmetric: {} vs {}", iou1, iou2);
    }

    #[test]
    fn prop_iou_range(a in segment_strategy(), b in segment_strategy()) {
        let iou = calculate_iou(&Segment::new(a.0, a.1), &Segment::new(b.0, b.1));
        prop_assert!((0.0..=1.0).contains(&iou), "IoU should be in [0,1], got {}", iou);
    }

    #[test]
    fn prop_iou_self_is_one(a in segment_strategy()) {
        let seg = Segment::new(a.0, a.1);
        prop_assert!((calculate_iou(&seg, &seg) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_iou_disjoint_is_zero(
        a in segment_strategy(),
        gap in 0.0f64..10.0,
        len in 0.1f64..10.0,
    ) {
        let first = Segment::new(a.0, a.1);
        let second = Segment::new(a.1 + gap, a.1 + gap + len);
        prop_assert_eq!(calculate_iou(&first, &second), 0.0);
    }

    #[test]
    fn prop_iou_any_finite_input_bounded(
        s1 in -50.0f64..50.0, e1 in -50.0f64..50.0,
        s2 in -50.0f64..50.0, e2 in -50.0f64..50.0,
    ) {
        let iou = calculate_iou(&Segment::new(s1, e1), &Segment::new(s2, e2));
        prop_assert!((0.0..=1.0).contains(&iou));
    }
}

// Property: ratio helpers stay in [0, 1]
proptest! {
    #[test]
    fn prop_precision_recall_f1_range(
        correct in 0usize..100,
        extra_p in 0usize..100,
        extra_g in 0usize..100,
    ) {
        let p = calculate_precision(correct, correct + extra_p);
        let r = calculate_recall(correct, correct + extra_g);
        let f1 = calculate_f1_score(p, r);
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!((0.0..=1.0).contains(&r));
        prop_assert!((0.0..=1.0).contains(&f1));
    }
}

// Property: aggregate metrics respect their bounds and orderings
proptest! {
    #[test]
    fn prop_recall_monotone_in_threshold((preds, anns) in video_strategy()) {
        let (results, ground_truth) = single_video(preds, anns);

        let loose = evaluate_at_threshold(&results, &ground_truth, 0.1).unwrap();
        let strict = evaluate_at_threshold(&results, &ground_truth, 0.5).unwrap();
        prop_assert!(loose.recall >= strict.recall,
                     "recall@0.1 {} < recall@0.5 {}", loose.recall, strict.recall);
    }

    #[test]
    fn prop_correct_bounded_by_totals((preds, anns) in video_strategy(), t in 0.0f64..=1.0) {
        let (results, ground_truth) = single_video(preds, anns);

        let metrics = evaluate_at_threshold(&results, &ground_truth, t).unwrap();
        prop_assert!(metrics.total_correct <= metrics.total_predictions);
        prop_assert!(metrics.total_correct <= metrics.total_ground_truth);
        prop_assert!((0.0..=1.0).contains(&metrics.f1));
    }

    #[test]
    fn prop_segment_accuracy_bounded((preds, anns) in video_strategy()) {
        let n = anns.len();
        let (results, ground_truth) = single_video(preds, anns);

        let acc = calculate_accuracy(&results, &ground_truth, DEFAULT_FRAME_INTERVAL, 0.5).unwrap();
        prop_assert!(acc.correct_segments <= n);
        prop_assert!((0.0..=1.0).contains(&acc.segment_accuracy));
        prop_assert!((0.0..=1.0).contains(&acc.frame_accuracy));
    }

    #[test]
    fn prop_perfect_predictions((_, anns) in video_strategy()) {
        let preds: Vec<Prediction> = anns
            .iter()
            .map(|a| Prediction::new(a.segment.start, a.segment.end, a.label.clone(), Some(1.0)))
            .collect();
        let n = anns.len();
        let (results, ground_truth) = single_video(preds, anns);

        let metrics = evaluate_at_threshold(&results, &ground_truth, 0.5).unwrap();
        prop_assert_eq!(metrics.total_correct, n);
    }

    #[test]
    fn prop_discretize_length(
        anns in prop::collection::vec(annotation_strategy(), 0..8),
        n in 1usize..500,
    ) {
        let frames = discretize(&anns, n, DEFAULT_FRAME_INTERVAL);
        prop_assert_eq!(frames.len(), n);
    }
}
