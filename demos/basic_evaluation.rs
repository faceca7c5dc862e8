//! Basic evaluation example demonstrating core functionality.

use tad_eval::{
    config::EvalConfig,
    evaluator::evaluate,
    filter_by_score, load_ground_truth_from_str, load_results_from_str,
    metrics::iou::calculate_iou,
    report::render_report,
    Segment,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Temporal Action Detection Evaluation Example ===\n");

    // Example 1: Temporal IoU
    println!("1. Temporal IoU Calculation");
    let seg1 = Segment::new(0.0, 9.0);
    let seg2 = Segment::new(0.0, 10.0);
    println!("   IoU between [0, 9] and [0, 10]: {:.4}", calculate_iou(&seg1, &seg2));
    println!();

    // Example 2: Load ground truth
    println!("2. Loading Ground Truth");
    let ground_truth_json = r#"{
        "database": {
            "kitchen_01": {
                "subset": "validation",
                "duration": 20.0,
                "annotations": [
                    {"segment": [1.0, 6.0], "label": "pour"},
                    {"segment": [7.0, 12.0], "label": "stir"},
                    {"segment": [14.0, 18.0], "label": "close"}
                ]
            },
            "kitchen_02": {
                "duration": 12.0,
                "annotations": [
                    {"segment": [0.5, 4.0], "label": "open"},
                    {"segment": [5.0, 11.0], "label": "pour"}
                ]
            }
        }
    }"#;

    let ground_truth = load_ground_truth_from_str(ground_truth_json)?;
    let num_annotations: usize = ground_truth.values().map(|r| r.annotations.len()).sum();
    println!(
        "   Loaded {} annotations across {} videos",
        num_annotations,
        ground_truth.len()
    );
    println!();

    // Example 3: Load predictions
    println!("3. Loading Predictions");
    let results_json = r#"{
        "version": "1.0",
        "results": {
            "kitchen_01": [
                {"segment": [1.2, 5.8], "label": "pour", "score": 0.93},
                {"segment": [7.5, 11.0], "label": "stir", "score": 0.81},
                {"segment": [13.0, 15.0], "label": "open", "score": 0.44},
                {"segment": [15.0, 16.0], "label": "close", "score": 0.12}
            ],
            "kitchen_02": [
                {"segment": [0.0, 4.5], "label": "open", "score": 0.88},
                {"segment": [6.0, 9.0], "label": "pour", "score": 0.67}
            ]
        }
    }"#;

    let results = load_results_from_str(results_json)?;
    let num_predictions: usize = results.values().map(Vec::len).sum();
    println!("   Loaded {} predictions", num_predictions);
    println!();

    // Example 4: Confidence filtering
    println!("4. Confidence Thresholding");
    for threshold in [0.3, 0.5, 0.9] {
        let filtered = filter_by_score(&results, threshold)?;
        println!(
            "   score >= {:.1}: {} remaining, {} filtered out",
            threshold,
            filtered.stats.remaining(),
            filtered.stats.filtered_out()
        );
    }
    println!();

    // Example 5: Full evaluation
    println!("5. Running Full Evaluation");
    let config = EvalConfig::default();
    let report = evaluate(&results, &ground_truth, &config)?;
    println!("{}", render_report(&report));

    // Example 6: Per-label breakdown at the strictest threshold
    println!("6. Per-Label Breakdown");
    if let Some(metrics) = report.thresholds.last() {
        println!("   IoU threshold {:.2}", metrics.iou_threshold);
        for (label, counts) in &metrics.per_label {
            println!(
                "   ├─ {:<6} F1 {:.4} ({} correct / {} predicted / {} annotated)",
                label,
                counts.f1(),
                counts.correct,
                counts.predictions,
                counts.ground_truth
            );
        }
    }
    println!();

    // Example 7: Manual precision/recall calculation
    println!("7. Computing Precision and Recall (Manual Example)");
    use tad_eval::metrics::f1_score::calculate_f1_from_pr;
    use tad_eval::metrics::precision_recall::calculate_precision_recall;

    let pr = calculate_precision_recall(8, 10, 11);
    println!("   For 8 correct, 10 predictions, 11 ground-truth segments:");
    println!("   ├─ Precision: {:.4} ({}/{})", pr.precision, pr.correct, pr.predictions);
    println!("   ├─ Recall: {:.4} ({}/{})", pr.recall, pr.correct, pr.ground_truth);
    println!("   └─ F1 Score: {:.4}", calculate_f1_from_pr(&pr));
    println!();

    println!("=== Example Complete ===");

    Ok(())
}
