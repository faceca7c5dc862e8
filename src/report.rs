//! Console rendering of an [`EvaluationReport`].

use crate::types::EvaluationReport;
use std::fmt::{self, Write};

const SEPARATOR_WIDTH: usize = 50;

/// Render the report as the plain-text summary printed by the CLI.
///
/// Ratios are shown as percentages with four decimals; thresholds are
/// labeled by their rounded percentage (`F1@25%`).
pub fn render_report(report: &EvaluationReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

/// Render per-label F1/precision/recall for every threshold.
pub fn render_per_label(report: &EvaluationReport) -> String {
    let mut out = String::new();
    let _ = write_per_label(&mut out, report);
    out
}

/// Write the plain-text summary to any formatter sink.
pub fn write_report<W: Write>(out: &mut W, report: &EvaluationReport) -> fmt::Result {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    writeln!(out, "Filtering Results:")?;
    writeln!(out, "Total predictions: {}", report.filter.total_predictions)?;
    writeln!(
        out,
        "Filtered out (score < {}): {}",
        report.score_threshold,
        report.filter.filtered_out()
    )?;
    writeln!(out, "Remaining predictions: {}", report.filter.remaining())?;

    writeln!(out, "\nAccuracy Metrics:")?;
    writeln!(
        out,
        "Frame-level Accuracy: {:.4}%",
        report.accuracy.frame_accuracy * 100.0
    )?;
    writeln!(
        out,
        "Segment-level Accuracy: {:.4}%",
        report.accuracy.segment_accuracy * 100.0
    )?;

    writeln!(out, "\nF1 Score Metrics:")?;
    writeln!(out, "{}", separator)?;
    for metrics in &report.thresholds {
        let pct = threshold_percent(metrics.iou_threshold);
        writeln!(out, "F1@{}%: {:.4}", pct, metrics.f1 * 100.0)?;
        writeln!(out, "Precision@{}%: {:.4}", pct, metrics.precision * 100.0)?;
        writeln!(out, "Recall@{}%: {:.4}", pct, metrics.recall * 100.0)?;
        writeln!(out, "{}", separator)?;
    }

    Ok(())
}

fn write_per_label<W: Write>(out: &mut W, report: &EvaluationReport) -> fmt::Result {
    for metrics in &report.thresholds {
        writeln!(
            out,
            "\nPer-label metrics @ IoU {}%:",
            threshold_percent(metrics.iou_threshold)
        )?;
        writeln!(
            out,
            "{:<24} {:>10} {:>10} {:>10} {:>6} {:>6}",
            "label", "F1", "Precision", "Recall", "pred", "gt"
        )?;
        for (label, counts) in &metrics.per_label {
            writeln!(
                out,
                "{:<24} {:>10.4} {:>10.4} {:>10.4} {:>6} {:>6}",
                label,
                counts.f1() * 100.0,
                counts.precision() * 100.0,
                counts.recall() * 100.0,
                counts.predictions,
                counts.ground_truth
            )?;
        }
    }

    Ok(())
}

fn threshold_percent(iou_threshold: f64) -> String {
    format!("{:.0}", iou_threshold * 100.0)
}
