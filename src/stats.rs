//! Statistics tracking for score filtering
//!
//! Counts how many predictions the score filter saw, why it dropped the ones
//! it dropped, and how many videos it touched.

use serde::{Deserialize, Serialize};

/// Statistics collected while filtering predictions by score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Total number of predictions seen
    pub total_predictions: usize,

    /// Number of predictions dropped because their score was below the threshold
    pub filtered_low_score: usize,

    /// Number of predictions dropped because they carried no score
    pub filtered_missing_score: usize,

    /// Number of videos in the results collection
    pub processed_videos: usize,

    /// Number of videos left with zero predictions after filtering
    pub empty_videos: usize,
}

impl FilterStats {
    /// Create a new `FilterStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the total predictions counter
    pub fn add_prediction(&mut self) {
        self.total_predictions += 1;
    }

    /// Record a prediction dropped for a low score
    pub fn skip_low_score(&mut self) {
        self.filtered_low_score += 1;
    }

    /// Record a prediction dropped for a missing score
    pub fn skip_missing_score(&mut self) {
        self.filtered_missing_score += 1;
    }

    /// Total number of predictions removed by the filter
    pub fn filtered_out(&self) -> usize {
        self.filtered_low_score + self.filtered_missing_score
    }

    /// Number of predictions that passed the filter
    pub fn remaining(&self) -> usize {
        self.total_predictions.saturating_sub(self.filtered_out())
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "FilterStats {{ total: {}, filtered: {}, remaining: {}, videos: {}, empty: {} }}",
            self.total_predictions,
            self.filtered_out(),
            self.remaining(),
            self.processed_videos,
            self.empty_videos
        )
    }
}
