//! Evaluation configuration.
//!
//! Every field has a default, so a config file only needs to name the values
//! it changes:
//!
//! ```json
//! { "score_threshold": 0.5, "iou_thresholds": [0.3, 0.5, 0.7] }
//! ```

use crate::accuracy::DEFAULT_SEGMENT_IOU_THRESHOLD;
use crate::error::{Result, TadEvalError};
use crate::frames::DEFAULT_FRAME_INTERVAL;
use crate::threshold::{validate_iou_threshold, DEFAULT_IOU_THRESHOLDS, DEFAULT_SCORE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Minimum prediction score to keep.
    pub score_threshold: f64,
    /// IoU thresholds at which precision, recall and F1 are reported.
    pub iou_thresholds: Vec<f64>,
    /// Frame length in seconds for frame-level accuracy.
    pub frame_interval: f64,
    /// IoU a prediction must strictly exceed to detect a segment.
    pub segment_iou_threshold: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            iou_thresholds: DEFAULT_IOU_THRESHOLDS.to_vec(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            segment_iou_threshold: DEFAULT_SEGMENT_IOU_THRESHOLD,
        }
    }
}

impl EvalConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EvalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.score_threshold.is_finite() {
            return Err(TadEvalError::InvalidConfig(format!(
                "score_threshold must be finite, got {}",
                self.score_threshold
            )));
        }
        if !(self.frame_interval.is_finite() && self.frame_interval > 0.0) {
            return Err(TadEvalError::InvalidConfig(format!(
                "frame_interval must be positive, got {}",
                self.frame_interval
            )));
        }
        if self.iou_thresholds.is_empty() {
            return Err(TadEvalError::InvalidConfig(
                "iou_thresholds must not be empty".to_string(),
            ));
        }
        for &threshold in &self.iou_thresholds {
            validate_iou_threshold(threshold)?;
        }
        validate_iou_threshold(self.segment_iou_threshold)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EvalConfig::default();
        config.validate().unwrap();
        assert_eq!(config.score_threshold, 0.3);
        assert_eq!(config.iou_thresholds, vec![0.1, 0.25, 0.5]);
        assert_eq!(config.frame_interval, 0.05);
        assert_eq!(config.segment_iou_threshold, 0.5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EvalConfig::from_json_str(r#"{ "score_threshold": 0.5 }"#).unwrap();
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.iou_thresholds, vec![0.1, 0.25, 0.5]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(EvalConfig::from_json_str(r#"{ "frame_interval": 0.0 }"#).is_err());
        assert!(EvalConfig::from_json_str(r#"{ "iou_thresholds": [] }"#).is_err());
        assert!(EvalConfig::from_json_str(r#"{ "iou_thresholds": [0.5, 1.2] }"#).is_err());
        assert!(EvalConfig::from_json_str(r#"{ "segment_iou_threshold": -1 }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "iou_thresholds": [0.3, 0.7] }}"#).unwrap();

        let config = EvalConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.iou_thresholds, vec![0.3, 0.7]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = EvalConfig::load_from_file("/nonexistent/tad-eval.json");
        assert!(matches!(result, Err(TadEvalError::IoError(_))));
    }
}
