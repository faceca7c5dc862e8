//! JSON loading utilities for detection results and ground-truth databases.
//!
//! Results files are either a bare mapping from video id to predictions, or
//! an object whose `results` key holds that mapping. Ground-truth files keep
//! their videos under a `database` key.

use crate::error::{Result, TadEvalError};
use crate::types::{GroundTruthCollection, ResultsCollection};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a results collection from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```no_run
/// use tad_eval::loader::load_results_from_file;
///
/// let results = load_results_from_file("results.json").unwrap();
/// println!("Loaded predictions for {} videos", results.len());
/// ```
pub fn load_results_from_file<P: AsRef<Path>>(path: P) -> Result<ResultsCollection> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    results_from_value(value)
}

/// Load a results collection from a JSON string.
///
/// # Example
///
/// ```
/// use tad_eval::loader::load_results_from_str;
///
/// let json = r#"{
///     "version": "1.0",
///     "results": {
///         "v1": [{"segment": [0.0, 9.0], "label": "walk", "score": 0.9}]
///     }
/// }"#;
/// let results = load_results_from_str(json).unwrap();
/// assert_eq!(results["v1"].len(), 1);
/// ```
pub fn load_results_from_str(json_str: &str) -> Result<ResultsCollection> {
    let value: Value = serde_json::from_str(json_str)?;
    results_from_value(value)
}

/// Load a ground-truth collection from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or has no `database` key.
pub fn load_ground_truth_from_file<P: AsRef<Path>>(path: P) -> Result<GroundTruthCollection> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    ground_truth_from_value(value)
}

/// Load a ground-truth collection from a JSON string.
///
/// # Example
///
/// ```
/// use tad_eval::loader::load_ground_truth_from_str;
///
/// let json = r#"{
///     "database": {
///         "v1": {"duration": 10.0, "annotations": [{"segment": [0.0, 10.0], "label": "walk"}]}
///     }
/// }"#;
/// let gt = load_ground_truth_from_str(json).unwrap();
/// assert_eq!(gt["v1"].annotations.len(), 1);
/// ```
pub fn load_ground_truth_from_str(json_str: &str) -> Result<GroundTruthCollection> {
    let value: Value = serde_json::from_str(json_str)?;
    ground_truth_from_value(value)
}

fn results_from_value(mut value: Value) -> Result<ResultsCollection> {
    if let Some(inner) = value.get_mut("results") {
        return Ok(serde_json::from_value(inner.take())?);
    }
    Ok(serde_json::from_value(value)?)
}

fn ground_truth_from_value(mut value: Value) -> Result<GroundTruthCollection> {
    let database = value
        .get_mut("database")
        .map(Value::take)
        .ok_or_else(|| TadEvalError::MissingField("database".to_string()))?;
    Ok(serde_json::from_value(database)?)
}
