//! Discretization of a video timeline into fixed-interval frame labels.
//!
//! A video of duration `d` sampled every `interval` seconds has
//! `floor(d / interval) + 1` frames. Every frame starts as
//! [`FrameLabel::Background`]; each labeled segment then paints frames
//! `floor(start / interval) ..= floor(end / interval)` (clamped to the
//! video), with later segments overwriting earlier ones.

use crate::error::{Result, TadEvalError};
use crate::types::{LabeledSegment, VideoRecord};

/// Default sampling interval: 50 ms.
pub const DEFAULT_FRAME_INTERVAL: f64 = 0.05;

/// Largest frame grid built for one video (about 9.7 days at 50 ms).
pub const MAX_FRAMES_PER_VIDEO: usize = 1 << 24;

/// Label of a single frame.
///
/// `Background` is a distinct variant, so an action literally named
/// "background" does not compare equal to unlabeled frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameLabel<'a> {
    Background,
    Action(&'a str),
}

impl<'a> FrameLabel<'a> {
    pub fn is_background(&self) -> bool {
        matches!(self, FrameLabel::Background)
    }
}

/// Number of frames covering `duration` seconds.
///
/// Negative or NaN durations saturate to a single frame.
pub fn frame_count(duration: f64, interval: f64) -> usize {
    frame_index(duration, interval).saturating_add(1)
}

/// Index of the frame containing time `t`.
///
/// Truncates toward zero, so negative times land on frame 0.
pub fn frame_index(t: f64, interval: f64) -> usize {
    // `as` saturates: negatives and NaN become 0, huge values usize::MAX.
    (t / interval) as usize
}

/// Duration used to size a video's frame sequence.
///
/// Falls back to the largest annotation end time when the record has no
/// duration or a zero duration.
pub fn resolve_duration(record: &VideoRecord) -> f64 {
    match record.duration {
        Some(duration) if duration != 0.0 => duration,
        _ => record
            .annotations
            .iter()
            .map(|ann| ann.segment.end)
            .fold(0.0, f64::max),
    }
}

/// Paint `entries` onto a background-initialized frame sequence.
///
/// # Example
///
/// ```
/// use tad_eval::frames::{discretize, FrameLabel};
/// use tad_eval::types::Annotation;
///
/// let anns = vec![Annotation::new(0.0, 0.1, "walk")];
/// let frames = discretize(&anns, 4, 0.05);
/// assert_eq!(frames[2], FrameLabel::Action("walk"));
/// assert_eq!(frames[3], FrameLabel::Background);
/// ```
pub fn discretize<T: LabeledSegment>(
    entries: &[T],
    num_frames: usize,
    interval: f64,
) -> Vec<FrameLabel<'_>> {
    let mut frames = vec![FrameLabel::Background; num_frames];

    for entry in entries {
        let segment = entry.segment();
        let start = frame_index(segment.start, interval);
        let end = frame_index(segment.end, interval)
            .saturating_add(1)
            .min(num_frames);

        if start < end {
            frames[start..end].fill(FrameLabel::Action(entry.label()));
        }
    }

    frames
}

/// Parallel ground-truth and prediction frame sequences for one video.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLabels<'a> {
    pub ground_truth: Vec<FrameLabel<'a>>,
    pub predictions: Vec<FrameLabel<'a>>,
}

impl<'a> FrameLabels<'a> {
    /// Discretize a video's ground truth and predictions over the same frame grid.
    ///
    /// # Errors
    ///
    /// Returns [`TadEvalError::InvalidDuration`] if the video needs more than
    /// [`MAX_FRAMES_PER_VIDEO`] frames.
    pub fn for_video<P: LabeledSegment>(
        record: &'a VideoRecord,
        predictions: &'a [P],
        interval: f64,
    ) -> Result<Self> {
        let duration = resolve_duration(record);
        let num_frames = frame_count(duration, interval);
        if num_frames > MAX_FRAMES_PER_VIDEO {
            return Err(TadEvalError::InvalidDuration(format!(
                "{} s at {} s per frame exceeds {} frames",
                duration, interval, MAX_FRAMES_PER_VIDEO
            )));
        }

        Ok(Self {
            ground_truth: discretize(&record.annotations, num_frames, interval),
            predictions: discretize(predictions, num_frames, interval),
        })
    }

    pub fn len(&self) -> usize {
        self.ground_truth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ground_truth.is_empty()
    }

    /// Number of frames whose predicted label equals the ground-truth label.
    pub fn correct(&self) -> usize {
        self.ground_truth
            .iter()
            .zip(&self.predictions)
            .filter(|(gt, pred)| gt == pred)
            .count()
    }
}
