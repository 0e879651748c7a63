//! Score filter followed by greedy NMS.
//!
//! [`run`] is the bare, infallible composition of the two stages. The
//! [`Postprocessor`] wraps it with a validated [`PostprocessConfig`], rejects
//! malformed boxes up front, and adds class-aware suppression and batch
//! processing over many independent pools.

use crate::candidate::nms::{suppress, suppress_per_class};
use crate::candidate::score::filter_by_score;
use crate::detection::Detection;
use crate::trace::{trace_event, trace_span};
use crate::util::{DetNmsError, DetNmsResult};

mod batch;

/// Filters by score, then suppresses overlaps in a single class-agnostic pool.
///
/// Returns the survivors in descending score. An empty vector means "no
/// detections" and is not an error.
///
/// Boxes are not validated: inverted or NaN coordinates yield meaningless
/// overlaps. Use [`Postprocessor::process`] to reject malformed input with a
/// [`DetNmsError::MalformedDetection`] instead.
pub fn run(raw: Vec<Detection>, score_threshold: f32, iou_threshold: f32) -> Vec<Detection> {
    let filtered = filter_by_score(raw, score_threshold);
    suppress(filtered, iou_threshold)
}

/// Thresholds and switches for post-processing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostprocessConfig {
    /// Detections scoring below this are dropped before NMS.
    pub score_threshold: f32,
    /// Remaining detections with IoU at or above this against a kept box are
    /// suppressed. Lower values suppress more aggressively.
    pub iou_threshold: f32,
    /// Restrict suppression to boxes sharing a `class_id`.
    pub per_class: bool,
    /// Process batch pools in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.5,
            iou_threshold: 0.5,
            per_class: false,
            parallel: false,
        }
    }
}

impl PostprocessConfig {
    /// Rejects NaN thresholds.
    ///
    /// Out-of-range values are allowed: an IoU threshold above 1 disables
    /// suppression and one at or below 0 keeps only the top detection.
    pub fn validate(&self) -> DetNmsResult<()> {
        if self.score_threshold.is_nan() {
            return Err(DetNmsError::InvalidThreshold {
                name: "score_threshold",
                value: self.score_threshold,
            });
        }
        if self.iou_threshold.is_nan() {
            return Err(DetNmsError::InvalidThreshold {
                name: "iou_threshold",
                value: self.iou_threshold,
            });
        }
        Ok(())
    }
}

/// Stateless post-processing driver.
///
/// Holds only a `Copy` config, so one instance can be shared freely across
/// threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Postprocessor {
    cfg: PostprocessConfig,
}

impl Postprocessor {
    /// Creates a post-processor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: PostprocessConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &PostprocessConfig {
        &self.cfg
    }

    /// Runs score filtering and NMS over one detection pool.
    ///
    /// Fails if the configuration is invalid or any input detection carries a
    /// malformed box, including detections the score filter would drop.
    pub fn process(&self, raw: Vec<Detection>) -> DetNmsResult<Vec<Detection>> {
        self.cfg.validate()?;
        self.process_validated(raw)
    }

    fn process_validated(&self, raw: Vec<Detection>) -> DetNmsResult<Vec<Detection>> {
        let _span = trace_span!(
            "postprocess",
            input = raw.len(),
            score_threshold = self.cfg.score_threshold,
            iou_threshold = self.cfg.iou_threshold
        )
        .entered();

        validate_boxes(&raw)?;

        let filtered = filter_by_score(raw, self.cfg.score_threshold);
        if filtered.is_empty() {
            trace_event!("postprocess_done", count = 0usize);
            return Ok(filtered);
        }

        let kept = if self.cfg.per_class {
            suppress_per_class(filtered, self.cfg.iou_threshold)
        } else {
            suppress(filtered, self.cfg.iou_threshold)
        };
        trace_event!("postprocess_done", count = kept.len());
        Ok(kept)
    }
}

fn validate_boxes(detections: &[Detection]) -> DetNmsResult<()> {
    match detections
        .iter()
        .position(|det| !det.bbox.is_well_formed())
    {
        Some(index) => Err(DetNmsError::MalformedDetection {
            index,
            bbox: detections[index].bbox,
        }),
        None => Ok(()),
    }
}
