//! Confidence threshold filtering.

use crate::detection::{Detection, Scored};
use crate::trace::{trace_event, trace_span};

/// Returns the indices of items with `score >= score_threshold`, in input order.
///
/// NaN scores never pass.
pub fn score_filter_indices<T: Scored>(items: &[T], score_threshold: f32) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.score() >= score_threshold)
        .map(|(idx, _)| idx)
        .collect()
}

/// Keeps detections whose score is at least `score_threshold`.
///
/// The boundary is inclusive and survivors keep their relative order and
/// metadata. An empty result is a normal outcome.
pub fn filter_by_score(mut detections: Vec<Detection>, score_threshold: f32) -> Vec<Detection> {
    let _span = trace_span!("score_filter", input = detections.len()).entered();
    detections.retain(|det| det.score >= score_threshold);
    trace_event!("score_filter_kept", count = detections.len());
    detections
}
