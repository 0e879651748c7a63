//! Greedy IoU non-maximum suppression.

use std::collections::BTreeMap;

use crate::candidate::order::{indices_by_score_desc, score_cmp_desc};
use crate::detection::{Detection, Scored};
use crate::geometry::iou;
use crate::trace::{trace_debug, trace_event, trace_span};

/// Runs greedy NMS over one pool and returns the kept indices.
///
/// Candidates are visited by descending score (stable for ties). Each visited
/// candidate becomes an anchor and is kept; every remaining candidate whose
/// IoU with the anchor is `>= iou_threshold` is dropped. The returned indices
/// are in keep order, i.e. descending score.
pub fn nms_indices<T: Scored>(items: &[T], iou_threshold: f32) -> Vec<usize> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut candidates = indices_by_score_desc(items);
    let mut kept = Vec::new();

    while !candidates.is_empty() {
        let anchor = candidates.remove(0);
        kept.push(anchor);
        if candidates.is_empty() {
            break;
        }

        let anchor_box = items[anchor].bbox();
        let before = candidates.len();
        candidates.retain(|&idx| iou(&anchor_box, &items[idx].bbox()) < iou_threshold);
        trace_debug!(anchor = anchor, suppressed = before - candidates.len(); "anchor kept");
    }

    kept
}

/// Runs greedy NMS independently within each `class_id`.
///
/// Partitions are processed in ascending class id and the combined result is
/// re-ordered by descending score; ties keep the partition order.
pub fn nms_indices_per_class(detections: &[Detection], iou_threshold: f32) -> Vec<usize> {
    let mut partitions: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, det) in detections.iter().enumerate() {
        partitions.entry(det.class_id).or_default().push(idx);
    }

    let mut kept = Vec::new();
    for members in partitions.values() {
        let pool: Vec<&Detection> = members.iter().map(|&idx| &detections[idx]).collect();
        kept.extend(
            nms_indices(&pool, iou_threshold)
                .into_iter()
                .map(|local| members[local]),
        );
    }

    kept.sort_by(|&a, &b| score_cmp_desc(detections[a].score, detections[b].score));
    kept
}

/// Greedy NMS over a single pool, across all classes.
///
/// Survivors are moved out of `detections` unchanged, in descending score.
pub fn suppress(detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    let _span = trace_span!("nms", input = detections.len(), per_class = false).entered();
    let kept = nms_indices(&detections, iou_threshold);
    trace_event!("nms_kept", count = kept.len());
    take_indices(detections, &kept)
}

/// Class-aware greedy NMS: boxes only suppress boxes of the same `class_id`.
pub fn suppress_per_class(detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    let _span = trace_span!("nms", input = detections.len(), per_class = true).entered();
    let kept = nms_indices_per_class(&detections, iou_threshold);
    trace_event!("nms_kept", count = kept.len());
    take_indices(detections, &kept)
}

fn take_indices(items: Vec<Detection>, indices: &[usize]) -> Vec<Detection> {
    let mut slots: Vec<Option<Detection>> = items.into_iter().map(Some).collect();
    indices
        .iter()
        .filter_map(|&idx| slots[idx].take())
        .collect()
}
