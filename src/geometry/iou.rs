//! Area, intersection, and IoU for corner-form boxes.

use crate::geometry::BBox;

/// Returns `(x2 - x1) * (y2 - y1)`.
///
/// Inverted boxes produce a negative area; nothing is clamped here.
#[inline]
pub fn area(bbox: &BBox) -> f32 {
    (bbox.x2 - bbox.x1) * (bbox.y2 - bbox.y1)
}

/// Returns the overlap area of two boxes, `0.0` when they are disjoint.
#[inline]
pub fn intersection_area(a: &BBox, b: &BBox) -> f32 {
    let x1 = a.x1.max(b.x1);
    let y1 = a.y1.max(b.y1);
    let x2 = a.x2.min(b.x2);
    let y2 = a.y2.min(b.y2);
    let w = (x2 - x1).max(0.0);
    let h = (y2 - y1).max(0.0);
    w * h
}

/// Intersection over union of two boxes.
///
/// Returns exactly `0.0` when the union area is zero, which happens for two
/// degenerate boxes that do not overlap.
#[inline]
pub fn iou(a: &BBox, b: &BBox) -> f32 {
    let inter = intersection_area(a, b);
    let union = area(a) + area(b) - inter;
    if union == 0.0 {
        return 0.0;
    }
    inter / union
}
