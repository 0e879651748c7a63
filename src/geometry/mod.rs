//! Axis-aligned boxes and overlap measures.
//!
//! Boxes use image pixel coordinates in corner form `(x1, y1, x2, y2)`. The
//! overlap measures accept any box without validation; callers that need
//! well-formed input should construct boxes with [`BBox::try_new`] or check
//! [`BBox::is_well_formed`].

use crate::util::{DetNmsError, DetNmsResult};

pub mod iou;

pub use iou::{area, intersection_area, iou};

/// Axis-aligned bounding box in corner form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge.
    pub x2: f32,
    /// Bottom edge.
    pub y2: f32,
}

impl BBox {
    /// Creates a box without validating its coordinates.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a box, rejecting non-finite or inverted coordinates.
    ///
    /// Zero-width and zero-height boxes are accepted.
    pub fn try_new(x1: f32, y1: f32, x2: f32, y2: f32) -> DetNmsResult<Self> {
        let bbox = Self::new(x1, y1, x2, y2);
        if !bbox.is_well_formed() {
            return Err(DetNmsError::MalformedBox { x1, y1, x2, y2 });
        }
        Ok(bbox)
    }

    /// Creates a box from its top-left corner and size.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Returns `true` when all coordinates are finite and `x1 <= x2`, `y1 <= y2`.
    pub fn is_well_formed(&self) -> bool {
        self.x1.is_finite()
            && self.y1.is_finite()
            && self.x2.is_finite()
            && self.y2.is_finite()
            && self.x2 >= self.x1
            && self.y2 >= self.y1
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Returns the box center as `(cx, cy)`.
    pub fn center(&self) -> (f32, f32) {
        (0.5 * (self.x1 + self.x2), 0.5 * (self.y1 + self.y2))
    }

    /// Area of the box; see [`area`].
    pub fn area(&self) -> f32 {
        area(self)
    }

    /// Intersection-over-union with `other`; see [`iou()`].
    pub fn iou(&self, other: &BBox) -> f32 {
        iou(self, other)
    }
}
