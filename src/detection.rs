//! Detection records and the scoring seam used by suppression.

use crate::geometry::BBox;

/// A candidate object instance: box, confidence, and class metadata.
///
/// Class metadata travels with the box through every stage, so no stage ever
/// has to recover it by matching coordinates or scores.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Box in image pixel coordinates.
    pub bbox: BBox,
    /// Confidence score, conventionally in `[0, 1]`.
    pub score: f32,
    /// Category index.
    pub class_id: usize,
    /// Display name of the category.
    pub class_label: String,
}

impl Detection {
    pub fn new(bbox: BBox, score: f32, class_id: usize, class_label: impl Into<String>) -> Self {
        Self {
            bbox,
            score,
            class_id,
            class_label: class_label.into(),
        }
    }
}

/// Anything suppression can rank and compare: a box plus a score.
pub trait Scored {
    fn bbox(&self) -> BBox;
    fn score(&self) -> f32;
}

impl Scored for Detection {
    #[inline]
    fn bbox(&self) -> BBox {
        self.bbox
    }

    #[inline]
    fn score(&self) -> f32 {
        self.score
    }
}

impl Scored for (BBox, f32) {
    #[inline]
    fn bbox(&self) -> BBox {
        self.0
    }

    #[inline]
    fn score(&self) -> f32 {
        self.1
    }
}

impl<T: Scored + ?Sized> Scored for &T {
    #[inline]
    fn bbox(&self) -> BBox {
        (**self).bbox()
    }

    #[inline]
    fn score(&self) -> f32 {
        (**self).score()
    }
}
