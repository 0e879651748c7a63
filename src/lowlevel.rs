//! Index-based building blocks for custom post-processing.
//!
//! These functions return indices into the caller's slice instead of moving
//! detections, which suits decoders that keep boxes, scores, and class data in
//! separate buffers. Most users should prefer [`crate::Postprocessor`] or
//! [`crate::run`].

pub use crate::candidate::nms::{nms_indices, nms_indices_per_class};
pub use crate::candidate::score::score_filter_indices;
