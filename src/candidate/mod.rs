//! Candidate pruning stages.
//!
//! Score filtering drops low-confidence detections; greedy NMS removes
//! overlapping duplicates. Both stages have an index form that never copies
//! detections and an owned form that moves survivors out of the input.

pub(crate) mod nms;
pub(crate) mod order;
pub(crate) mod score;
