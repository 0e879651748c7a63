//! detnms post-processes object-detection candidates.
//!
//! A raw detection pool is filtered by confidence and then deduplicated with
//! greedy IoU non-maximum suppression. Detections carry their class metadata
//! as fields, so survivors come out exactly as they went in. Batch processing
//! can run pools in parallel via the `rayon` feature, and stage spans are
//! emitted through the `tracing` feature.

mod candidate;
pub mod detection;
pub mod geometry;
pub mod lowlevel;
pub mod pipeline;
mod trace;
pub mod util;

pub use detection::{Detection, Scored};
pub use geometry::{area, intersection_area, iou, BBox};
pub use pipeline::{run, PostprocessConfig, Postprocessor};
pub use util::{DetNmsError, DetNmsResult};

pub use candidate::nms::{suppress, suppress_per_class};
pub use candidate::score::filter_by_score;
