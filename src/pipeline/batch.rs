//! Batch processing over independent detection pools.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::detection::Detection;
use crate::pipeline::Postprocessor;
use crate::trace::{trace_event, trace_span};
use crate::util::{DetNmsError, DetNmsResult};

impl Postprocessor {
    /// Processes each pool independently, e.g. one pool per image.
    ///
    /// Output pools line up with the input pools. With the `rayon` feature and
    /// `parallel` set, pools are processed concurrently; results are identical
    /// to sequential processing. The first failing pool (by position) is
    /// reported as [`DetNmsError::BatchPool`].
    pub fn process_batch(&self, pools: Vec<Vec<Detection>>) -> DetNmsResult<Vec<Vec<Detection>>> {
        self.cfg.validate()?;
        let _span = trace_span!("postprocess_batch", pools = pools.len()).entered();

        let results = self.map_pools(pools);
        let mut out = Vec::with_capacity(results.len());
        for (pool, result) in results.into_iter().enumerate() {
            let kept = result.map_err(|err| DetNmsError::BatchPool {
                pool,
                source: Box::new(err),
            })?;
            out.push(kept);
        }

        trace_event!(
            "postprocess_batch_done",
            total = out.iter().map(Vec::len).sum::<usize>()
        );
        Ok(out)
    }

    #[cfg(feature = "rayon")]
    fn map_pools(&self, pools: Vec<Vec<Detection>>) -> Vec<DetNmsResult<Vec<Detection>>> {
        if self.cfg.parallel {
            pools
                .into_par_iter()
                .map(|pool| self.process_validated(pool))
                .collect()
        } else {
            pools
                .into_iter()
                .map(|pool| self.process_validated(pool))
                .collect()
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn map_pools(&self, pools: Vec<Vec<Detection>>) -> Vec<DetNmsResult<Vec<Detection>>> {
        pools
            .into_iter()
            .map(|pool| self.process_validated(pool))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::detection::Detection;
    use crate::geometry::BBox;
    use crate::pipeline::Postprocessor;
    use crate::util::DetNmsError;

    fn det(x1: f32, score: f32) -> Detection {
        Detection::new(BBox::new(x1, 0.0, x1 + 10.0, 10.0), score, 0, "obj")
    }

    #[test]
    fn batch_matches_per_pool_processing() {
        let pools = vec![
            vec![det(0.0, 0.9), det(1.0, 0.8), det(50.0, 0.7)],
            Vec::new(),
            vec![det(0.0, 0.2)],
        ];
        let pp = Postprocessor::new();
        let expected: Vec<_> = pools
            .iter()
            .cloned()
            .map(|pool| pp.process(pool).unwrap())
            .collect();
        let out = pp.process_batch(pools).unwrap();
        assert_eq!(out, expected);
        assert_eq!(out[0].len(), 2);
        assert!(out[1].is_empty());
        assert!(out[2].is_empty());
    }

    #[test]
    fn batch_reports_failing_pool() {
        let bad = Detection::new(BBox::new(5.0, 0.0, 1.0, 1.0), 0.9, 0, "obj");
        let err = Postprocessor::new()
            .process_batch(vec![vec![det(0.0, 0.9)], vec![det(0.0, 0.9), bad.clone()]])
            .unwrap_err();
        assert_eq!(
            err,
            DetNmsError::BatchPool {
                pool: 1,
                source: Box::new(DetNmsError::MalformedDetection {
                    index: 1,
                    bbox: bad.bbox,
                }),
            }
        );
    }
}
