#![cfg(feature = "rayon")]

use detnms::{BBox, Detection, PostprocessConfig, Postprocessor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_pools(seed: u64, pools: usize) -> Vec<Vec<Detection>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..pools)
        .map(|_| {
            let len = rng.random_range(0usize..40);
            (0..len)
                .map(|_| {
                    let x1 = rng.random_range(0.0f32..300.0);
                    let y1 = rng.random_range(0.0f32..300.0);
                    let w = rng.random_range(4.0f32..60.0);
                    let h = rng.random_range(4.0f32..60.0);
                    let class_id = rng.random_range(0usize..4);
                    Detection::new(
                        BBox::new(x1, y1, x1 + w, y1 + h),
                        rng.random_range(0.0f32..1.0),
                        class_id,
                        format!("class{class_id}"),
                    )
                })
                .collect()
        })
        .collect()
}

#[test]
fn parallel_batch_matches_sequential() {
    for per_class in [false, true] {
        let base_cfg = PostprocessConfig {
            score_threshold: 0.3,
            iou_threshold: 0.45,
            per_class,
            parallel: false,
        };
        let pools = make_pools(42, 64);

        let sequential = Postprocessor::new()
            .with_config(base_cfg)
            .process_batch(pools.clone())
            .unwrap();
        let parallel = Postprocessor::new()
            .with_config(PostprocessConfig {
                parallel: true,
                ..base_cfg
            })
            .process_batch(pools)
            .unwrap();

        assert_eq!(sequential, parallel);
    }
}
