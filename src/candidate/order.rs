//! Deterministic score ordering.

use std::cmp::Ordering;

use crate::detection::Scored;

/// Compares two scores for a descending sort.
///
/// `-0.0` and `0.0` compare equal; NaN still gets a fixed place through
/// `f32::total_cmp`.
#[inline]
pub(crate) fn score_cmp_desc(a: f32, b: f32) -> Ordering {
    // Adding +0.0 folds -0.0 into 0.0 and leaves every other value unchanged.
    (b + 0.0).total_cmp(&(a + 0.0))
}

/// Returns indices into `items` ordered by descending score.
///
/// The sort is stable: equal scores keep their input order, which decides
/// which of two tied near-duplicates survives suppression.
pub(crate) fn indices_by_score_desc<T: Scored>(items: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| score_cmp_desc(items[a].score(), items[b].score()));
    order
}

#[cfg(test)]
mod tests {
    use super::{indices_by_score_desc, score_cmp_desc};
    use std::cmp::Ordering;
    use crate::geometry::BBox;

    #[test]
    fn ties_keep_input_order() {
        let b = BBox::new(0.0, 0.0, 1.0, 1.0);
        let items = [(b, 0.5f32), (b, 0.9), (b, 0.5), (b, 0.9), (b, 0.1)];
        assert_eq!(indices_by_score_desc(&items), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn signed_zero_scores_tie() {
        let b = BBox::new(0.0, 0.0, 1.0, 1.0);
        let items = [(b, -0.0f32), (b, 0.0), (b, 0.1)];
        assert_eq!(indices_by_score_desc(&items), vec![2, 0, 1]);
        assert_eq!(score_cmp_desc(-0.0, 0.0), Ordering::Equal);
        assert_eq!(score_cmp_desc(0.9, 0.1), Ordering::Less);
    }

    #[test]
    fn empty_input_has_empty_order() {
        let items: [(BBox, f32); 0] = [];
        assert!(indices_by_score_desc(&items).is_empty());
    }
}
