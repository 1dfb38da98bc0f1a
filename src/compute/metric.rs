//! Distance metric and clustering cost.
//!
//! Fitness evaluation is the hot loop of the optimizer: every move and every
//! respawn costs `documents x centroids` distance computations.

use crate::schema::Corpus;

/// Root-mean-square difference between two vectors of equal length.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
#[inline]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "distance between vectors of different dimension"
    );
    if a.is_empty() {
        return 0.0;
    }

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    (sum / a.len() as f64).sqrt()
}

/// Clustering cost of a set of centroids: the sum over all documents of the
/// distance to the nearest centroid. Lower is better.
pub fn fitness(position: &[Vec<f64>], corpus: &Corpus) -> f64 {
    corpus
        .iter()
        .map(|doc| nearest_distance(&doc.weights, position))
        .sum()
}

/// Distance from `v` to the closest centroid, or infinity for an empty position.
#[inline]
fn nearest_distance(v: &[f64], position: &[Vec<f64>]) -> f64 {
    position
        .iter()
        .map(|c| distance(v, c))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn corpus() -> Corpus {
        Corpus::from_vectors(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 10.0],
            vec![10.0, 11.0],
            vec![5.0, 5.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_distance_rms() {
        // sqrt((1 + 4 + 4) / 3) = sqrt(3)
        let d = distance(&[1.0, 2.0, 3.0], &[0.0, 0.0, 1.0]);
        assert!((d - 3.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "different dimension")]
    fn test_distance_length_mismatch_panics() {
        distance(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_fitness_hand_computed() {
        let position = vec![vec![0.0, 0.0], vec![10.0, 10.0]];
        // (0,0)->0, (0,1)->sqrt(1/2), (10,10)->0, (10,11)->sqrt(1/2), (5,5)->5
        let expected = 2.0 * 0.5f64.sqrt() + 5.0;
        assert!((fitness(&position, &corpus()) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_zero_when_every_document_is_a_centroid() {
        let corpus = corpus();
        let position: Vec<Vec<f64>> = corpus.iter().map(|d| d.weights.clone()).collect();
        assert_eq!(fitness(&position, &corpus), 0.0);
    }

    #[test]
    fn test_fitness_positive_when_a_document_is_uncovered() {
        let position = vec![vec![0.0, 0.0]];
        assert!(fitness(&position, &corpus()) > 0.0);
    }

    fn vectors(dim: usize, count: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
        prop::collection::vec(prop::collection::vec(-100.0f64..100.0, dim), count)
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric_and_non_negative(
            pair in vectors(6, 2),
        ) {
            let ab = distance(&pair[0], &pair[1]);
            let ba = distance(&pair[1], &pair[0]);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-12);
        }

        #[test]
        fn prop_fitness_invariant_under_centroid_permutation(
            docs in vectors(4, 12),
            mut position in vectors(4, 5),
            rotation in 0usize..5,
        ) {
            let corpus = Corpus::from_vectors(docs).unwrap();
            let before = fitness(&position, &corpus);
            position.rotate_left(rotation);
            position.reverse();
            let after = fitness(&position, &corpus);
            prop_assert!((before - after).abs() < 1e-9);
            prop_assert!(before >= 0.0);
        }
    }
}
