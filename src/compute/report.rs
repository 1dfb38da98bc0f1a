//! Nearest-centroid assignment of documents for a finished run.

use crate::schema::{CentroidSummary, ClusterReport, Corpus, DocumentAssignment};

/// Assign every document to its nearest centroid and find the document
/// closest to each centroid.
///
/// Ties go to the later index in both directions. A position without
/// centroids yields an empty report.
pub fn cluster_report(position: &[Vec<f64>], corpus: &Corpus) -> ClusterReport {
    if position.is_empty() {
        return ClusterReport {
            centroids: Vec::new(),
            assignments: Vec::new(),
        };
    }

    let assignments: Vec<DocumentAssignment> = corpus
        .iter()
        .enumerate()
        .map(|(document_index, doc)| {
            let (cluster, distance) = nearest(position.iter().map(|c| doc.distance_to(c)));
            DocumentAssignment {
                document_index,
                document_id: doc.id.clone(),
                cluster,
                distance,
            }
        })
        .collect();

    let mut sizes = vec![0usize; position.len()];
    for a in &assignments {
        sizes[a.cluster] += 1;
    }

    let centroids = position
        .iter()
        .enumerate()
        .map(|(centroid, c)| {
            let (document_index, distance) = nearest(corpus.iter().map(|d| d.distance_to(c)));
            CentroidSummary {
                centroid,
                document_index,
                document_id: corpus[document_index].id.clone(),
                distance,
                size: sizes[centroid],
            }
        })
        .collect();

    ClusterReport {
        centroids,
        assignments,
    }
}

/// Index and value of the smallest distance, preferring the last of equals.
fn nearest(distances: impl Iterator<Item = f64>) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, d) in distances.enumerate() {
        if d <= best.1 {
            best = (i, d);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Document;

    fn corpus() -> Corpus {
        Corpus::new(vec![
            Document::new("c.txt", vec![0.0, 0.0]),
            Document::new("a.txt", vec![0.0, 1.0]),
            Document::new("b.txt", vec![10.0, 10.0]),
            Document::new("d.txt", vec![10.0, 11.0]),
            Document::new("e.txt", vec![6.0, 6.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_assignments_and_sizes() {
        let position = vec![vec![0.0, 0.5], vec![10.0, 10.5]];
        let report = cluster_report(&position, &corpus());

        let clusters: Vec<usize> = report.assignments.iter().map(|a| a.cluster).collect();
        assert_eq!(clusters, vec![0, 0, 1, 1, 1]);
        assert_eq!(report.cluster_sizes(), vec![2, 3]);
        assert_eq!(report.assignments.len(), 5);
    }

    #[test]
    fn test_ties_go_to_later_index() {
        // (0,0) and (0,1) are equidistant from (0, 0.5)
        let position = vec![vec![0.0, 0.5], vec![10.0, 10.5]];
        let report = cluster_report(&position, &corpus());

        assert_eq!(report.centroids[0].document_index, 1);
        assert_eq!(report.centroids[0].document_id, "a.txt");
        assert_eq!(report.centroids[1].document_index, 3);
    }

    #[test]
    fn test_members_sorted_by_id() {
        let position = vec![vec![0.0, 0.5], vec![10.0, 10.5]];
        let report = cluster_report(&position, &corpus());

        let ids: Vec<&str> = report
            .members(0)
            .iter()
            .map(|a| a.document_id.as_str())
            .collect();
        assert_eq!(ids, vec!["a.txt", "c.txt"]);
        assert!(report.members(1).iter().all(|a| a.cluster == 1));
    }

    #[test]
    fn test_exact_centroids_have_zero_distance() {
        let corpus = corpus();
        let position: Vec<Vec<f64>> = corpus.iter().map(|d| d.weights.clone()).collect();
        let report = cluster_report(&position, &corpus);

        for (i, a) in report.assignments.iter().enumerate() {
            assert_eq!(a.cluster, i);
            assert_eq!(a.distance, 0.0);
        }
        assert!(report.cluster_sizes().iter().all(|&n| n == 1));
    }

    #[test]
    fn test_empty_position_gives_empty_report() {
        let report = cluster_report(&[], &corpus());

        assert!(report.centroids.is_empty());
        assert!(report.assignments.is_empty());
        assert!(report.cluster_sizes().is_empty());
        assert!(report.members(0).is_empty());
    }
}
