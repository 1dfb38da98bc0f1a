//! Result types produced by an optimization run.

use serde::{Deserialize, Serialize};

/// Counters and state captured after one generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (1-based; 0 means no generation has run yet).
    pub generation: usize,
    /// Black hole fitness after the generation.
    pub black_hole_fitness: f64,
    /// Index of the black hole after the generation.
    pub black_hole_index: usize,
    /// Event horizon after the generation.
    pub event_horizon: f64,
    /// Stars that replaced the black hole after moving.
    pub swaps: usize,
    /// Respawned stars that immediately replaced the black hole.
    pub immediate_swaps: usize,
    /// Stars respawned for falling inside the event horizon.
    pub respawns: usize,
}

impl GenerationStats {
    /// True if the generation changed nothing but star positions.
    pub fn is_quiet(&self) -> bool {
        self.swaps + self.immediate_swaps + self.respawns == 0
    }
}

/// Fitness trajectory of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizationHistory {
    /// Black hole fitness per generation.
    pub black_hole_fitness: Vec<f64>,
    /// Mean population fitness per generation.
    pub mean_fitness: Vec<f64>,
    /// Event horizon per generation.
    pub event_horizon: Vec<f64>,
}

/// Aggregate statistics for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Generations executed.
    pub generations: usize,
    /// Fitness of the focal star before the first generation.
    pub initial_fitness: f64,
    /// Best fitness achieved.
    pub best_fitness: f64,
    pub total_swaps: usize,
    pub total_immediate_swaps: usize,
    pub total_respawns: usize,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}

/// Final result of a fixed-length optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Centroids of the final black hole.
    pub best_position: Vec<Vec<f64>>,
    /// Fitness of the final black hole.
    pub best_fitness: f64,
    /// Seed the run was started from.
    pub random_seed: u64,
    pub stats: RunStats,
    pub history: OptimizationHistory,
}

/// A centroid together with the document closest to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidSummary {
    /// Centroid index within the position.
    pub centroid: usize,
    /// Index of the nearest document in the corpus.
    pub document_index: usize,
    /// Id of the nearest document.
    pub document_id: String,
    /// Distance between the centroid and that document.
    pub distance: f64,
    /// Number of documents assigned to this centroid.
    pub size: usize,
}

/// Cluster membership of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAssignment {
    pub document_index: usize,
    pub document_id: String,
    /// Index of the nearest centroid.
    pub cluster: usize,
    /// Distance to that centroid.
    pub distance: f64,
}

/// Nearest-centroid clustering of a corpus under one position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReport {
    pub centroids: Vec<CentroidSummary>,
    /// One entry per document, in corpus order.
    pub assignments: Vec<DocumentAssignment>,
}

impl ClusterReport {
    /// Members of a cluster, sorted by document id.
    pub fn members(&self, cluster: usize) -> Vec<&DocumentAssignment> {
        let mut members: Vec<_> = self
            .assignments
            .iter()
            .filter(|a| a.cluster == cluster)
            .collect();
        members.sort_by(|a, b| a.document_id.cmp(&b.document_id));
        members
    }

    /// Number of documents per cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.centroids.iter().map(|c| c.size).collect()
    }
}
