//! Black hole document clustering.
//!
//! This crate clusters a corpus of weighted feature vectors with the black
//! hole metaheuristic: a population of candidate centroid sets ("stars")
//! drifts toward the best candidate found so far (the "black hole"), and stars
//! that come within its event horizon are respawned at random.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, corpus and result types
//! - `compute`: Distance metric, stars, the optimizer and cluster reports
//!
//! # Example
//!
//! ```rust
//! use black_hole_clustering::{
//!     compute::{BlackHole, cluster_report},
//!     schema::{Corpus, OptimizerConfig},
//! };
//!
//! let corpus = Corpus::from_vectors(vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ])
//! .unwrap();
//!
//! let config = OptimizerConfig {
//!     star_count: 8,
//!     centroid_count: 2,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut optimizer = BlackHole::new(config, &corpus).unwrap();
//! for _ in 0..50 {
//!     optimizer.advance();
//! }
//!
//! let report = cluster_report(optimizer.black_hole().position(), &corpus);
//! println!("Best fitness: {}", optimizer.black_hole_fitness());
//! println!("Cluster sizes: {:?}", report.cluster_sizes());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{BlackHole, OptimizerError, Star, cluster_report};
pub use schema::{ClusterReport, Corpus, Document, OptimizationResult, OptimizerConfig};
