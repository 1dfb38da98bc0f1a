//! Quick clustering performance test

use black_hole_clustering::{BlackHole, Corpus, OptimizerConfig, cluster_report};
use rand::prelude::*;
use rand_distr::Normal;
use std::time::Instant;

fn blob_corpus(documents: usize, dimension: usize, clusters: usize, seed: u64) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.05).unwrap();
    let centers: Vec<Vec<f64>> = (0..clusters)
        .map(|_| (0..dimension).map(|_| rng.r#gen::<f64>()).collect())
        .collect();

    let vectors = (0..documents)
        .map(|i| {
            centers[i % clusters]
                .iter()
                .map(|c| c + rng.sample(noise))
                .collect()
        })
        .collect();
    Corpus::from_vectors(vectors).unwrap()
}

fn main() {
    println!("=== Clustering Performance Test ===\n");

    // Test different corpus sizes
    for documents in [200, 1000, 4000] {
        println!("Corpus: {} documents x 32 dimensions", documents);

        let corpus = blob_corpus(documents, 32, 4, 42);
        let config = OptimizerConfig {
            star_count: 20,
            centroid_count: 4,
            generations: 50,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let mut optimizer = BlackHole::new(config, &corpus).unwrap();
        let result = optimizer.run();
        let elapsed = start.elapsed();
        let report = cluster_report(&result.best_position, &corpus);

        println!("  Generations:    {}", result.stats.generations);
        println!("  Elapsed:        {:.2}s", elapsed.as_secs_f64());
        println!(
            "  Gens/sec:       {:.1}",
            result.stats.generations as f64 / elapsed.as_secs_f64()
        );
        println!(
            "  Fitness:        {:.4} -> {:.4}",
            result.stats.initial_fitness, result.best_fitness
        );
        println!("  New stars:      {}", result.stats.total_respawns);
        println!("  Cluster sizes:  {:?}", report.cluster_sizes());
        println!();
    }

    println!("=== Scalability Test (fixed 1000-document corpus) ===\n");

    let corpus = blob_corpus(1000, 32, 4, 7);

    // Test different population sizes
    for star_count in [10, 20, 40, 80] {
        for parallel in [false, true] {
            let config = OptimizerConfig {
                star_count,
                centroid_count: 4,
                generations: 20,
                random_seed: Some(42),
                parallel,
            };

            let start = Instant::now();
            let mut optimizer = BlackHole::new(config, &corpus).unwrap();
            let result = optimizer.run();
            let elapsed = start.elapsed();

            println!(
                "Stars {} ({}): {} generations in {:.2}s, best fitness {:.4}",
                star_count,
                if parallel { "parallel" } else { "sequential" },
                result.stats.generations,
                elapsed.as_secs_f64(),
                result.best_fitness
            );
        }
    }
}
