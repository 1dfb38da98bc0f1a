//! Black hole clustering CLI - Cluster a vectorized corpus from JSON.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use black_hole_clustering::{
    compute::{BlackHole, cluster_report},
    schema::{Corpus, Document, OptimizerConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example();
        return;
    }

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <corpus.json> [config.json] [generations]",
            args[0]
        );
        eprintln!();
        eprintln!("Cluster documents with the black hole algorithm.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  corpus.json  Documents with precomputed feature weights");
        eprintln!("  config.json  Optimizer configuration (default: built-in defaults)");
        eprintln!("  generations  Number of generations, overrides the config");
        eprintln!();
        eprintln!("Example inputs are printed with the --example flag.");
        std::process::exit(1);
    }

    let total_start = Instant::now();

    let corpus_path = PathBuf::from(&args[1]);
    let corpus = Corpus::load(&corpus_path).unwrap_or_else(|e| {
        eprintln!("Error loading corpus {}: {}", corpus_path.display(), e);
        std::process::exit(1);
    });

    let mut config: OptimizerConfig = match args.get(2) {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => OptimizerConfig::default(),
    };
    if let Some(generations) = args.get(3).and_then(|s| s.parse().ok()) {
        config.generations = generations;
    }
    let generations = config.generations;

    println!("Black Hole Clustering");
    println!("=====================");
    println!(
        "Documents: {} ({} dimensions)",
        corpus.len(),
        corpus.dimension()
    );
    println!(
        "Using {} centroids and {} stars",
        config.centroid_count, config.star_count
    );
    println!("Generations: {}", generations);
    println!();

    let algorithm_start = Instant::now();
    let mut optimizer = BlackHole::new(config, &corpus).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::info!(
        "Created universe in {:.3}s",
        algorithm_start.elapsed().as_secs_f64()
    );
    println!("Seed: {}", optimizer.seed());
    println!("Starting fitness: {}", optimizer.black_hole_fitness());
    println!();

    let mut iteration_start = Instant::now();
    let result = optimizer.run_with_callback(generations, |stats| {
        println!(
            "Iteration {}: best_fitness: {}  ({:.3}s, total {:.3}s)",
            stats.generation,
            stats.black_hole_fitness,
            iteration_start.elapsed().as_secs_f64(),
            total_start.elapsed().as_secs_f64()
        );
        iteration_start = Instant::now();
    });

    let report = cluster_report(&result.best_position, &corpus);

    println!();
    println!(
        "Found {} documents closest to the centroids.",
        report.centroids.len()
    );
    for summary in &report.centroids {
        print_centroid(summary.centroid, &corpus[summary.document_index]);
    }

    for cluster in 0..report.centroids.len() {
        println!();
        for member in report.members(cluster) {
            println!(
                "Cluster: {} {} distance: {}",
                cluster + 1,
                member.document_id,
                member.distance
            );
        }
    }

    println!();
    for (i, size) in report.cluster_sizes().iter().enumerate() {
        println!("Cluster: {} contains {} documents.", i + 1, size);
    }

    println!();
    println!(
        "Swaps: {}, immediate swaps: {}, new stars: {}",
        result.stats.total_swaps, result.stats.total_immediate_swaps, result.stats.total_respawns
    );
    println!(
        "Fitness: {} -> {}",
        result.stats.initial_fitness, result.best_fitness
    );
    println!(
        "Time: {:.2}s total, {:.2}s optimizing",
        total_start.elapsed().as_secs_f64(),
        result.stats.elapsed_seconds
    );
}

fn print_centroid(centroid: usize, doc: &Document) {
    println!(
        "{} Centroid: [dimensions: {}] id: {}",
        centroid + 1,
        doc.weights.len(),
        doc.id
    );
}

fn print_example() {
    let config = OptimizerConfig {
        centroid_count: 2,
        random_seed: Some(3725841767),
        ..Default::default()
    };
    let corpus = Corpus::new(vec![
        Document::new("a.txt", vec![0.0, 0.0]),
        Document::new("b.txt", vec![0.0, 1.0]),
        Document::new("c.txt", vec![10.0, 10.0]),
        Document::new("d.txt", vec![10.0, 11.0]),
        Document::new("e.txt", vec![5.0, 5.0]),
    ]);

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
    println!();
    println!("Example corpus (corpus.json):");
    match corpus.and_then(|c| c.to_json()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing corpus: {}", e),
    }
}
