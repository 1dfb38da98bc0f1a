//! Black hole population controller.
//!
//! The population holds a fixed number of stars, one of which is the black
//! hole (the best star found so far). Each generation:
//!
//! 1. Every other star moves a random fraction of the way toward the black hole.
//! 2. Stars are examined in index order. A star that beats the black hole takes
//!    its place; a star whose fitness lies within the event horizon of the black
//!    hole is respawned at a fresh random position (and may take its place too).
//!
//! The event horizon is recomputed every time the black hole changes, including
//! in the middle of a pass, so later stars are judged against the updated state.

use std::time::Instant;

use rayon::prelude::*;

use crate::schema::{
    ConfigError, Corpus, CorpusError, GenerationStats, OptimizationHistory, OptimizationResult,
    OptimizerConfig, RunStats,
};

use super::rng::StreamFactory;
use super::star::Star;

/// Errors that prevent an optimizer from being built.
#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid corpus: {0}")]
    Corpus(#[from] CorpusError),
    #[error("centroid_count ({centroid_count}) exceeds the number of documents ({documents})")]
    CentroidCountExceedsCorpus {
        centroid_count: usize,
        documents: usize,
    },
    #[error("No star of {star_count} could be selected as the black hole")]
    NoBlackHole { star_count: usize },
}

/// The black hole clustering optimizer.
pub struct BlackHole<'a> {
    config: OptimizerConfig,
    corpus: &'a Corpus,
    streams: StreamFactory,
    seed: u64,
    stars: Vec<Star>,
    black_hole: usize,
    black_hole_fitness: f64,
    event_horizon: f64,
    generation: usize,
    last_stats: GenerationStats,
}

impl<'a> BlackHole<'a> {
    /// Validate the configuration against the corpus and sample the initial population.
    pub fn new(config: OptimizerConfig, corpus: &'a Corpus) -> Result<Self, OptimizerError> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(CorpusError::Empty.into());
        }
        if config.centroid_count > corpus.len() {
            return Err(OptimizerError::CentroidCountExceedsCorpus {
                centroid_count: config.centroid_count,
                documents: corpus.len(),
            });
        }

        let seed = config.random_seed.unwrap_or_else(rand::random);
        let mut streams = StreamFactory::new(seed);
        let stars = (0..config.star_count)
            .map(|_| Star::new(corpus, config.centroid_count, &mut streams))
            .collect();

        Self::from_population(config, corpus, streams, seed, stars)
    }

    /// Pick the fittest star as the black hole (first one on ties) and set up
    /// the event horizon.
    fn from_population(
        config: OptimizerConfig,
        corpus: &'a Corpus,
        streams: StreamFactory,
        seed: u64,
        mut stars: Vec<Star>,
    ) -> Result<Self, OptimizerError> {
        let mut best: Option<(usize, f64)> = None;
        for (i, star) in stars.iter().enumerate() {
            log::trace!("star {} fitness: {}", i, star.fitness());

            let best_fitness = best.map_or(f64::INFINITY, |(_, f)| f);
            if star.fitness() < best_fitness {
                best = Some((i, star.fitness()));
            }
        }

        let (black_hole, black_hole_fitness) = best.ok_or(OptimizerError::NoBlackHole {
            star_count: stars.len(),
        })?;
        stars[black_hole].mark_black_hole();

        log::info!(
            "Starting fitness {} with {} centroids and {} stars (seed {})",
            black_hole_fitness,
            config.centroid_count,
            stars.len(),
            seed
        );

        let mut optimizer = Self {
            config,
            corpus,
            streams,
            seed,
            stars,
            black_hole,
            black_hole_fitness,
            event_horizon: 0.0,
            generation: 0,
            last_stats: GenerationStats::default(),
        };
        optimizer.update_event_horizon();
        optimizer.last_stats = optimizer.snapshot_stats();
        Ok(optimizer)
    }

    /// Run one generation and return the black hole and its fitness.
    pub fn advance(&mut self) -> (&Star, f64) {
        self.move_stars();
        let stats = self.sweep();

        self.generation += 1;
        self.last_stats = GenerationStats {
            swaps: stats.swaps,
            immediate_swaps: stats.immediate_swaps,
            respawns: stats.respawns,
            ..self.snapshot_stats()
        };

        if !self.last_stats.is_quiet() {
            log::debug!(
                "generation {}: {} new stars, {} black hole swaps, {} immediate swaps",
                self.generation,
                stats.respawns,
                stats.swaps,
                stats.immediate_swaps
            );
        }

        (&self.stars[self.black_hole], self.black_hole_fitness)
    }

    /// Move all orbiting stars toward a snapshot of the black hole position.
    ///
    /// Stars only touch their own state and private stream here, so the
    /// parallel and sequential paths produce identical results.
    fn move_stars(&mut self) {
        let target = self.stars[self.black_hole].position().to_vec();
        let corpus = self.corpus;

        if self.config.parallel {
            self.stars
                .par_iter_mut()
                .for_each(|star| star.move_toward(&target, corpus));
        } else {
            for star in &mut self.stars {
                star.move_toward(&target, corpus);
            }
        }
    }

    /// Examine every orbiting star in index order, swapping or respawning it.
    ///
    /// The event horizon is recomputed whenever the black hole changes, so
    /// later stars are judged against the new one. Respawns alone leave it as is.
    fn sweep(&mut self) -> GenerationStats {
        let mut stats = GenerationStats::default();
        for i in 0..self.stars.len() {
            if i == self.black_hole {
                continue;
            }
            let fitness = self.stars[i].fitness();

            if fitness < self.black_hole_fitness {
                log::trace!("star {} replaces black hole {}", i, self.black_hole);
                stats.swaps += 1;
                self.swap_black_hole(i);
            } else if fitness - self.event_horizon < self.black_hole_fitness {
                log::trace!("star {} crossed the event horizon", i);
                stats.respawns += 1;
                self.stars[i].respawn(self.corpus, &mut self.streams);

                if self.stars[i].fitness() < self.black_hole_fitness {
                    log::trace!("respawned star {} replaces black hole", i);
                    stats.immediate_swaps += 1;
                    self.swap_black_hole(i);
                }
            }
        }
        stats
    }

    fn swap_black_hole(&mut self, index: usize) {
        self.stars[self.black_hole].mark_orbiting();
        self.stars[index].mark_black_hole();
        self.black_hole = index;
        self.black_hole_fitness = self.stars[index].fitness();
        self.update_event_horizon();
    }

    /// Event horizon = black hole fitness / sum of every other star's fitness.
    fn update_event_horizon(&mut self) {
        let total: f64 = self
            .stars
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.black_hole)
            .map(|(_, s)| s.fitness())
            .sum();

        if total == 0.0 {
            log::info!("Total candidate fitness is 0; event horizon set to 0");
            self.event_horizon = 0.0;
        } else {
            self.event_horizon = self.black_hole_fitness / total;
        }
    }

    fn snapshot_stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            black_hole_fitness: self.black_hole_fitness,
            black_hole_index: self.black_hole,
            event_horizon: self.event_horizon,
            ..Default::default()
        }
    }

    /// Mean fitness of the whole population.
    pub fn mean_fitness(&self) -> f64 {
        self.stars.iter().map(|s| s.fitness()).sum::<f64>() / self.stars.len() as f64
    }

    /// Run `generations` generations, reporting each one to `callback`.
    pub fn run_with_callback<F>(&mut self, generations: usize, mut callback: F) -> OptimizationResult
    where
        F: FnMut(&GenerationStats),
    {
        let start_time = Instant::now();
        let initial_fitness = self.black_hole_fitness;
        let mut history = OptimizationHistory::default();
        let (mut total_swaps, mut total_immediate_swaps, mut total_respawns) = (0, 0, 0);

        for _ in 0..generations {
            self.advance();
            let stats = &self.last_stats;

            total_swaps += stats.swaps;
            total_immediate_swaps += stats.immediate_swaps;
            total_respawns += stats.respawns;
            history.black_hole_fitness.push(stats.black_hole_fitness);
            history.event_horizon.push(stats.event_horizon);
            history.mean_fitness.push(self.mean_fitness());

            callback(&self.last_stats);
        }

        OptimizationResult {
            best_position: self.black_hole().position().to_vec(),
            best_fitness: self.black_hole_fitness,
            random_seed: self.seed,
            stats: RunStats {
                generations,
                initial_fitness,
                best_fitness: self.black_hole_fitness,
                total_swaps,
                total_immediate_swaps,
                total_respawns,
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
            },
            history,
        }
    }

    /// Run the configured number of generations.
    pub fn run(&mut self) -> OptimizationResult {
        self.run_with_callback(self.config.generations, |_| {})
    }

    /// The current black hole.
    pub fn black_hole(&self) -> &Star {
        &self.stars[self.black_hole]
    }

    pub fn black_hole_index(&self) -> usize {
        self.black_hole
    }

    pub fn black_hole_fitness(&self) -> f64 {
        self.black_hole_fitness
    }

    pub fn event_horizon(&self) -> f64 {
        self.event_horizon
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Generations run so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Counters from the most recent generation.
    pub fn last_stats(&self) -> &GenerationStats {
        &self.last_stats
    }

    /// Seed the shared stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}
