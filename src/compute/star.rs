//! Stars: candidate clusterings in the black hole population.

use rand::prelude::*;

use crate::schema::Corpus;

use super::metric::fitness;
use super::rng::StreamFactory;

/// Role a star plays in the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The best star found so far; every other star moves toward it.
    BlackHole,
    /// A regular star.
    Orbiting,
}

/// A candidate clustering: one centroid vector per cluster.
#[derive(Debug, Clone)]
pub struct Star {
    position: Vec<Vec<f64>>,
    fitness: f64,
    role: Role,
    rng: StdRng,
}

impl Star {
    /// Sample a star whose centroids are `centroid_count` distinct corpus documents.
    ///
    /// Takes one value from `streams` for the private generator before drawing
    /// the document permutation.
    pub fn new(corpus: &Corpus, centroid_count: usize, streams: &mut StreamFactory) -> Self {
        let rng = streams.spawn_stream();
        let position = sample_position(corpus, centroid_count, streams);
        let fitness = fitness(&position, corpus);

        Self {
            position,
            fitness,
            role: Role::Orbiting,
            rng,
        }
    }

    /// Star with a given position and cached fitness; the two need not agree.
    #[cfg(test)]
    pub(crate) fn from_parts(position: Vec<Vec<f64>>, fitness: f64, seed: u64) -> Self {
        Self {
            position,
            fitness,
            role: Role::Orbiting,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace this star with a freshly sampled one, drawn from the shared stream.
    pub fn respawn(&mut self, corpus: &Corpus, streams: &mut StreamFactory) {
        let centroid_count = self.position.len();
        *self = Self::new(corpus, centroid_count, streams);
    }

    /// Move every coordinate a random fraction of the way toward the black hole.
    ///
    /// Each scalar gets its own step size in `[0, 1)` from the private stream:
    /// `x += r * (x_bh - x)`. The black hole itself does not move.
    pub fn move_toward(&mut self, black_hole: &[Vec<f64>], corpus: &Corpus) {
        if self.is_black_hole() {
            return;
        }

        for (centroid, target) in self.position.iter_mut().zip(black_hole) {
            for (x, &x_bh) in centroid.iter_mut().zip(target) {
                let r: f64 = self.rng.r#gen();
                *x += r * (x_bh - *x);
            }
        }
        self.update_fitness(corpus);
    }

    fn update_fitness(&mut self, corpus: &Corpus) {
        self.fitness = fitness(&self.position, corpus);
    }

    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    #[inline]
    pub fn position(&self) -> &[Vec<f64>] {
        &self.position
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn is_black_hole(&self) -> bool {
        self.role == Role::BlackHole
    }

    pub fn mark_black_hole(&mut self) {
        self.role = Role::BlackHole;
    }

    pub fn mark_orbiting(&mut self) {
        self.role = Role::Orbiting;
    }
}

/// Copy the weights of the first `centroid_count` documents of a random permutation.
fn sample_position(
    corpus: &Corpus,
    centroid_count: usize,
    streams: &mut StreamFactory,
) -> Vec<Vec<f64>> {
    streams
        .shuffled_indices(corpus.len())
        .into_iter()
        .take(centroid_count)
        .map(|i| corpus[i].weights.clone())
        .collect()
}
