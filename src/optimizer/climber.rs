use super::mutation;
use crate::cipher::{CaseFidelity, Permutation, SubstitutionKey};
use crate::scorer::Scorer;
use fastrand::Rng;
use std::time::Instant;

/// What a restart climbs against: fixed ciphertext, scorer and case policy.
#[derive(Clone, Copy)]
pub struct Objective<'a> {
    pub scorer: &'a Scorer,
    pub ciphertext: &'a str,
    pub fidelity: CaseFidelity,
}

impl Objective<'_> {
    #[inline]
    pub fn evaluate(&self, key: &Permutation) -> (String, f64) {
        let plaintext = key.decode_with(self.ciphertext, self.fidelity);
        let score = self.scorer.score(&plaintext);
        (plaintext, score)
    }
}

/// Per-restart state of a greedy climb. Owned by exactly one restart.
pub struct SearchState {
    pub key: Permutation,
    pub score: f64,
    pub plaintext: String,
    pub iteration: usize,
    pub restart: usize,
    /// Consecutive rejected neighbours.
    pub stale: usize,
    pub rng: Rng,
}

impl SearchState {
    pub fn new(restart: usize, key: Permutation, objective: &Objective<'_>, rng: Rng) -> Self {
        let (plaintext, score) = objective.evaluate(&key);
        Self {
            key,
            score,
            plaintext,
            iteration: 0,
            restart,
            stale: 0,
            rng,
        }
    }

    /// One proposal. Returns true if the neighbour was strictly better and
    /// replaced the current key.
    pub fn step(&mut self, objective: &Objective<'_>) -> bool {
        self.iteration += 1;
        let candidate = mutation::propose_neighbor(&self.key, &mut self.rng);
        let (plaintext, score) = objective.evaluate(&candidate);

        if score > self.score {
            self.key = candidate;
            self.score = score;
            self.plaintext = plaintext;
            self.stale = 0;
            true
        } else {
            self.stale += 1;
            false
        }
    }

    /// Runs up to `iterations` steps. Stops early after `patience` consecutive
    /// rejections (0 disables) or once `deadline` has passed.
    pub fn climb(
        &mut self,
        objective: &Objective<'_>,
        iterations: usize,
        patience: usize,
        deadline: Option<Instant>,
    ) {
        while self.iteration < iterations {
            if patience > 0 && self.stale >= patience {
                break;
            }
            if let Some(limit) = deadline {
                if Instant::now() >= limit {
                    break;
                }
            }
            self.step(objective);
        }
    }
}
