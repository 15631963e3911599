use super::climber::{Objective, SearchState};
use super::{initialization, Candidate, SeedPolicy};
use crate::cipher::{CaseFidelity, CipherKey};
use crate::config::Config;
use crate::error::{CfResult, CipherError};
use crate::normalize;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub restarts: usize,
    pub iterations: usize,
    pub patience: usize,
    pub max_time: Option<Duration>,
    pub seed_policy: SeedPolicy,
    pub case_fidelity: CaseFidelity,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            restarts: cfg.search.restarts,
            iterations: cfg.search.iterations,
            patience: cfg.search.patience,
            max_time: cfg.search.max_time_ms.map(Duration::from_millis),
            seed_policy: cfg.search.seed_policy,
            case_fidelity: cfg.search.case_fidelity,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Candidate,
    pub restarts_completed: usize,
    pub total_iterations: usize,
    pub elapsed: Duration,
}

/// Notified after each finished restart. Returning false skips the
/// restarts that have not started yet.
pub trait ProgressCallback: Send + Sync {
    fn on_restart(&self, restart: usize, result: &Candidate) -> bool;
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_restart(&self, _restart: usize, _result: &Candidate) -> bool {
        true
    }
}

struct RestartResult {
    candidate: Candidate,
    iterations: usize,
}

/// Greedy hill-climbing over permutation keys with independent restarts.
pub struct HillClimber {
    scorer: Arc<Scorer>,
    options: SearchOptions,
}

impl HillClimber {
    pub fn new(scorer: Arc<Scorer>, options: SearchOptions) -> Self {
        Self { scorer, options }
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        seed: Option<u64>,
        callback: &CB,
    ) -> CfResult<SearchOutcome> {
        let opts = &self.options;
        if opts.restarts == 0 {
            return Err(CipherError::Config(
                "restarts must be at least 1".to_string(),
            ));
        }
        if !normalize::has_letters(ciphertext) {
            return Err(CipherError::EmptyInput);
        }

        let objective = Objective {
            scorer: &self.scorer,
            ciphertext,
            fidelity: opts.case_fidelity,
        };
        let start_time = Instant::now();
        let deadline = opts.max_time.map(|d| start_time + d);
        let abort = AtomicBool::new(false);

        // Indexed parallel map keeps restart order in the collected results.
        let results: Vec<Option<RestartResult>> = (0..opts.restarts)
            .into_par_iter()
            .map(|restart| {
                if abort.load(Ordering::Relaxed) {
                    return None;
                }
                if restart > 0 {
                    if let Some(limit) = deadline {
                        if Instant::now() >= limit {
                            return None;
                        }
                    }
                }

                let mut rng = match seed {
                    Some(s) => fastrand::Rng::with_seed(s.wrapping_add(restart as u64)),
                    None => fastrand::Rng::new(),
                };
                let key = initialization::initial_key(
                    opts.seed_policy,
                    restart,
                    ciphertext,
                    self.scorer.profile(),
                    &mut rng,
                );

                let mut state = SearchState::new(restart, key, &objective, rng);
                state.climb(&objective, opts.iterations, opts.patience, deadline);

                debug!(
                    "Restart {:3} finished after {} iterations: {:.3}",
                    state.restart, state.iteration, state.score
                );

                let candidate = Candidate {
                    key: CipherKey::Permutation(state.key),
                    plaintext: state.plaintext,
                    score: state.score,
                };
                if !callback.on_restart(restart, &candidate) {
                    abort.store(true, Ordering::Relaxed);
                }
                Some(RestartResult {
                    candidate,
                    iterations: state.iteration,
                })
            })
            .collect();

        let mut best: Option<Candidate> = None;
        let mut restarts_completed = 0;
        let mut total_iterations = 0;
        for result in results.into_iter().flatten() {
            restarts_completed += 1;
            total_iterations += result.iterations;
            let replace = match &best {
                Some(current) => result.candidate.beats(current),
                None => true,
            };
            if replace {
                best = Some(result.candidate);
            }
        }

        let best = best.ok_or_else(|| {
            CipherError::Config("search was cancelled before any restart finished".to_string())
        })?;

        Ok(SearchOutcome {
            best,
            restarts_completed,
            total_iterations,
            elapsed: start_time.elapsed(),
        })
    }
}
