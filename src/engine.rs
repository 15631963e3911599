use crate::cipher::{CipherKey, Topology};
use crate::config::{Config, ScoringWeights};
use crate::error::{CfResult, CipherError};
use crate::language::{Language, LanguageProfile, ProfileBuildParams};
use crate::normalize;
use crate::optimizer::{exhaustive, HillClimber, NoProgress, SearchOptions};
use crate::scorer::{Scorer, ScorerMode};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// Everything `Engine::solve` needs besides the ciphertext.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub topology: Topology,
    pub scorer_mode: Option<ScorerMode>,
    pub weights: ScoringWeights,
    pub search: SearchOptions,
    /// `None` tries every loaded profile.
    pub language: Option<Language>,
    pub seed: Option<u64>,
}

impl From<&Config> for SolveOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            topology: cfg.search.topology,
            scorer_mode: cfg.search.scorer_mode,
            weights: cfg.weights.clone(),
            search: SearchOptions::from(cfg),
            language: None,
            seed: None,
        }
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl SolveOptions {
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub plaintext: String,
    pub key: CipherKey,
    /// `-inf` when there was nothing to decode.
    pub score: f64,
    pub language: Language,
    pub scorer_mode: ScorerMode,
}

/// Holds the immutable profiles; every `solve` call is independent.
pub struct Engine {
    profiles: Vec<Arc<LanguageProfile>>,
}

impl Engine {
    /// Profiles are kept in `Language` declaration order.
    pub fn new(profiles: Vec<LanguageProfile>) -> CfResult<Self> {
        if profiles.is_empty() {
            return Err(CipherError::Config(
                "engine needs at least one language profile".to_string(),
            ));
        }
        let mut profiles: Vec<Arc<LanguageProfile>> = profiles.into_iter().map(Arc::new).collect();
        profiles.sort_by_key(|p| p.language() as u8);
        if let Some(w) = profiles.windows(2).find(|w| w[0].language() == w[1].language()) {
            return Err(CipherError::Config(format!(
                "duplicate profile for '{}'",
                w[0].language()
            )));
        }
        Ok(Self { profiles })
    }

    /// Every language with its embedded tables only.
    pub fn builtin() -> Self {
        Self {
            profiles: Language::iter()
                .map(|lang| Arc::new(LanguageProfile::builtin(lang)))
                .collect(),
        }
    }

    /// One profile per language from `data_dir/<code>/`, falling back to the
    /// built-in tables when a language directory is missing.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> CfResult<Self> {
        let data_dir = data_dir.as_ref();
        let profiles = Language::iter()
            .map(|lang| ProfileBuildParams::load_or_builtin(lang, data_dir.join(lang.to_string())))
            .collect::<CfResult<Vec<_>>>()?;
        Self::new(profiles)
    }

    pub fn profile(&self, language: Language) -> CfResult<&Arc<LanguageProfile>> {
        self.profiles
            .iter()
            .find(|p| p.language() == language)
            .ok_or(CipherError::UnknownLanguage(language))
    }

    pub fn profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.iter().map(|p| p.as_ref())
    }

    pub fn solve(&self, ciphertext: &str, options: &SolveOptions) -> CfResult<Solution> {
        let candidates: Vec<&Arc<LanguageProfile>> = match options.language {
            Some(lang) => vec![self.profile(lang)?],
            None => self.profiles.iter().collect(),
        };

        if !normalize::has_letters(ciphertext) {
            debug!("Nothing to decode, returning input unchanged");
            let profile = candidates[0];
            return Ok(Solution {
                plaintext: ciphertext.to_string(),
                key: CipherKey::identity(options.topology),
                score: f64::NEG_INFINITY,
                language: profile.language(),
                scorer_mode: options
                    .scorer_mode
                    .unwrap_or_else(|| ScorerMode::default_for(options.topology, profile)),
            });
        }

        info!(
            "🔍 Solving {} cipher ({} chars) against {} profile(s)",
            options.topology,
            ciphertext.len(),
            candidates.len()
        );

        let results: Vec<CfResult<Solution>> = candidates
            .par_iter()
            .map(|profile| self.solve_with(profile, ciphertext, options))
            .collect();

        let auto = options.language.is_none();
        let mut best: Option<Solution> = None;
        let mut first_error: Option<CipherError> = None;
        for result in results {
            match result {
                Ok(solution) => {
                    let replace = match &best {
                        Some(current) => solution.score > current.score,
                        None => true,
                    };
                    if replace {
                        best = Some(solution);
                    }
                }
                Err(CipherError::MissingResource(msg)) if auto => {
                    warn!("Skipping profile: missing {}", msg);
                    if first_error.is_none() {
                        first_error = Some(CipherError::MissingResource(msg));
                    }
                }
                Err(e) => return Err(e),
            }
        }

        let solution = match (best, first_error) {
            (Some(s), _) => s,
            (None, Some(e)) => return Err(e),
            (None, None) => {
                return Err(CipherError::Config("no profile produced a result".to_string()))
            }
        };
        solution.key.validate()?;

        info!(
            "✅ Best: '{}' [{}] key {} score {:.3}",
            solution.language, solution.scorer_mode, solution.key, solution.score
        );
        Ok(solution)
    }

    /// Runs the full pipeline for one profile.
    pub fn solve_with(
        &self,
        profile: &Arc<LanguageProfile>,
        ciphertext: &str,
        options: &SolveOptions,
    ) -> CfResult<Solution> {
        let mode = options
            .scorer_mode
            .unwrap_or_else(|| ScorerMode::default_for(options.topology, profile));
        let scorer = Scorer::new(profile.clone(), mode, options.weights.clone())?;

        let best = match options.topology {
            Topology::Shift => {
                exhaustive::search(ciphertext, &scorer, options.search.case_fidelity)?.best
            }
            Topology::Permutation => {
                let climber = HillClimber::new(Arc::new(scorer), options.search.clone());
                let outcome = climber.run(ciphertext, options.seed, &NoProgress)?;
                debug!(
                    "'{}': {} restarts, {} iterations in {:?}",
                    profile.language(),
                    outcome.restarts_completed,
                    outcome.total_iterations,
                    outcome.elapsed
                );
                outcome.best
            }
        };

        Ok(Solution {
            plaintext: best.plaintext,
            key: best.key,
            score: best.score,
            language: profile.language(),
            scorer_mode: mode,
        })
    }
}
