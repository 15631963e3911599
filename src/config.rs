use crate::cipher::{CaseFidelity, Topology};
use crate::consts::{DEFAULT_ITERATIONS, DEFAULT_RESTARTS};
use crate::error::{CfResult, CipherError};
use crate::optimizer::SeedPolicy;
use crate::scorer::ScorerMode;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, value_enum, default_value_t = Topology::Shift)]
    pub topology: Topology,

    /// Defaults to the topology's preferred mode when omitted.
    #[arg(long, value_enum)]
    pub scorer_mode: Option<ScorerMode>,

    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Consecutive rejected neighbours before a restart gives up (0 = never).
    #[arg(long, default_value_t = 0)]
    pub patience: usize,

    #[arg(long)]
    pub max_time_ms: Option<u64>,

    #[arg(long, value_enum, default_value_t = SeedPolicy::Mixed)]
    pub seed_policy: SeedPolicy,

    #[arg(long, value_enum, default_value_t = CaseFidelity::Preserve)]
    pub case_fidelity: CaseFidelity,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            topology: Topology::Shift,
            scorer_mode: None,
            restarts: DEFAULT_RESTARTS,
            iterations: DEFAULT_ITERATIONS,
            patience: 0,
            max_time_ms: None,
            seed_policy: SeedPolicy::Mixed,
            case_fidelity: CaseFidelity::Preserve,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === STOPWORDS ===
    #[arg(long, default_value_t = 2.0)]
    pub stopword_bonus: f64,
    #[arg(long, default_value_t = 0.2)]
    pub stopword_length_bonus: f64,
    #[arg(long, default_value_t = 10)]
    pub stopword_length_cap: usize,

    // === UNKNOWN TOKENS ===
    #[arg(long, default_value_t = 0.1)]
    pub unknown_word_penalty: f64,
    #[arg(long, default_value_t = 12)]
    pub unknown_length_cap: usize,

    // === DICTIONARY ===
    #[arg(long, default_value_t = 1.0)]
    pub dict_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stopword_bonus: 2.0,
            stopword_length_bonus: 0.2,
            stopword_length_cap: 10,
            unknown_word_penalty: 0.1,
            unknown_length_cap: 12,
            dict_weight: 1.0,
        }
    }
}

impl ScoringWeights {
    #[inline(always)]
    pub fn stopword_score(&self, len: usize) -> f64 {
        self.stopword_bonus + self.stopword_length_bonus * len.min(self.stopword_length_cap) as f64
    }

    #[inline(always)]
    pub fn unknown_score(&self, len: usize) -> f64 {
        -self.unknown_word_penalty * len.min(self.unknown_length_cap) as f64
    }

    pub fn validate(&self) -> CfResult<()> {
        let all_finite = [
            self.stopword_bonus,
            self.stopword_length_bonus,
            self.unknown_word_penalty,
            self.dict_weight,
        ]
        .iter()
        .all(|w| w.is_finite());
        if !all_finite {
            return Err(CipherError::Config(
                "Scoring weights must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.search.restarts == 0 {
            return Err(CipherError::Config(
                "restarts must be at least 1".to_string(),
            ));
        }
        self.weights.validate()
    }

    /// Overlays only the values that were typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.topology);
        update_if_present!(search.scorer_mode);
        update_if_present!(search.restarts);
        update_if_present!(search.iterations);
        update_if_present!(search.patience);
        update_if_present!(search.max_time_ms);
        update_if_present!(search.seed_policy);
        update_if_present!(search.case_fidelity);

        update_if_present!(weights.stopword_bonus);
        update_if_present!(weights.stopword_length_bonus);
        update_if_present!(weights.stopword_length_cap);
        update_if_present!(weights.unknown_word_penalty);
        update_if_present!(weights.unknown_length_cap);
        update_if_present!(weights.dict_weight);
    }
}
