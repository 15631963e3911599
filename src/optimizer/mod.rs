pub mod climber;
pub mod exhaustive;
pub mod initialization;
pub mod mutation;
pub mod runner;

pub use self::climber::SearchState;
pub use self::exhaustive::ShiftSearch;
pub use self::runner::{HillClimber, NoProgress, ProgressCallback, SearchOptions, SearchOutcome};

use crate::cipher::CipherKey;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A scored decryption: the key, the text it produces, and its fitness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub key: CipherKey,
    pub plaintext: String,
    pub score: f64,
}

impl Candidate {
    /// Strictly better; equal scores keep the incumbent.
    #[inline(always)]
    pub fn beats(&self, other: &Candidate) -> bool {
        self.score > other.score
    }
}

/// Where each hill-climbing restart starts from.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SeedPolicy {
    /// Every restart starts from the frequency-aligned key.
    Frequency,
    /// Every restart starts from a uniformly shuffled key.
    Random,
    /// Restart 0 is frequency-aligned, the rest are shuffled.
    #[default]
    Mixed,
}
