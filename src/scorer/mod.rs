pub mod lexicon;
pub mod quadgram;
pub mod types;
pub mod unigram;

pub use self::types::ScoreDetails;

use crate::cipher::Topology;
use crate::config::ScoringWeights;
use crate::error::{CfResult, CipherError};
use crate::language::LanguageProfile;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Fitness function family.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum ScorerMode {
    /// Letter log-probabilities plus stopword bonus / unknown-word penalty.
    UnigramLexicon,
    /// Length of every dictionary word, nothing else.
    Lexicon,
    /// Quadgram log-probabilities plus weighted dictionary word lengths.
    QuadgramLexicon,
}

impl ScorerMode {
    /// Preferred mode for a topology given what the profile provides.
    pub fn default_for(topology: Topology, profile: &LanguageProfile) -> Self {
        match topology {
            Topology::Shift => Self::UnigramLexicon,
            Topology::Permutation if profile.quadgrams().is_some() => Self::QuadgramLexicon,
            Topology::Permutation => Self::UnigramLexicon,
        }
    }
}

/// A profile bound to a mode and weights. Pure: no state changes between calls.
#[derive(Debug, Clone)]
pub struct Scorer {
    profile: Arc<LanguageProfile>,
    mode: ScorerMode,
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(
        profile: Arc<LanguageProfile>,
        mode: ScorerMode,
        weights: ScoringWeights,
    ) -> CfResult<Self> {
        weights.validate()?;
        match mode {
            ScorerMode::QuadgramLexicon if profile.quadgrams().is_none() => {
                return Err(CipherError::MissingResource(format!(
                    "quadgram table for '{}' (add quadgrams.txt to the profile directory)",
                    profile.language()
                )));
            }
            ScorerMode::Lexicon if profile.dictionary().is_none() => {
                debug!(
                    "No dictionary for '{}', lexicon mode falls back to stopwords",
                    profile.language()
                );
            }
            _ => {}
        }
        Ok(Self {
            profile,
            mode,
            weights,
        })
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn mode(&self) -> ScorerMode {
        self.mode
    }

    /// Higher is better; unbounded and usually negative.
    #[inline]
    pub fn score(&self, text: &str) -> f64 {
        self.score_details(text).total
    }

    pub fn score_details(&self, text: &str) -> ScoreDetails {
        let profile = &*self.profile;
        let ((statistical, letters), tally) = match self.mode {
            ScorerMode::UnigramLexicon => (
                unigram::log_likelihood(text, profile),
                lexicon::stopword_term(text, profile, &self.weights),
            ),
            ScorerMode::Lexicon => (
                (0.0, 0),
                lexicon::dictionary_term(text, profile.lexicon(), 1.0),
            ),
            ScorerMode::QuadgramLexicon => {
                // Checked in `new`.
                let stat = match profile.quadgrams() {
                    Some(table) => quadgram::log_likelihood(text, table),
                    None => (0.0, 0),
                };
                (
                    stat,
                    lexicon::dictionary_term(text, profile.lexicon(), self.weights.dict_weight),
                )
            }
        };

        ScoreDetails {
            total: statistical + tally.score,
            statistical,
            letters,
            lexical: tally.score,
            known_words: tally.known,
            unknown_words: tally.unknown,
        }
    }
}
