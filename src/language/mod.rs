pub mod builder;
pub mod builtin;
pub mod loader;

pub use self::builder::ProfileBuildParams;

use crate::consts::{ALPHABET_LEN, QUADGRAM_TABLE_LEN};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter, EnumString};

/// Supported statistical profiles. Declaration order is the tie-break order
/// when the engine auto-detects the language.
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
pub enum Language {
    #[serde(rename = "en", alias = "english")]
    #[strum(to_string = "en", serialize = "english")]
    #[value(name = "en", alias = "english")]
    English,
    #[serde(rename = "fr", alias = "french")]
    #[strum(to_string = "fr", serialize = "french")]
    #[value(name = "fr", alias = "french")]
    French,
}

impl Language {
    pub fn letter_frequencies(&self) -> &'static [f64; ALPHABET_LEN] {
        match self {
            Self::English => &builtin::ENGLISH_LETTER_FREQ,
            Self::French => &builtin::FRENCH_LETTER_FREQ,
        }
    }

    pub fn stopwords(&self) -> &'static [&'static str] {
        match self {
            Self::English => builtin::ENGLISH_STOPWORDS,
            Self::French => builtin::FRENCH_STOPWORDS,
        }
    }
}

/// Dense log10-probability table over all 26^4 quadgrams.
#[derive(Debug, Clone)]
pub struct QuadgramTable {
    scores: Vec<f64>,
    floor: f64,
    known: usize,
}

impl QuadgramTable {
    pub(crate) fn new(scores: Vec<f64>, floor: f64, known: usize) -> Self {
        debug_assert_eq!(scores.len(), QUADGRAM_TABLE_LEN);
        Self {
            scores,
            floor,
            known,
        }
    }

    /// Score for the quadgram at dense index `a*26^3 + b*26^2 + c*26 + d`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> f64 {
        self.scores[index]
    }

    /// Score for a 4-letter lowercase ASCII sequence; anything else gets the floor.
    pub fn lookup(&self, quad: &str) -> f64 {
        let bytes = quad.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_lowercase) {
            return self.floor;
        }
        let idx = bytes
            .iter()
            .fold(0usize, |acc, &b| acc * ALPHABET_LEN + (b - b'a') as usize);
        self.scores[idx]
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Number of quadgrams that were present in the source table.
    pub fn known(&self) -> usize {
        self.known
    }
}

/// Immutable statistical resources for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub(crate) language: Language,
    pub(crate) unigram_logprob: [f64; ALPHABET_LEN],
    pub(crate) frequency_order: [u8; ALPHABET_LEN],
    pub(crate) quadgrams: Option<QuadgramTable>,
    pub(crate) stopwords: HashSet<String>,
    pub(crate) dictionary: Option<HashSet<String>>,
}

impl LanguageProfile {
    /// Profile built only from the embedded tables.
    pub fn builtin(language: Language) -> Self {
        builder::builtin_profile(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    #[inline(always)]
    pub fn unigram_logprob(&self, index: usize) -> f64 {
        self.unigram_logprob[index]
    }

    /// Alphabet indices from most to least frequent.
    pub fn frequency_order(&self) -> &[u8; ALPHABET_LEN] {
        &self.frequency_order
    }

    pub fn quadgrams(&self) -> Option<&QuadgramTable> {
        self.quadgrams.as_ref()
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn dictionary(&self) -> Option<&HashSet<String>> {
        self.dictionary.as_ref()
    }

    /// The full dictionary when one was loaded, else the stopword set.
    pub fn lexicon(&self) -> &HashSet<String> {
        self.dictionary.as_ref().unwrap_or(&self.stopwords)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}
