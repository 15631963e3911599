use super::loader::{load_ngram_counts_from_path, load_word_list_from_path, NgramCounts};
use super::{Language, LanguageProfile, QuadgramTable};
use crate::consts::{ALPHABET_LEN, QUADGRAM_FLOOR_COUNT, QUADGRAM_TABLE_LEN, UNIGRAM_FLOOR_FRACTION};
use crate::error::{CfResult, CipherError};
use crate::normalize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

const MONOGRAMS_FILE: &str = "monograms.txt";
const QUADGRAMS_FILE: &str = "quadgrams.txt";
const STOPWORDS_FILE: &str = "stopwords.txt";
const WORDS_FILE: &str = "words.txt";

#[derive(TypedBuilder)]
pub struct ProfileBuildParams {
    pub language: Language,
    /// Relative letter weights (a..z); the language's built-in table when absent.
    #[builder(default, setter(strip_option))]
    pub letter_frequencies: Option<[f64; ALPHABET_LEN]>,
    #[builder(default, setter(strip_option))]
    pub quadgram_counts: Option<NgramCounts>,
    /// Built-in common words when absent.
    #[builder(default, setter(strip_option))]
    pub stopwords: Option<Vec<String>>,
    #[builder(default, setter(strip_option))]
    pub dictionary: Option<Vec<String>>,
}

impl ProfileBuildParams {
    /// Builds a profile from whichever resource files exist in `dir`,
    /// using the embedded tables for the rest.
    pub fn load_from_dir<P: AsRef<Path>>(language: Language, dir: P) -> CfResult<LanguageProfile> {
        let dir = dir.as_ref();

        let mut letter_frequencies = None;
        let monograms = dir.join(MONOGRAMS_FILE);
        if monograms.exists() {
            let counts = load_ngram_counts_from_path(&monograms)?;
            if counts.has_unigrams() {
                letter_frequencies = Some(counts.unigrams);
            } else {
                warn!(
                    "{} holds no single-letter counts, using built-in letter table",
                    monograms.display()
                );
            }
        }

        let quadgrams = dir.join(QUADGRAMS_FILE);
        let quadgram_counts = if quadgrams.exists() {
            let counts = load_ngram_counts_from_path(&quadgrams)?;
            // A combined n-gram file can also carry the letter counts.
            if letter_frequencies.is_none() && counts.has_unigrams() {
                letter_frequencies = Some(counts.unigrams);
            }
            Some(counts)
        } else {
            None
        };

        let stopwords_path = dir.join(STOPWORDS_FILE);
        let stopwords = if stopwords_path.exists() {
            Some(load_word_list_from_path(&stopwords_path)?)
        } else {
            None
        };

        let words_path = dir.join(WORDS_FILE);
        let dictionary = if words_path.exists() {
            Some(load_word_list_from_path(&words_path)?)
        } else {
            None
        };

        ProfileBuildParams {
            language,
            letter_frequencies,
            quadgram_counts,
            stopwords,
            dictionary,
        }
        .build_profile()
    }

    /// Like `load_from_dir`, but a missing directory yields the built-in profile.
    pub fn load_or_builtin<P: AsRef<Path>>(language: Language, dir: P) -> CfResult<LanguageProfile> {
        let dir = dir.as_ref();
        if dir.is_dir() {
            info!("Loading '{}' profile from {}", language, dir.display());
            Self::load_from_dir(language, dir)
        } else {
            warn!(
                "Profile directory {} not found. Using built-in '{}' profile.",
                dir.display(),
                language
            );
            Ok(LanguageProfile::builtin(language))
        }
    }

    pub fn build_profile(self) -> CfResult<LanguageProfile> {
        let language = self.language;
        let weights = self
            .letter_frequencies
            .unwrap_or(*language.letter_frequencies());

        let unigram_logprob = unigram_log_table(&weights)?;
        let frequency_order = rank_letters(&weights);

        let quadgrams = match self.quadgram_counts {
            Some(counts) => Some(quadgram_table(&counts)?),
            None => None,
        };

        let stopwords: HashSet<String> = match self.stopwords {
            Some(words) => words.iter().map(|w| normalize::fold(w)).collect(),
            None => language
                .stopwords()
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        };

        let dictionary = self
            .dictionary
            .map(|words| words.iter().map(|w| normalize::fold(w)).collect::<HashSet<_>>());

        debug!(
            "Built '{}' profile: {} stopwords, dictionary: {:?}, quadgrams: {:?}",
            language,
            stopwords.len(),
            dictionary.as_ref().map(HashSet::len),
            quadgrams.as_ref().map(QuadgramTable::known)
        );

        Ok(LanguageProfile {
            language,
            unigram_logprob,
            frequency_order,
            quadgrams,
            stopwords,
            dictionary,
        })
    }
}

pub(crate) fn builtin_profile(language: Language) -> LanguageProfile {
    let weights = language.letter_frequencies();
    let unigram_logprob = match unigram_log_table(weights) {
        Ok(table) => table,
        // Embedded tables are positive; this arm only guards the invariant.
        Err(_) => [-(ALPHABET_LEN as f64).ln(); ALPHABET_LEN],
    };
    LanguageProfile {
        language,
        unigram_logprob,
        frequency_order: rank_letters(weights),
        quadgrams: None,
        stopwords: language
            .stopwords()
            .iter()
            .map(|w| (*w).to_string())
            .collect(),
        dictionary: None,
    }
}

/// Natural-log probabilities, weights normalized to sum to 1.
/// Zero weights are floored so no entry is `-inf`.
fn unigram_log_table(weights: &[f64; ALPHABET_LEN]) -> CfResult<[f64; ALPHABET_LEN]> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(CipherError::Validation(
            "Letter frequencies must be finite and non-negative".to_string(),
        ));
    }
    let raw_total: f64 = weights.iter().sum();
    if raw_total <= 0.0 {
        return Err(CipherError::Validation(
            "Letter frequency table sums to zero".to_string(),
        ));
    }

    let floor = raw_total * UNIGRAM_FLOOR_FRACTION;
    let floored: Vec<f64> = weights.iter().map(|&w| w.max(floor)).collect();
    let total: f64 = floored.iter().sum();

    let mut table = [0.0; ALPHABET_LEN];
    for (slot, w) in table.iter_mut().zip(floored) {
        *slot = (w / total).ln();
    }
    Ok(table)
}

/// Alphabet indices sorted by descending weight; ties keep alphabetical order.
fn rank_letters(weights: &[f64; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut idx: Vec<usize> = (0..ALPHABET_LEN).collect();
    idx.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
    let mut order = [0u8; ALPHABET_LEN];
    for (slot, i) in order.iter_mut().zip(idx) {
        *slot = i as u8;
    }
    order
}

fn quadgram_table(counts: &NgramCounts) -> CfResult<QuadgramTable> {
    let total: f64 = counts.quadgrams.iter().map(|(_, c)| c).sum();
    if counts.quadgrams.is_empty() || total <= 0.0 {
        return Err(CipherError::Validation(
            "Quadgram file resulted in 0 valid quadgrams.".to_string(),
        ));
    }

    let floor = (QUADGRAM_FLOOR_COUNT / total).log10();
    let mut merged = vec![0.0; QUADGRAM_TABLE_LEN];
    for (quad, count) in &counts.quadgrams {
        let idx = quad
            .iter()
            .fold(0usize, |acc, &b| acc * ALPHABET_LEN + (b - b'a') as usize);
        merged[idx] += count;
    }

    let mut known = 0;
    let scores = merged
        .into_iter()
        .map(|c| {
            if c > 0.0 {
                known += 1;
                (c / total).log10()
            } else {
                floor
            }
        })
        .collect();

    Ok(QuadgramTable::new(scores, floor, known))
}
