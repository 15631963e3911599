use serde::{Deserialize, Serialize};

/// Breakdown of one fitness evaluation. `total` is exactly what
/// `Scorer::score` returns for the same text.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub total: f64,

    // Statistical-model term (unigram or quadgram log-likelihood)
    pub statistical: f64,
    pub letters: usize,

    // Lexical term
    pub lexical: f64,
    pub known_words: usize,
    pub unknown_words: usize,
}

/// Partial result of a lexical pass.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LexicalTally {
    pub score: f64,
    pub known: usize,
    pub unknown: usize,
}
