use super::types::LexicalTally;
use crate::config::ScoringWeights;
use crate::language::LanguageProfile;
use crate::normalize;
use std::collections::HashSet;

/// Bonus for every normalized token found in the stopword set, a small
/// length-capped penalty for every other token.
pub(crate) fn stopword_term(
    text: &str,
    profile: &LanguageProfile,
    weights: &ScoringWeights,
) -> LexicalTally {
    let mut tally = LexicalTally::default();
    for word in normalize::words(text) {
        let len = word.chars().count();
        if profile.is_stopword(&word) {
            tally.score += weights.stopword_score(len);
            tally.known += 1;
        } else {
            tally.score += weights.unknown_score(len);
            tally.unknown += 1;
        }
    }
    tally
}

/// `weight * len(token)` for every whitespace token that exactly matches
/// the lexicon. Unmatched tokens cost nothing.
pub(crate) fn dictionary_term(text: &str, lexicon: &HashSet<String>, weight: f64) -> LexicalTally {
    let mut tally = LexicalTally::default();
    for token in normalize::whitespace_words(text) {
        if lexicon.contains(&token) {
            tally.score += weight * token.chars().count() as f64;
            tally.known += 1;
        } else {
            tally.unknown += 1;
        }
    }
    tally
}
