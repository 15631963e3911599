use crate::language::LanguageProfile;
use crate::normalize;

/// Sum of natural-log letter probabilities over the ASCII letters of `text`.
/// Returns the sum and the number of letters seen.
pub fn log_likelihood(text: &str, profile: &LanguageProfile) -> (f64, usize) {
    let mut sum = 0.0;
    let mut n = 0;
    for idx in normalize::letter_indices(text) {
        sum += profile.unigram_logprob(idx);
        n += 1;
    }
    (sum, n)
}
