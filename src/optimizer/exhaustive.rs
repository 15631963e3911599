use super::Candidate;
use crate::cipher::{CaseFidelity, CipherKey, ShiftKey, SubstitutionKey};
use crate::error::{CfResult, CipherError};
use crate::normalize;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// All 26 shift trials and the winner.
#[derive(Debug, Clone)]
pub struct ShiftSearch {
    pub best: Candidate,
    /// Indexed by shift value.
    pub trials: Vec<Candidate>,
}

impl ShiftSearch {
    /// Trials by descending score; equal scores keep ascending shift order.
    pub fn ranked(&self) -> Vec<&Candidate> {
        let mut ranked: Vec<&Candidate> = self.trials.iter().collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }

    /// 1-based rank of `shift` in `ranked()`.
    pub fn rank_of(&self, shift: ShiftKey) -> Option<usize> {
        let key = CipherKey::Shift(shift);
        self.ranked()
            .iter()
            .position(|c| c.key == key)
            .map(|p| p + 1)
    }
}

/// Tries every shift and keeps the strict maximum (lowest shift on ties).
pub fn search(ciphertext: &str, scorer: &Scorer, fidelity: CaseFidelity) -> CfResult<ShiftSearch> {
    if !normalize::has_letters(ciphertext) {
        return Err(CipherError::EmptyInput);
    }

    let trials: Vec<Candidate> = ShiftKey::all()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|shift| {
            let plaintext = shift.decode_with(ciphertext, fidelity);
            let score = scorer.score(&plaintext);
            Candidate {
                key: CipherKey::Shift(shift),
                plaintext,
                score,
            }
        })
        .collect();

    let mut best = &trials[0];
    for trial in &trials[1..] {
        if trial.beats(best) {
            best = trial;
        }
    }
    let best = best.clone();

    debug!(
        "Exhaustive shift search ({}): best {} with {:.3}",
        scorer.mode(),
        best.key,
        best.score
    );

    Ok(ShiftSearch { best, trials })
}
