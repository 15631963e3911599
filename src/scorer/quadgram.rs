use crate::consts::{ALPHABET_LEN, QUADGRAM_TABLE_LEN};
use crate::language::QuadgramTable;
use crate::normalize;

/// Sum of log10 quadgram scores over every 4-letter window of the
/// letters-only lowercase view of `text`. Fewer than four letters score 0.
pub fn log_likelihood(text: &str, table: &QuadgramTable) -> (f64, usize) {
    let mut sum = 0.0;
    let mut window = 0usize;
    let mut n = 0;
    for idx in normalize::letter_indices(text) {
        // Rolling base-26 index of the last four letters.
        window = (window * ALPHABET_LEN + idx) % QUADGRAM_TABLE_LEN;
        n += 1;
        if n >= 4 {
            sum += table.get(window);
        }
    }
    (sum, n)
}
