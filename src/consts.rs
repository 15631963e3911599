/// Number of symbols in the cipher alphabet (a..z).
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in index order.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"abcdefghijklmnopqrstuvwxyz";

/// Size of the dense quadgram table (26^4).
pub const QUADGRAM_TABLE_LEN: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// Pseudo-count given to quadgrams absent from the table.
pub const QUADGRAM_FLOOR_COUNT: f64 = 0.01;

/// Zero-weight letters are floored at this fraction of the table total.
pub const UNIGRAM_FLOOR_FRACTION: f64 = 1e-5;

/// Default number of independent hill-climbing restarts.
pub const DEFAULT_RESTARTS: usize = 20;

/// Default iteration budget per restart.
pub const DEFAULT_ITERATIONS: usize = 5000;
