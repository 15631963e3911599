use crate::cipher::Permutation;
use crate::consts::ALPHABET_LEN;
use fastrand::Rng;

/// Picks two distinct positions uniformly at random.
#[inline(always)]
pub fn pick_pair(rng: &mut Rng) -> (usize, usize) {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// The only neighbour operator: `key` with two outputs transposed.
/// The input is untouched; a transposition of a bijection is a bijection.
#[inline(always)]
pub fn propose_neighbor(key: &Permutation, rng: &mut Rng) -> Permutation {
    let (a, b) = pick_pair(rng);
    key.transpose(a, b)
}
