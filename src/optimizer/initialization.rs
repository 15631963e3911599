use crate::cipher::Permutation;
use crate::consts::ALPHABET_LEN;
use crate::language::LanguageProfile;
use crate::normalize;
use crate::optimizer::SeedPolicy;
use fastrand::Rng;

/// Aligns the ciphertext's letter frequency ranking with the language's.
///
/// Cipher letters are ranked by count (ties by first occurrence); letters
/// that never occur follow in alphabetical order. The k-th ranked cipher
/// letter decodes to the k-th most frequent plain letter of the profile.
pub fn frequency_seed(ciphertext: &str, profile: &LanguageProfile) -> Permutation {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut first_seen = [usize::MAX; ALPHABET_LEN];
    for (pos, idx) in normalize::letter_indices(ciphertext).enumerate() {
        counts[idx] += 1;
        if first_seen[idx] == usize::MAX {
            first_seen[idx] = pos;
        }
    }

    let mut ranked: Vec<usize> = (0..ALPHABET_LEN).collect();
    // Absent letters all have first_seen == MAX, so the stable sort keeps them alphabetical.
    ranked.sort_by(|&a, &b| {
        counts[b]
            .cmp(&counts[a])
            .then(first_seen[a].cmp(&first_seen[b]))
    });

    let order = profile.frequency_order();
    let mut table = [0u8; ALPHABET_LEN];
    for (rank, &cipher) in ranked.iter().enumerate() {
        table[cipher] = order[rank];
    }
    // Both rankings are orderings of the full alphabet.
    Permutation::from_table_unchecked(table)
}

/// Uniformly shuffled key.
pub fn random_seed(rng: &mut Rng) -> Permutation {
    let mut table = *Permutation::identity().table();
    rng.shuffle(&mut table);
    Permutation::from_table_unchecked(table)
}

/// Starting key for restart `restart` under `policy`.
pub fn initial_key(
    policy: SeedPolicy,
    restart: usize,
    ciphertext: &str,
    profile: &LanguageProfile,
    rng: &mut Rng,
) -> Permutation {
    match policy {
        SeedPolicy::Frequency => frequency_seed(ciphertext, profile),
        SeedPolicy::Random => random_seed(rng),
        SeedPolicy::Mixed if restart == 0 => frequency_seed(ciphertext, profile),
        SeedPolicy::Mixed => random_seed(rng),
    }
}
