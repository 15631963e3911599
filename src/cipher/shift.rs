use super::{Permutation, SubstitutionKey};
use crate::consts::ALPHABET_LEN;
use serde::{Deserialize, Serialize};

/// Cyclic shift `s`: decode(c) = alphabet[(index(c) - s) mod 26].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct ShiftKey(u8);

impl ShiftKey {
    /// Any integer is accepted and reduced mod 26.
    pub fn new(shift: u32) -> Self {
        Self((shift % ALPHABET_LEN as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The shift that undoes this one (`26 - s`, mod 26).
    pub fn inverse(&self) -> Self {
        Self::new(ALPHABET_LEN as u32 - self.0 as u32)
    }

    /// All 26 keys in ascending order.
    pub fn all() -> impl Iterator<Item = ShiftKey> {
        (0..ALPHABET_LEN as u32).map(ShiftKey::new)
    }
}

impl SubstitutionKey for ShiftKey {
    #[inline(always)]
    fn plain_index(&self, cipher_index: usize) -> usize {
        (cipher_index + ALPHABET_LEN - self.0 as usize) % ALPHABET_LEN
    }

    fn to_permutation(&self) -> Permutation {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = self.plain_index(i) as u8;
        }
        // A rotation is always a bijection.
        Permutation::from_table_unchecked(table)
    }
}

impl From<u8> for ShiftKey {
    fn from(v: u8) -> Self {
        Self::new(v as u32)
    }
}

impl From<ShiftKey> for u8 {
    fn from(k: ShiftKey) -> Self {
        k.0
    }
}
