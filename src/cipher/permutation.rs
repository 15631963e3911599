use super::SubstitutionKey;
use crate::consts::{ALPHABET, ALPHABET_LEN};
use crate::error::{CfResult, CipherError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bijection from cipher index to plain index.
///
/// The table is private so every value reachable from safe constructors is a
/// total bijection over the 26 letters. Rendered as a 26-letter string where
/// position `i` holds the plaintext letter for cipher letter `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Permutation {
    table: [u8; ALPHABET_LEN],
}

impl Permutation {
    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { table }
    }

    pub fn try_from_table(table: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let p = Self { table };
        p.validate()?;
        Ok(p)
    }

    pub(crate) fn from_table_unchecked(table: [u8; ALPHABET_LEN]) -> Self {
        debug_assert!(check_bijection(&table).is_ok());
        Self { table }
    }

    pub fn table(&self) -> &[u8; ALPHABET_LEN] {
        &self.table
    }

    /// Every output symbol in range and used exactly once.
    pub fn validate(&self) -> CfResult<()> {
        check_bijection(&self.table)
    }

    /// Returns a new key with the outputs at positions `a` and `b` exchanged.
    #[inline(always)]
    pub fn transpose(&self, a: usize, b: usize) -> Self {
        let mut table = self.table;
        table.swap(a, b);
        Self { table }
    }

    pub fn inverse(&self) -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (cipher, &plain) in self.table.iter().enumerate() {
            table[plain as usize] = cipher as u8;
        }
        Self { table }
    }
}

fn check_bijection(table: &[u8; ALPHABET_LEN]) -> CfResult<()> {
    let mut seen = [false; ALPHABET_LEN];
    for (i, &v) in table.iter().enumerate() {
        let v = v as usize;
        if v >= ALPHABET_LEN {
            return Err(CipherError::InvalidKey(format!(
                "position {} maps outside the alphabet ({})",
                i, v
            )));
        }
        if seen[v] {
            return Err(CipherError::InvalidKey(format!(
                "letter '{}' is the image of more than one cipher letter",
                ALPHABET[v] as char
            )));
        }
        seen[v] = true;
    }
    Ok(())
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl SubstitutionKey for Permutation {
    #[inline(always)]
    fn plain_index(&self, cipher_index: usize) -> usize {
        self.table[cipher_index] as usize
    }

    fn to_permutation(&self) -> Permutation {
        *self
    }
}

impl FromStr for Permutation {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().collect();
        if letters.len() != ALPHABET_LEN {
            return Err(CipherError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN,
                letters.len()
            )));
        }
        let mut table = [0u8; ALPHABET_LEN];
        for (slot, c) in table.iter_mut().zip(letters) {
            if !c.is_ascii_alphabetic() {
                return Err(CipherError::InvalidKey(format!("'{}' is not a letter", c)));
            }
            *slot = c.to_ascii_lowercase() as u8 - b'a';
        }
        Self::try_from_table(table)
    }
}

impl TryFrom<String> for Permutation {
    type Error = CipherError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Permutation> for String {
    fn from(p: Permutation) -> Self {
        p.to_string()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &v in &self.table {
            write!(f, "{}", ALPHABET[v as usize] as char)?;
        }
        Ok(())
    }
}
