pub mod permutation;
pub mod shift;

pub use self::permutation::Permutation;
pub use self::shift::ShiftKey;

use crate::error::CfResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Key-space topology searched by the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Topology {
    /// 26 cyclic rotations.
    #[default]
    Shift,
    /// Any bijection over the alphabet.
    Permutation,
}

/// How letter case survives a permutation decode.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaseFidelity {
    /// Upper and lower case are mapped symmetrically.
    #[default]
    Preserve,
    /// The whole text is lowercased before mapping.
    Collapse,
}

/// A bijection over the alphabet, looked up by cipher index.
pub trait SubstitutionKey {
    /// Plain-alphabet index for a cipher-alphabet index (both 0..26).
    fn plain_index(&self, cipher_index: usize) -> usize;

    fn to_permutation(&self) -> Permutation;

    #[inline(always)]
    fn decode_char(&self, c: char) -> char {
        if c.is_ascii_lowercase() {
            (b'a' + self.plain_index((c as u8 - b'a') as usize) as u8) as char
        } else if c.is_ascii_uppercase() {
            (b'A' + self.plain_index((c as u8 - b'A') as usize) as u8) as char
        } else {
            c
        }
    }

    fn decode(&self, text: &str) -> String {
        text.chars().map(|c| self.decode_char(c)).collect()
    }

    fn decode_with(&self, text: &str, fidelity: CaseFidelity) -> String {
        match fidelity {
            CaseFidelity::Preserve => self.decode(text),
            CaseFidelity::Collapse => self.decode(&text.to_lowercase()),
        }
    }
}

/// Either topology's key, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKey {
    Shift(ShiftKey),
    Permutation(Permutation),
}

impl CipherKey {
    pub fn topology(&self) -> Topology {
        match self {
            Self::Shift(_) => Topology::Shift,
            Self::Permutation(_) => Topology::Permutation,
        }
    }

    /// Identity key of the given topology.
    pub fn identity(topology: Topology) -> Self {
        match topology {
            Topology::Shift => Self::Shift(ShiftKey::new(0)),
            Topology::Permutation => Self::Permutation(Permutation::identity()),
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            Self::Shift(k) => Self::Shift(k.inverse()),
            Self::Permutation(p) => Self::Permutation(p.inverse()),
        }
    }

    /// Re-checks the bijection invariant.
    pub fn validate(&self) -> CfResult<()> {
        match self {
            Self::Shift(_) => Ok(()),
            Self::Permutation(p) => p.validate(),
        }
    }
}

impl SubstitutionKey for CipherKey {
    #[inline(always)]
    fn plain_index(&self, cipher_index: usize) -> usize {
        match self {
            Self::Shift(k) => k.plain_index(cipher_index),
            Self::Permutation(p) => p.plain_index(cipher_index),
        }
    }

    fn to_permutation(&self) -> Permutation {
        match self {
            Self::Shift(k) => k.to_permutation(),
            Self::Permutation(p) => *p,
        }
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift(k) => write!(f, "shift {}", k.value()),
            Self::Permutation(p) => write!(f, "{}", p),
        }
    }
}

impl From<ShiftKey> for CipherKey {
    fn from(k: ShiftKey) -> Self {
        Self::Shift(k)
    }
}

impl From<Permutation> for CipherKey {
    fn from(p: Permutation) -> Self {
        Self::Permutation(p)
    }
}

/// Decodes `text` under `key`, rejecting keys that are not bijections.
pub fn decode(text: &str, key: &CipherKey, fidelity: CaseFidelity) -> CfResult<String> {
    key.validate()?;
    Ok(key.decode_with(text, fidelity))
}
