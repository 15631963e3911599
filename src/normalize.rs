//! Text normalization used by the lexical scoring terms.
//!
//! Nothing here touches the text being decoded; tokens are derived views.

use crate::consts::ALPHABET_LEN;
use regex::Regex;
use std::sync::LazyLock;

// A Latin letter followed by letters or non-spacing combining marks.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿŒœŸ][A-Za-zÀ-ÖØ-öø-ÿŒœŸ\p{Mn}]*").unwrap()
});

/// Lazily yields the normalized word tokens of `raw`.
///
/// `normalize::words("Café, déjà.")` yields `"cafe"` then `"deja"`.
pub fn words(raw: &str) -> impl Iterator<Item = String> + '_ {
    WORD_PATTERN
        .find_iter(raw)
        .map(|m| fold(m.as_str()))
        .filter(|w| !w.is_empty())
}

/// Whitespace-delimited tokens, folded and lowercased, punctuation kept.
pub fn whitespace_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(fold)
}

/// Strips diacritics and lowercases a single token.
pub fn fold(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if is_combining_mark(c) {
            continue;
        }
        match base_letters(c) {
            Some(base) => out.push_str(base),
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Alphabet indices (0..26) of the ASCII letters in `text`, case-insensitive.
pub fn letter_indices(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| (b.to_ascii_lowercase() - b'a') as usize)
}

/// Index of an ASCII letter in the alphabet, if it is one.
#[inline(always)]
pub fn alphabet_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        let idx = (c.to_ascii_lowercase() as u8 - b'a') as usize;
        debug_assert!(idx < ALPHABET_LEN);
        Some(idx)
    } else {
        None
    }
}

/// True if `text` holds at least one decodable letter.
pub fn has_letters(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_alphabetic())
}

#[inline(always)]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}')
}

fn base_letters(c: char) -> Option<&'static str> {
    let base = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'Æ' | 'æ' => "ae",
        'Ç' | 'ç' => "c",
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' => "e",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' => "i",
        'Ð' | 'ð' => "d",
        'Ñ' | 'ñ' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Œ' | 'œ' => "oe",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' => "u",
        'Ý' | 'ý' | 'ÿ' | 'Ÿ' => "y",
        'Þ' | 'þ' => "th",
        'ß' => "ss",
        _ => return None,
    };
    Some(base)
}
