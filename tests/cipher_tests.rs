use cipherforge::cipher::{self, CaseFidelity, CipherKey, Permutation, ShiftKey, SubstitutionKey};
use cipherforge::CipherError;
use rstest::rstest;

const QWERTY: &str = "qwertyuiopasdfghjklzxcvbnm";

#[rstest]
#[case("KHOOR ZRUOG", 3, "HELLO WORLD")]
#[case("khoor, zruog!", 3, "hello, world!")]
#[case("Uryyb", 13, "Hello")]
#[case("abc xyz", 0, "abc xyz")]
#[case("abc", 1, "zab")]
#[case("Ça va?", 2, "Çy ty?")]
fn test_shift_decode(#[case] cipher: &str, #[case] shift: u32, #[case] expected: &str) {
    assert_eq!(ShiftKey::new(shift).decode(cipher), expected);
}

#[test]
fn test_shift_key_reduces_modulo_alphabet() {
    assert_eq!(ShiftKey::new(29), ShiftKey::new(3));
    assert_eq!(ShiftKey::new(26).value(), 0);
    assert_eq!(ShiftKey::new(3).inverse().value(), 23);
    assert_eq!(ShiftKey::new(0).inverse().value(), 0);
    assert_eq!(ShiftKey::all().count(), 26);
}

#[test]
fn test_shift_permutation_view_matches_shift() {
    let key = ShiftKey::new(5);
    let perm = key.to_permutation();
    assert!(perm.validate().is_ok());
    let text = "The Quick Brown Fox";
    assert_eq!(perm.decode(text), key.decode(text));
}

#[test]
fn test_permutation_parse_and_display() {
    let key: Permutation = QWERTY.parse().unwrap();
    assert_eq!(key.to_string(), QWERTY);
    // Position 0 ('a') decodes to 'q'.
    assert_eq!(key.decode_char('a'), 'q');
    assert_eq!(key.decode_char('A'), 'Q');
    assert_eq!(key.decode_char('7'), '7');

    let upper: Permutation = QWERTY.to_uppercase().parse().unwrap();
    assert_eq!(upper, key);
}

#[rstest]
#[case("abc")]
#[case("aacdefghijklmnopqrstuvwxyz")]
#[case("abcdefghijklmnopqrstuvwxy1")]
#[case("abcdefghijklmnopqrstuvwxyzz")]
fn test_permutation_parse_rejects_invalid(#[case] raw: &str) {
    let err = raw.parse::<Permutation>().unwrap_err();
    assert!(matches!(err, CipherError::InvalidKey(_)), "got {:?}", err);
}

#[test]
fn test_try_from_table_rejects_non_bijection() {
    let mut table = *Permutation::identity().table();
    table[3] = 4;
    assert!(matches!(
        Permutation::try_from_table(table),
        Err(CipherError::InvalidKey(_))
    ));

    table[3] = 26;
    assert!(matches!(
        Permutation::try_from_table(table),
        Err(CipherError::InvalidKey(_))
    ));
}

#[test]
fn test_transpose_returns_new_key() {
    let key = Permutation::identity();
    let swapped = key.transpose(0, 25);
    assert_eq!(key, Permutation::identity());
    assert_eq!(swapped.decode("az"), "za");
    assert!(swapped.validate().is_ok());
}

#[test]
fn test_permutation_inverse_restores_text() {
    let key: Permutation = QWERTY.parse().unwrap();
    let text = "Attack at Dawn! 42 élan";
    let scrambled = key.inverse().decode(text);
    assert_ne!(scrambled, text);
    assert_eq!(key.decode(&scrambled), text);
}

#[test]
fn test_case_collapse_lowercases_everything() {
    let key = CipherKey::Permutation(Permutation::identity());
    let out = cipher::decode("Hello WORLD", &key, CaseFidelity::Collapse).unwrap();
    assert_eq!(out, "hello world");

    let out = cipher::decode("Hello WORLD", &key, CaseFidelity::Preserve).unwrap();
    assert_eq!(out, "Hello WORLD");
}

#[test]
fn test_cipher_key_serde_forms() {
    let shift = CipherKey::Shift(ShiftKey::new(3));
    assert_eq!(serde_json::to_string(&shift).unwrap(), r#"{"shift":3}"#);

    let perm = CipherKey::Permutation(QWERTY.parse().unwrap());
    let json = serde_json::to_string(&perm).unwrap();
    assert_eq!(json, format!(r#"{{"permutation":"{}"}}"#, QWERTY));

    let back: CipherKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, perm);

    let bad = serde_json::from_str::<CipherKey>(r#"{"permutation":"abc"}"#);
    assert!(bad.is_err());
}

#[test]
fn test_cipher_key_display_and_identity() {
    assert_eq!(CipherKey::Shift(ShiftKey::new(3)).to_string(), "shift 3");
    assert_eq!(
        CipherKey::identity(cipher::Topology::Permutation).to_string(),
        "abcdefghijklmnopqrstuvwxyz"
    );
    let inv = CipherKey::Shift(ShiftKey::new(3)).inverse();
    assert_eq!(inv, CipherKey::Shift(ShiftKey::new(23)));
}
