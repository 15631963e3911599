use cipherforge::normalize;
use rstest::rstest;

#[test]
fn test_words_strip_diacritics_and_punctuation() {
    let tokens: Vec<String> = normalize::words("Café, déjà.").collect();
    assert_eq!(tokens, vec!["cafe", "deja"]);
}

#[rstest]
#[case("L'été", vec!["l", "ete"])]
#[case("Œuvre cœur", vec!["oeuvre", "coeur"])]
#[case("naïve straße", vec!["naive", "strasse"])]
#[case("x2y", vec!["x", "y"])]
#[case("   ", vec![])]
#[case("HELLO World", vec!["hello", "world"])]
fn test_words_tokenization(#[case] raw: &str, #[case] expected: Vec<&str>) {
    let tokens: Vec<String> = normalize::words(raw).collect();
    assert_eq!(tokens, expected);
}

#[test]
fn test_words_handle_decomposed_accents() {
    // 'e' followed by U+0301 COMBINING ACUTE ACCENT
    let tokens: Vec<String> = normalize::words("cafe\u{301} ole\u{301}").collect();
    assert_eq!(tokens, vec!["cafe", "ole"]);
}

#[test]
fn test_fold_single_token() {
    assert_eq!(normalize::fold("ÉLÈVE"), "eleve");
    assert_eq!(normalize::fold("garçon"), "garcon");
    assert_eq!(normalize::fold("plain"), "plain");
}

#[test]
fn test_whitespace_words_keep_punctuation() {
    let tokens: Vec<String> = normalize::whitespace_words("Hello,  World !").collect();
    assert_eq!(tokens, vec!["hello,", "world", "!"]);
}

#[test]
fn test_letter_indices_are_case_insensitive_ascii_only() {
    let idx: Vec<usize> = normalize::letter_indices("Ab z-é!").collect();
    assert_eq!(idx, vec![0, 1, 25]);
}

#[test]
fn test_alphabet_index_and_has_letters() {
    assert_eq!(normalize::alphabet_index('C'), Some(2));
    assert_eq!(normalize::alphabet_index('é'), None);
    assert!(normalize::has_letters("12 a"));
    assert!(!normalize::has_letters("12 é !"));
    assert!(!normalize::has_letters(""));
}
