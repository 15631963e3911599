use cipherforge::cipher::Topology;
use cipherforge::config::ScoringWeights;
use cipherforge::language::loader::load_ngram_counts;
use cipherforge::language::{Language, LanguageProfile, ProfileBuildParams};
use cipherforge::scorer::{Scorer, ScorerMode};
use cipherforge::CipherError;
use rstest::rstest;
use std::io::Cursor;
use std::sync::Arc;

fn builtin(lang: Language) -> Arc<LanguageProfile> {
    Arc::new(LanguageProfile::builtin(lang))
}

fn scorer(profile: Arc<LanguageProfile>, mode: ScorerMode) -> Scorer {
    Scorer::new(profile, mode, ScoringWeights::default()).unwrap()
}

fn profile_with_resources() -> Arc<LanguageProfile> {
    let counts = load_ngram_counts(Cursor::new("hell 40\nello 30\nlowo 10\nowor 10\nworl 10\n")).unwrap();
    let profile = ProfileBuildParams::builder()
        .language(Language::English)
        .quadgram_counts(counts)
        .dictionary(vec!["hello".to_string(), "world".to_string()])
        .build()
        .build_profile()
        .unwrap();
    Arc::new(profile)
}

#[test]
fn test_unigram_lexicon_matches_formula() {
    let profile = builtin(Language::English);
    let s = scorer(profile.clone(), ScorerMode::UnigramLexicon);

    let text = "hello world";
    let unigram: f64 = text
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| profile.unigram_logprob((b - b'a') as usize))
        .sum();
    // "world" is a stopword, "hello" is not.
    let lexical = (2.0 + 0.2 * 5.0) + (-0.1 * 5.0);

    let d = s.score_details(text);
    assert!((d.statistical - unigram).abs() < 1e-9);
    assert!((d.lexical - lexical).abs() < 1e-9);
    assert_eq!(d.letters, 10);
    assert_eq!(d.known_words, 1);
    assert_eq!(d.unknown_words, 1);
}

#[rstest]
#[case(ScorerMode::UnigramLexicon)]
#[case(ScorerMode::Lexicon)]
#[case(ScorerMode::QuadgramLexicon)]
fn test_details_total_equals_score(#[case] mode: ScorerMode) {
    let s = scorer(profile_with_resources(), mode);
    for text in ["Hello World", "xqzj vvk", "", "hello, world!"] {
        let d = s.score_details(text);
        assert_eq!(d.total, s.score(text));
        assert_eq!(d.total, d.statistical + d.lexical);
    }
}

#[test]
fn test_scoring_ignores_case_and_punctuation_for_letters() {
    let s = scorer(builtin(Language::English), ScorerMode::UnigramLexicon);
    assert_eq!(s.score("hello world"), s.score("HELLO, World!"));
}

#[test]
fn test_stopword_length_bonus_is_capped() {
    let weights = ScoringWeights::default();
    assert!((weights.stopword_score(3) - 2.6).abs() < 1e-12);
    assert_eq!(weights.stopword_score(10), weights.stopword_score(25));
    assert!((weights.unknown_score(4) + 0.4).abs() < 1e-12);
    assert_eq!(weights.unknown_score(12), weights.unknown_score(40));
}

#[test]
fn test_lexicon_mode_counts_dictionary_word_lengths() {
    let s = scorer(profile_with_resources(), ScorerMode::Lexicon);
    assert_eq!(s.score("hello world"), 10.0);
    assert_eq!(s.score("HELLO there world"), 10.0);
    // Whitespace tokens keep punctuation, so "hello," is not a match.
    assert_eq!(s.score("hello, world"), 5.0);
    assert_eq!(s.score("nothing here"), 0.0);
}

#[test]
fn test_lexicon_mode_without_dictionary_uses_stopwords() {
    let s = scorer(builtin(Language::English), ScorerMode::Lexicon);
    assert_eq!(s.score("the cat"), 3.0);
}

#[test]
fn test_quadgram_mode_sums_windows_and_floor() {
    let profile = profile_with_resources();
    let table = profile.quadgrams().unwrap();
    let s = scorer(profile.clone(), ScorerMode::QuadgramLexicon);

    // Letters only: "helloworld" -> 7 windows.
    let d = s.score_details("Hello world");
    let expected: f64 = ["hell", "ello", "llow", "lowo", "owor", "worl", "orld"]
        .iter()
        .map(|q| table.lookup(q))
        .sum();
    assert!((d.statistical - expected).abs() < 1e-9);
    assert_eq!(d.lexical, 10.0);

    // Fewer than four letters: no windows.
    assert_eq!(s.score_details("abc").statistical, 0.0);
}

#[test]
fn test_quadgram_mode_prefers_real_text() {
    let s = scorer(profile_with_resources(), ScorerMode::QuadgramLexicon);
    assert!(s.score("hello world") > s.score("xqzjv kwpfb"));
}

#[test]
fn test_quadgram_mode_requires_table() {
    let err = Scorer::new(
        builtin(Language::French),
        ScorerMode::QuadgramLexicon,
        ScoringWeights::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CipherError::MissingResource(_)));
}

#[test]
fn test_non_finite_weights_are_rejected() {
    let weights = ScoringWeights {
        dict_weight: f64::NAN,
        ..Default::default()
    };
    let err = Scorer::new(builtin(Language::English), ScorerMode::Lexicon, weights).unwrap_err();
    assert!(matches!(err, CipherError::Config(_)));
}

#[test]
fn test_default_modes() {
    let plain = builtin(Language::English);
    let rich = profile_with_resources();
    assert_eq!(
        ScorerMode::default_for(Topology::Shift, &rich),
        ScorerMode::UnigramLexicon
    );
    assert_eq!(
        ScorerMode::default_for(Topology::Permutation, &rich),
        ScorerMode::QuadgramLexicon
    );
    assert_eq!(
        ScorerMode::default_for(Topology::Permutation, &plain),
        ScorerMode::UnigramLexicon
    );
}

#[test]
fn test_french_accents_count_as_stopwords() {
    let s = scorer(builtin(Language::French), ScorerMode::UnigramLexicon);
    let d = s.score_details("Très bien, déjà");
    assert_eq!(d.known_words, 3);
    assert_eq!(d.unknown_words, 0);
}
