use cipherforge::cipher::{CaseFidelity, Topology};
use cipherforge::config::{Config, SearchParams};
use cipherforge::optimizer::{SearchOptions, SeedPolicy};
use cipherforge::scorer::ScorerMode;
use cipherforge::{CipherError, SolveOptions};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::fs;
use std::time::Duration;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct Harness {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Harness, clap::ArgMatches) {
    let matches = Harness::command().get_matches_from(std::iter::once("test").chain(args.iter().copied()));
    let cli = Harness::from_arg_matches(&matches).unwrap();
    (cli, matches)
}

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.search.topology, Topology::Shift);
    assert_eq!(cfg.search.scorer_mode, None);
    assert_eq!(cfg.search.restarts, 20);
    assert_eq!(cfg.search.iterations, 5000);
    assert_eq!(cfg.search.patience, 0);
    assert_eq!(cfg.search.seed_policy, SeedPolicy::Mixed);
    assert_eq!(cfg.search.case_fidelity, CaseFidelity::Preserve);
    assert_eq!(cfg.weights.stopword_bonus, 2.0);
    assert_eq!(cfg.weights.unknown_length_cap, 12);
    assert_eq!(cfg.weights.dict_weight, 1.0);
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (cli, _) = parse(&[]);
    let d = Config::default();
    assert_eq!(cli.config.search.restarts, d.search.restarts);
    assert_eq!(cli.config.search.iterations, d.search.iterations);
    assert_eq!(cli.config.search.seed_policy, d.search.seed_policy);
    assert_eq!(cli.config.weights.stopword_length_bonus, d.weights.stopword_length_bonus);
}

#[test]
fn test_cli_parses_enums() {
    let (cli, _) = parse(&[
        "--topology",
        "permutation",
        "--scorer-mode",
        "quadgram-lexicon",
        "--seed-policy",
        "random",
        "--case-fidelity",
        "collapse",
        "--max-time-ms",
        "250",
    ]);
    let s = &cli.config.search;
    assert_eq!(s.topology, Topology::Permutation);
    assert_eq!(s.scorer_mode, Some(ScorerMode::QuadgramLexicon));
    assert_eq!(s.seed_policy, SeedPolicy::Random);
    assert_eq!(s.case_fidelity, CaseFidelity::Collapse);

    let opts = SearchOptions::from(&cli.config);
    assert_eq!(opts.max_time, Some(Duration::from_millis(250)));
}

#[test]
fn test_load_partial_json_fills_defaults() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"{ "search": { "topology": "permutation", "restarts": 3 }, "weights": { "dict_weight": 2.5 } }"#,
    )
    .unwrap();

    let cfg = Config::load_from_file(file.path()).unwrap();
    assert_eq!(cfg.search.topology, Topology::Permutation);
    assert_eq!(cfg.search.restarts, 3);
    assert_eq!(cfg.search.iterations, 5000);
    assert_eq!(cfg.weights.dict_weight, 2.5);
    assert_eq!(cfg.weights.stopword_bonus, 2.0);
}

#[test]
fn test_load_invalid_json_is_error() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(file.path()),
        Err(CipherError::Json(_))
    ));
}

#[test]
fn test_merge_only_overrides_command_line_values() {
    let mut file_cfg = Config {
        search: SearchParams {
            restarts: 3,
            iterations: 99,
            ..Default::default()
        },
        ..Default::default()
    };
    file_cfg.weights.dict_weight = 4.0;

    let (cli, matches) = parse(&["--restarts", "7", "--stopword-bonus", "1.5"]);
    file_cfg.merge_from_cli(&cli.config, &matches);

    assert_eq!(file_cfg.search.restarts, 7);
    assert_eq!(file_cfg.search.iterations, 99);
    assert_eq!(file_cfg.weights.stopword_bonus, 1.5);
    assert_eq!(file_cfg.weights.dict_weight, 4.0);
}

#[test]
fn test_validate_rejects_zero_restarts() {
    let mut cfg = Config::default();
    cfg.search.restarts = 0;
    assert!(matches!(cfg.validate(), Err(CipherError::Config(_))));
}

#[test]
fn test_solve_options_from_config() {
    let mut cfg = Config::default();
    cfg.search.topology = Topology::Permutation;
    cfg.search.patience = 40;
    let opts = SolveOptions::from(&cfg).with_seed(Some(8));
    assert_eq!(opts.topology, Topology::Permutation);
    assert_eq!(opts.search.patience, 40);
    assert_eq!(opts.seed, Some(8));
    assert_eq!(opts.language, None);
}
