use cipherforge::cipher::{Permutation, SubstitutionKey};
use cipherforge::config::ScoringWeights;
use cipherforge::language::{Language, LanguageProfile};
use cipherforge::optimizer::{HillClimber, NoProgress, SearchOptions, SeedPolicy};
use cipherforge::scorer::{Scorer, ScorerMode};
use std::process::Command;
use std::sync::Arc;

const PLAIN: &str = "There is nothing either good or bad but thinking makes it so";

fn cipher() -> String {
    let key: Permutation = "mnbvcxzlkjhgfdsapoiuytrewq".parse().unwrap();
    key.inverse().decode(PLAIN)
}

fn climber(policy: SeedPolicy) -> HillClimber {
    let scorer = Scorer::new(
        Arc::new(LanguageProfile::builtin(Language::English)),
        ScorerMode::UnigramLexicon,
        ScoringWeights::default(),
    )
    .unwrap();
    HillClimber::new(
        Arc::new(scorer),
        SearchOptions {
            restarts: 6,
            iterations: 800,
            seed_policy: policy,
            ..Default::default()
        },
    )
}

#[test]
fn test_same_seed_same_result() {
    let text = cipher();
    for policy in [SeedPolicy::Mixed, SeedPolicy::Random, SeedPolicy::Frequency] {
        let c = climber(policy);
        let a = c.run(&text, Some(12345), &NoProgress).unwrap();
        let b = c.run(&text, Some(12345), &NoProgress).unwrap();
        assert_eq!(a.best, b.best, "policy {}", policy);
    }
}

#[test]
fn test_seeded_result_independent_of_thread_count() {
    let text = cipher();
    let c = climber(SeedPolicy::Mixed);

    let single = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| c.run(&text, Some(77), &NoProgress))
        .unwrap();
    let many = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap()
        .install(|| c.run(&text, Some(77), &NoProgress))
        .unwrap();

    assert_eq!(single.best, many.best);
}

#[test]
fn test_cli_seeded_runs_match() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let run = || {
        let output = Command::new(env!("CARGO_BIN_EXE_cipherforge"))
            .arg("--data-dir")
            .arg(dir.path())
            .arg("solve")
            .arg(cipher())
            .args(["--lang", "en", "--topology", "permutation"])
            .args(["--restarts", "4", "--iterations", "500", "--seed", "99", "--json"])
            .output()
            .expect("Failed to run binary");
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    let first = run();
    let second = run();
    assert!(first.contains("\"permutation\""));
    assert_eq!(first, second);
}
