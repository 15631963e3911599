use crate::reports;
use cipherforge::cipher::Topology;
use cipherforge::config::Config;
use cipherforge::language::Language;
use cipherforge::optimizer::exhaustive;
use cipherforge::scorer::{Scorer, ScorerMode};
use cipherforge::{CfResult, Engine};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct ShiftsArgs {
    /// Scoring weights, scorer mode and case fidelity apply; the
    /// permutation search settings are ignored here.
    #[command(flatten)]
    pub config: Config,

    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Language::English)]
    pub lang: Language,

    /// Number of rows to print.
    #[arg(short, long, default_value_t = 26)]
    pub top: usize,
}

pub fn run(args: &ShiftsArgs, config: Config, engine: &Engine) -> CfResult<()> {
    let ciphertext = super::read_ciphertext(args.text.as_deref(), args.input.as_deref())?;

    let profile = engine.profile(args.lang)?;
    let mode = config
        .search
        .scorer_mode
        .unwrap_or_else(|| ScorerMode::default_for(Topology::Shift, profile));
    debug!("Ranking shifts with {} scorer", mode);

    let scorer = Scorer::new(profile.clone(), mode, config.weights)?;
    let search = exhaustive::search(&ciphertext, &scorer, config.search.case_fidelity)?;

    reports::print_shift_table(&search, args.top);
    Ok(())
}
