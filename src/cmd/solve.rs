use crate::reports;
use cipherforge::config::Config;
use cipherforge::language::Language;
use cipherforge::{CfResult, Engine, SolveOptions};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Ciphertext; read from --input or stdin when omitted.
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Restrict to one language instead of trying all profiles.
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the solution as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SolveArgs, config: Config, engine: &Engine) -> CfResult<()> {
    let ciphertext = super::read_ciphertext(args.text.as_deref(), args.input.as_deref())?;

    let options = SolveOptions::from(&config)
        .with_language(args.lang)
        .with_seed(args.seed);

    let solution = engine.solve(&ciphertext, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        reports::print_solution(&solution);
    }
    Ok(())
}
