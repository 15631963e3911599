use cipherforge::config::Config;
use cipherforge::{CfResult, Engine};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding one profile directory per language (`en/`, `fr/`).
    #[arg(global = true, short, long, default_value = "data")]
    data_dir: PathBuf,

    /// JSON file with search and scoring settings.
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover the plaintext of a substitution cipher.
    Solve(cmd::solve::SolveArgs),
    /// Rank all 26 shifts of a Caesar ciphertext.
    Shifts(cmd::shifts::ShiftsArgs),
    /// List the loaded language profiles.
    Profiles,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading profiles from: {}", cli.data_dir.display());
    let engine = Engine::load(&cli.data_dir).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING PROFILES: {}", e);
        process::exit(1);
    });

    let result = match &cli.command {
        Commands::Solve(args) => {
            // Flattened config flags live in the subcommand's matches, not the root's.
            let sub_matches = matches.subcommand_matches("solve").unwrap_or(&matches);
            resolve_config(&args.config, cli.config_file.as_deref(), sub_matches)
                .and_then(|config| cmd::solve::run(args, config, &engine))
        }
        Commands::Shifts(args) => {
            let sub_matches = matches.subcommand_matches("shifts").unwrap_or(&matches);
            resolve_config(&args.config, cli.config_file.as_deref(), sub_matches)
                .and_then(|config| cmd::shifts::run(args, config, &engine))
        }
        Commands::Profiles => {
            reports::print_profiles(engine.profiles());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

/// File settings first, then anything typed on the command line on top.
fn resolve_config(
    cli_config: &Config,
    path: Option<&Path>,
    sub_matches: &ArgMatches,
) -> CfResult<Config> {
    let config = match path {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => {
            info!("No config file given. Using defaults and command-line values.");
            cli_config.clone()
        }
    };
    config.validate()?;
    Ok(config)
}
