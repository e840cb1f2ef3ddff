mod config;
mod deps;
mod range;
mod version;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use config::PoxverConfig;

#[derive(Parser, Debug)]
#[command(name = "poxver")]
#[command(about = "Parse, compare and match package versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse and normalize versions
    Parse(version::ParseArgs),

    /// Compare two versions
    Compare(version::CompareArgs),

    /// Print a range in canonical or pretty notation
    Range(range::RangeArgs),

    /// Check versions against a range
    Satisfies(range::SatisfiesArgs),

    /// Parse a serialized dependency list
    Deps(deps::DepsArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = PoxverConfig::load_from_cwd()?.unwrap_or_default();
    log::trace!("Configuration: {:?}", config);

    match args.command {
        Commands::Parse(args) => version::parse(args),
        Commands::Compare(args) => version::compare(args, &config),
        Commands::Range(args) => range::range(args, &config),
        Commands::Satisfies(args) => range::satisfies(args, &config),
        Commands::Deps(args) => deps::execute(args, &config),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
