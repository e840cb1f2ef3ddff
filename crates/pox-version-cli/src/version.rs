//! Version subcommands: parse and compare.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::cmp::Ordering;

use pox_version::{Version, VersionComparer};

use crate::config::{ModeArg, PoxverConfig};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version strings to parse
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,

    /// Comparison mode (defaults to poxver.toml, then version-release)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

pub fn parse(args: ParseArgs) -> Result<i32> {
    let mut return_code = 0;

    for input in &args.versions {
        match Version::parse(input) {
            Ok(version) => {
                println!("{}", version.to_string().bold());
                println!("  full:       {}", version.to_full_string());
                println!("  prerelease: {}", version.is_prerelease());
                if version.is_prerelease() {
                    println!("  labels:     {}", version.release_labels().join(", "));
                }
                if let Some(metadata) = version.metadata() {
                    println!("  metadata:   {}", metadata);
                }
            }
            Err(e) => {
                return_code = 1;
                eprintln!("{}", e.to_string().red());
            }
        }
    }

    Ok(return_code)
}

pub fn compare(args: CompareArgs, config: &PoxverConfig) -> Result<i32> {
    let left = Version::parse(&args.left).context("Invalid left-hand version")?;
    let right = Version::parse(&args.right).context("Invalid right-hand version")?;
    let comparer = VersionComparer::new(config.comparison_mode(args.mode));

    log::debug!("Comparing {} and {} in {} mode", left, right, comparer.mode());

    let symbol = match comparer.compare(&left, &right) {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", args.left.trim(), symbol, args.right.trim());

    Ok(0)
}
