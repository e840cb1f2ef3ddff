//! Range subcommands: format a range and check versions against it.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use pox_version::{Version, VersionComparer, VersionRange};

use crate::config::{ModeArg, PoxverConfig, StyleArg};

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Range in interval notation, e.g. "[1.0, 2.0)"
    pub range: String,

    /// Output style (defaults to poxver.toml, then canonical)
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,
}

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Range in interval notation, e.g. "[1.0, 2.0)"
    pub range: String,

    /// Candidate versions
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Comparison mode (defaults to poxver.toml, then version-release)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Accept prerelease candidates even if the range does not
    #[arg(short = 'p', long)]
    pub prerelease: bool,

    /// Only print the lowest satisfying version
    #[arg(long)]
    pub best: bool,
}

pub fn range(args: RangeArgs, config: &PoxverConfig) -> Result<i32> {
    let range = VersionRange::parse(&args.range).context("Invalid version range")?;
    println!("{}", range.format(config.range_style(args.style)));
    Ok(0)
}

pub fn satisfies(args: SatisfiesArgs, config: &PoxverConfig) -> Result<i32> {
    let mut range = VersionRange::parse(&args.range).context("Invalid version range")?;
    if config.include_prerelease(args.prerelease) && !range.include_prerelease() {
        log::debug!("Admitting prereleases for {}", range);
        range = VersionRange::new(range.min().clone(), range.max().clone(), Some(true));
    }

    let comparer = VersionComparer::new(config.comparison_mode(args.mode));
    let versions = args
        .versions
        .iter()
        .map(|v| Version::parse(v).with_context(|| format!("Invalid version \"{}\"", v)))
        .collect::<Result<Vec<_>>>()?;

    if args.best {
        return match range.find_best_match(&versions, &comparer) {
            Some(best) => {
                println!("{}", best);
                Ok(0)
            }
            None => {
                eprintln!("No version satisfies {}", range);
                Ok(1)
            }
        };
    }

    let mut return_code = 0;
    for version in &versions {
        if range.satisfies(version, &comparer) {
            println!("{} {}", "yes".green(), version);
        } else {
            return_code = 1;
            println!("{} {}", "no ".red(), version);
        }
    }

    Ok(return_code)
}
