//! Dependency list subcommand.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use pox_version::DependencyListParser;

use crate::config::{PoxverConfig, StyleArg};

#[derive(Args, Debug)]
pub struct DepsArgs {
    /// Serialized dependency list, e.g. "A:1.3:net40|B:[2.4,5.0):sl5|C"
    pub list: String,

    /// Output the parsed sets as JSON
    #[arg(long)]
    pub json: bool,

    /// Range style for the text output
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,
}

pub fn execute(args: DepsArgs, config: &PoxverConfig) -> Result<i32> {
    let sets = DependencyListParser::new().parse(&args.list);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
        return Ok(0);
    }

    if sets.is_empty() {
        eprintln!("No dependencies");
        return Ok(0);
    }

    let style = config.range_style(args.style);
    for set in &sets {
        let platform = set
            .target_platform()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "(all platforms)".to_string());
        println!("{}", platform.bold());

        if set.is_empty() {
            println!("  {}", "no dependencies".dimmed());
        }
        for dependency in set.dependencies() {
            match dependency.version_range() {
                Some(range) => println!("  {} {}", dependency.id(), range.format(style)),
                None => println!("  {} {}", dependency.id(), "(any)".dimmed()),
            }
        }
    }

    log::debug!("Normalized: {}", DependencyListParser::format(&sets));

    Ok(0)
}
