use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

use pox_version::{ComparisonMode, RangeStyle};

pub const CONFIG_FILE: &str = "poxver.toml";

/// The poxver configuration file structure (poxver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PoxverConfig {
    /// Version comparison settings
    pub compare: CompareConfig,

    /// Range handling settings
    pub range: RangeConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Default comparison mode
    pub mode: Option<ModeArg>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RangeConfig {
    /// Default output style for ranges
    pub style: Option<StyleArg>,

    /// Admit prereleases in every range checked from the command line
    pub include_prerelease: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeArg {
    /// Numeric parts, release labels and metadata
    Full,
    /// Numeric parts only
    Version,
    /// Numeric parts and release labels
    VersionRelease,
}

impl From<ModeArg> for ComparisonMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Full => ComparisonMode::Full,
            ModeArg::Version => ComparisonMode::VersionOnly,
            ModeArg::VersionRelease => ComparisonMode::VersionRelease,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleArg {
    Canonical,
    Pretty,
}

impl From<StyleArg> for RangeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Canonical => RangeStyle::Canonical,
            StyleArg::Pretty => RangeStyle::Pretty,
        }
    }
}

impl PoxverConfig {
    /// Load configuration from poxver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: PoxverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// The comparison mode, a command-line flag taking precedence
    pub fn comparison_mode(&self, flag: Option<ModeArg>) -> ComparisonMode {
        flag.or(self.compare.mode).map(Into::into).unwrap_or_default()
    }

    /// The range style, a command-line flag taking precedence
    pub fn range_style(&self, flag: Option<StyleArg>) -> RangeStyle {
        flag.or(self.range.style).map(Into::into).unwrap_or_default()
    }

    pub fn include_prerelease(&self, flag: bool) -> bool {
        flag || self.range.include_prerelease.unwrap_or(false)
    }
}
