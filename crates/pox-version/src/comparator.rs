//! Version comparison utilities

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::Version;

/// Which version fields take part in ordering and equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonMode {
    /// Numeric components, release labels and metadata
    Full,
    /// Numeric components only
    VersionOnly,
    /// Numeric components and release labels, metadata ignored
    #[default]
    VersionRelease,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Full => "full",
            ComparisonMode::VersionOnly => "version",
            ComparisonMode::VersionRelease => "version-release",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ComparisonMode::Full),
            "version" | "version-only" => Ok(ComparisonMode::VersionOnly),
            "version-release" | "default" => Ok(ComparisonMode::VersionRelease),
            other => Err(ParseError::Argument(format!("unknown comparison mode \"{}\"", other))),
        }
    }
}

/// Compare two versions under the given mode
pub fn compare(mode: ComparisonMode, a: &Version, b: &Version) -> Ordering {
    let result = a.numeric_parts().cmp(&b.numeric_parts());
    if result != Ordering::Equal || mode == ComparisonMode::VersionOnly {
        return result;
    }

    let result = compare_release_labels(a.release_labels(), b.release_labels());
    if result != Ordering::Equal || mode == ComparisonMode::VersionRelease {
        return result;
    }

    compare_ignore_case(a.metadata().unwrap_or(""), b.metadata().unwrap_or(""))
}

/// A label made only of ASCII digits is compared by value
pub(crate) fn is_numeric_label(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
}

fn compare_release_labels(a: &[String], b: &[String]) -> Ordering {
    // A release sorts above every prerelease of the same numeric core
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (x, y) in a.iter().zip(b.iter()) {
        let result = compare_label(x, y);
        if result != Ordering::Equal {
            return result;
        }
    }

    a.len().cmp(&b.len())
}

fn compare_label(a: &str, b: &str) -> Ordering {
    match (is_numeric_label(a), is_numeric_label(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_ignore_case(a, b),
    }
}

// Digit strings of any length, without going through an integer type
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Comparer bound to one [`ComparisonMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionComparer {
    mode: ComparisonMode,
}

impl VersionComparer {
    pub fn new(mode: ComparisonMode) -> Self {
        VersionComparer { mode }
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    pub fn compare(&self, a: &Version, b: &Version) -> Ordering {
        compare(self.mode, a, b)
    }

    pub fn equals(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Check if a > b
    pub fn greater_than(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Check if a < b
    pub fn less_than(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Sort versions in ascending order
    pub fn sort(&self, versions: &mut [Version]) {
        versions.sort_by(|a, b| self.compare(a, b));
    }

    /// Sort versions in descending order
    pub fn sort_descending(&self, versions: &mut [Version]) {
        versions.sort_by(|a, b| self.compare(b, a));
    }
}
