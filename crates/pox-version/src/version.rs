//! The version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::comparator::{compare, is_numeric_label, ComparisonMode};
use crate::error::ParseError;
use crate::version_parser::VersionParser;

/// A parsed package version
///
/// A version has four numeric components, an optional list of release labels
/// (which make it a prerelease) and optional build metadata. Values are never
/// mutated; the `with_*` methods return new versions.
///
/// `PartialEq`, `Ord` and `Hash` follow [`ComparisonMode::VersionRelease`], so
/// two versions differing only in metadata are equal. Use a
/// [`VersionComparer`](crate::VersionComparer) for the other modes.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    release_labels: Vec<String>,
    metadata: Option<String>,
}

impl Version {
    /// Create a release version `major.minor.patch`
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            revision: 0,
            release_labels: Vec::new(),
            metadata: None,
        }
    }

    /// Parse a version string, see [`VersionParser::parse`]
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        VersionParser::new().parse(text)
    }

    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    pub fn with_release_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.release_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Attach build metadata; an empty string clears it
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        let metadata = metadata.into();
        self.metadata = if metadata.is_empty() { None } else { Some(metadata) };
        self
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn release_labels(&self) -> &[String] {
        &self.release_labels
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Numeric components in significance order
    pub fn numeric_parts(&self) -> [u64; 4] {
        [self.major, self.minor, self.patch, self.revision]
    }

    pub fn is_prerelease(&self) -> bool {
        !self.release_labels.is_empty()
    }

    /// Whether the version uses SemVer 2.0.0 only features
    /// (dotted release labels or build metadata)
    pub fn is_semver2(&self) -> bool {
        self.release_labels.len() > 1 || self.metadata.is_some()
    }

    /// The release labels joined with dots, empty for a release
    pub fn release(&self) -> String {
        self.release_labels.join(".")
    }

    /// Render with all four numeric components, e.g. `1.2.0.0-beta`
    pub fn to_full_string(&self) -> String {
        let mut s = format!(
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.revision
        );
        self.push_suffixes(&mut s);
        s
    }

    fn push_suffixes(&self, s: &mut String) {
        if self.is_prerelease() {
            s.push('-');
            s.push_str(&self.release());
        }
        if let Some(metadata) = &self.metadata {
            s.push('+');
            s.push_str(metadata);
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if self.revision > 0 {
            s.push('.');
            s.push_str(&self.revision.to_string());
        }
        self.push_suffixes(&mut s);
        f.write_str(&s)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(ComparisonMode::VersionRelease, self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(ComparisonMode::VersionRelease, self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric_parts().hash(state);
        self.release_labels.len().hash(state);
        for label in &self.release_labels {
            // Must agree with label comparison: numeric labels by value,
            // alphanumeric ones case-insensitively.
            if is_numeric_label(label) {
                let digits = label.trim_start_matches('0');
                0u8.hash(state);
                digits.hash(state);
            } else {
                1u8.hash(state);
                label.to_ascii_lowercase().hash(state);
            }
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(de::Error::custom)
    }
}
