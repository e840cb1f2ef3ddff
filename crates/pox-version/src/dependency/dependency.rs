//! Dependency and DependencySet

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::{RangeStyle, VersionRange};

/// Opaque target platform qualifier, e.g. `net40`
///
/// The value is whatever the [`PlatformResolver`](crate::PlatformResolver)
/// produced; it is compared as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetPlatform(String);

impl TargetPlatform {
    pub fn new(name: impl Into<String>) -> Self {
        TargetPlatform(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A package id with an optional version range
///
/// A missing range accepts any version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_range: Option<VersionRange>,
}

impl Dependency {
    /// Create a dependency; the id is trimmed and must not be empty
    pub fn new(id: &str, version_range: Option<VersionRange>) -> Result<Self, ParseError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ParseError::Argument("package id is empty".to_string()));
        }

        Ok(Dependency {
            id: id.to_string(),
            version_range,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version_range(&self) -> Option<&VersionRange> {
        self.version_range.as_ref()
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version_range {
            Some(range) => write!(f, "{} {}", self.id, range.format(RangeStyle::Pretty)),
            None => f.write_str(&self.id),
        }
    }
}

/// Dependencies that apply to one target platform
///
/// An empty set records that the platform has no dependencies, which is not
/// the same as the platform not being mentioned at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DependencySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    target_platform: Option<TargetPlatform>,
    dependencies: Vec<Dependency>,
}

impl DependencySet {
    pub fn new(target_platform: Option<TargetPlatform>, dependencies: Vec<Dependency>) -> Self {
        DependencySet {
            target_platform,
            dependencies,
        }
    }

    /// `None` means the set applies to every platform
    pub fn target_platform(&self) -> Option<&TargetPlatform> {
        self.target_platform.as_ref()
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub(crate) fn push(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }
}
