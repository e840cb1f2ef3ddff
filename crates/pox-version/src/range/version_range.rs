//! VersionRange - interval over version space

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::format::{self, RangeStyle};
use super::Bound;
use crate::error::ParseError;
use crate::{Version, VersionComparer};

/// An interval of acceptable versions
///
/// Either edge may be unbounded. Prerelease candidates are only accepted when
/// `include_prerelease` is set; unless given explicitly it is true exactly
/// when one of the present bounds is itself a prerelease. A range whose lower
/// bound lies above its upper bound is valid and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    min: Bound,
    max: Bound,
    include_prerelease: bool,
}

impl VersionRange {
    /// Create a range; `None` derives the prerelease policy from the bounds
    pub fn new(min: Bound, max: Bound, include_prerelease: Option<bool>) -> Self {
        let include_prerelease =
            include_prerelease.unwrap_or_else(|| min.is_prerelease() || max.is_prerelease());
        VersionRange {
            min,
            max,
            include_prerelease,
        }
    }

    /// Every release version; prereleases are not admitted
    pub fn all() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded, None)
    }

    /// Every version, prereleases included
    pub fn all_with_prerelease() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded, Some(true))
    }

    /// Exactly one version, `[v]`
    pub fn exact(version: Version) -> Self {
        Self::new(Bound::Inclusive(version.clone()), Bound::Inclusive(version), None)
    }

    /// `version` or anything above it
    pub fn at_least(version: Version) -> Self {
        Self::new(Bound::Inclusive(version), Bound::Unbounded, None)
    }

    /// Parse canonical range notation, see [`RangeStyle::Canonical`]
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        format::parse(text)
    }

    pub fn format(&self, style: RangeStyle) -> String {
        format::format(self, style)
    }

    pub fn min(&self) -> &Bound {
        &self.min
    }

    pub fn max(&self) -> &Bound {
        &self.max
    }

    pub fn min_version(&self) -> Option<&Version> {
        self.min.version()
    }

    pub fn max_version(&self) -> Option<&Version> {
        self.max.version()
    }

    pub fn has_lower_bound(&self) -> bool {
        self.min.is_bounded()
    }

    pub fn has_upper_bound(&self) -> bool {
        self.max.is_bounded()
    }

    pub fn has_lower_and_upper_bounds(&self) -> bool {
        self.has_lower_bound() && self.has_upper_bound()
    }

    pub fn is_min_inclusive(&self) -> bool {
        self.min.is_inclusive()
    }

    pub fn is_max_inclusive(&self) -> bool {
        self.max.is_inclusive()
    }

    pub fn include_prerelease(&self) -> bool {
        self.include_prerelease
    }

    /// Whether the prerelease policy is the one [`VersionRange::new`] derives
    /// from the bounds. Only such ranges survive range notation unchanged.
    pub fn has_derived_prerelease_policy(&self) -> bool {
        self.include_prerelease == (self.min.is_prerelease() || self.max.is_prerelease())
    }

    /// Check if a version satisfies this range under the given comparer
    pub fn satisfies(&self, version: &Version, comparer: &VersionComparer) -> bool {
        self.min.admits_from_below(version, comparer)
            && self.max.admits_from_above(version, comparer)
            && (self.include_prerelease || !version.is_prerelease())
    }

    /// [`satisfies`](Self::satisfies) with the default comparer
    pub fn satisfies_default(&self, version: &Version) -> bool {
        self.satisfies(version, &VersionComparer::default())
    }

    /// Return all versions that satisfy the range, in input order
    pub fn satisfied_by<'a>(&self, versions: &'a [Version], comparer: &VersionComparer) -> Vec<&'a Version> {
        versions
            .iter()
            .filter(|v| self.satisfies(v, comparer))
            .collect()
    }

    /// The lowest satisfying version
    pub fn find_best_match<'a, I>(&self, versions: I, comparer: &VersionComparer) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions
            .into_iter()
            .filter(|v| self.satisfies(v, comparer))
            .min_by(|a, b| comparer.compare(a, b))
    }
}

impl Default for VersionRange {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(RangeStyle::Canonical))
    }
}

impl FromStr for VersionRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

/// Range notation cannot carry an explicit prerelease policy. Ranges with a
/// derived policy serialize as canonical notation, the others as
/// `{"range": "...", "include_prerelease": bool}`. Both forms deserialize.
impl Serialize for VersionRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.has_derived_prerelease_policy() {
            return serializer.collect_str(self);
        }
        ExplicitRange {
            range: self.to_string(),
            include_prerelease: self.include_prerelease,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VersionRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (text, include_prerelease) = match SerializedRange::deserialize(deserializer)? {
            SerializedRange::Notation(text) => (text, None),
            SerializedRange::Explicit(explicit) => (explicit.range, Some(explicit.include_prerelease)),
        };
        let range = VersionRange::parse(&text).map_err(de::Error::custom)?;
        Ok(match include_prerelease {
            Some(flag) => VersionRange::new(range.min, range.max, Some(flag)),
            None => range,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct ExplicitRange {
    range: String,
    include_prerelease: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SerializedRange {
    Notation(String),
    Explicit(ExplicitRange),
}
