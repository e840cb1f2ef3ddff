//! Bound type for range boundaries

use std::cmp::Ordering;
use std::fmt;

use crate::{Version, VersionComparer};

/// One edge of a [`VersionRange`](crate::VersionRange)
///
/// Inclusiveness only exists for a present bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Bound {
    #[default]
    Unbounded,
    Inclusive(Version),
    Exclusive(Version),
}

impl Bound {
    /// Create a bound from a version and an inclusive flag
    pub fn new(version: Version, is_inclusive: bool) -> Self {
        if is_inclusive {
            Bound::Inclusive(version)
        } else {
            Bound::Exclusive(version)
        }
    }

    /// Get the bounding version, if any
    pub fn version(&self) -> Option<&Version> {
        match self {
            Bound::Unbounded => None,
            Bound::Inclusive(v) | Bound::Exclusive(v) => Some(v),
        }
    }

    pub fn is_bounded(&self) -> bool {
        !matches!(self, Bound::Unbounded)
    }

    /// Check if the bound is inclusive; always false when unbounded
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }

    pub fn is_prerelease(&self) -> bool {
        self.version().is_some_and(Version::is_prerelease)
    }

    /// Check whether `candidate` lies on the allowed side of this bound when
    /// used as a lower edge
    pub(crate) fn admits_from_below(&self, candidate: &Version, comparer: &VersionComparer) -> bool {
        match self {
            Bound::Unbounded => true,
            Bound::Inclusive(min) => comparer.compare(min, candidate) != Ordering::Greater,
            Bound::Exclusive(min) => comparer.compare(min, candidate) == Ordering::Less,
        }
    }

    /// Check whether `candidate` lies on the allowed side of this bound when
    /// used as an upper edge
    pub(crate) fn admits_from_above(&self, candidate: &Version, comparer: &VersionComparer) -> bool {
        match self {
            Bound::Unbounded => true,
            Bound::Inclusive(max) => comparer.compare(max, candidate) != Ordering::Less,
            Bound::Exclusive(max) => comparer.compare(max, candidate) == Ordering::Greater,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Unbounded => write!(f, "unbounded"),
            Bound::Inclusive(v) => write!(f, "{} [inclusive]", v),
            Bound::Exclusive(v) => write!(f, "{} [exclusive]", v),
        }
    }
}
