//! Package version identity and version constraint library
//!
//! This crate provides version parsing and normalization, comparison under
//! several strictness modes, version ranges in interval notation and the
//! serialized dependency-list format used by package feeds.
//!
//! ```
//! use pox_version::{Version, VersionComparer, VersionRange};
//!
//! let range = VersionRange::parse("[1.0, 2.0)").unwrap();
//! let version = Version::parse("1.5").unwrap();
//! assert!(range.satisfies(&version, &VersionComparer::default()));
//! ```

mod comparator;
pub mod dependency;
mod error;
pub mod range;
mod version;
mod version_parser;

pub use comparator::{compare, ComparisonMode, VersionComparer};
pub use dependency::{
    Dependency, DependencyListParser, DependencySet, PassThroughResolver, PlatformResolver, TargetPlatform,
};
pub use error::{ParseError, Result};
pub use range::{Bound, RangeStyle, VersionRange};
pub use version::Version;
pub use version_parser::VersionParser;
