//! Serialized dependency list parsing
//!
//! A dependency list is a `|` separated sequence of `id`, `id:range` or
//! `id:range:platform` entries, for example
//! `A:1.3:net40|B:[2.4,5.0):sl5|C|D::winrt45`.

use super::{Dependency, DependencySet, PassThroughResolver, PlatformResolver, TargetPlatform};
use crate::{RangeStyle, VersionRange};

const ENTRY_SEPARATOR: &str = "|";
const FIELD_SEPARATOR: char = ':';

/// Lenient parser for serialized dependency lists
///
/// Unlike [`VersionRange::parse`], a range that cannot be parsed does not fail
/// the list: the dependency is kept without a range.
pub struct DependencyListParser<R = PassThroughResolver> {
    resolver: R,
}

impl DependencyListParser {
    pub fn new() -> Self {
        DependencyListParser {
            resolver: PassThroughResolver,
        }
    }

    /// Serialize dependency sets back into list form
    ///
    /// An empty set is written as `::platform` (or `::` when unqualified).
    /// Parsing the result yields the same sets as long as every range keeps
    /// the prerelease policy derived from its bounds, which holds for all sets
    /// produced by [`DependencyListParser::parse`]. An explicit policy has no
    /// place in the list grammar and is dropped.
    pub fn format(sets: &[DependencySet]) -> String {
        let mut entries: Vec<String> = Vec::new();

        for set in sets {
            let platform = set.target_platform().map(TargetPlatform::as_str);

            if set.is_empty() {
                entries.push(format!("::{}", platform.unwrap_or_default()));
                continue;
            }

            for dependency in set.dependencies() {
                let mut entry = dependency.id().to_string();
                if let Some(range) = dependency.version_range().filter(|r| !r.has_derived_prerelease_policy()) {
                    log::debug!(
                        "Dropping explicit prerelease policy of {} {} from the dependency list",
                        dependency.id(),
                        range
                    );
                }
                let range = dependency.version_range().map(|r| r.format(RangeStyle::Canonical));
                if range.is_some() || platform.is_some() {
                    entry.push(FIELD_SEPARATOR);
                    entry.push_str(range.as_deref().unwrap_or_default());
                }
                if let Some(platform) = platform {
                    entry.push(FIELD_SEPARATOR);
                    entry.push_str(platform);
                }
                entries.push(entry);
            }
        }

        entries.join(ENTRY_SEPARATOR)
    }
}

impl Default for DependencyListParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PlatformResolver> DependencyListParser<R> {
    /// Use a custom resolver for platform tokens
    pub fn with_resolver(resolver: R) -> Self {
        DependencyListParser { resolver }
    }

    /// Parse a dependency list into sets grouped by platform
    ///
    /// Sets appear in the order their platform is first seen. An entry with an
    /// empty id adds no dependency but still creates its platform's set. Empty
    /// entries are kept too, so a stray or trailing `|` creates an empty
    /// unqualified set: `"A:1.0:net40|"` yields two sets.
    pub fn parse(&self, value: &str) -> Vec<DependencySet> {
        if value.trim().is_empty() {
            return Vec::new();
        }

        let mut sets: Vec<DependencySet> = Vec::new();

        for entry in value.split(ENTRY_SEPARATOR) {
            let (dependency, platform) = self.parse_entry(entry);

            let existing = sets.iter().position(|s| s.target_platform() == platform.as_ref());
            let index = match existing {
                Some(index) => index,
                None => {
                    sets.push(DependencySet::new(platform, Vec::new()));
                    sets.len() - 1
                }
            };

            if let Some(dependency) = dependency {
                sets[index].push(dependency);
            }
        }

        log::debug!("Parsed {} dependency sets from \"{}\"", sets.len(), value);
        sets
    }

    fn parse_entry(&self, entry: &str) -> (Option<Dependency>, Option<TargetPlatform>) {
        let mut fields = entry.trim().split(FIELD_SEPARATOR);
        let id = fields.next().unwrap_or_default();
        let range = fields.next().map(str::trim).filter(|r| !r.is_empty());
        let platform = fields.next().and_then(|p| self.resolver.resolve(p));

        let extra: Vec<&str> = fields.collect();
        if !extra.is_empty() {
            log::debug!("Ignoring extra fields {:?} in dependency entry \"{}\"", extra, entry);
        }

        let range = range.and_then(|r| match VersionRange::parse(r) {
            Ok(range) => Some(range),
            Err(e) => {
                log::debug!("Treating dependency \"{}\" as unconstrained: {}", id.trim(), e);
                None
            }
        });

        // An empty id only marks its platform
        (Dependency::new(id, range).ok(), platform)
    }
}
