//! Version parsing and normalization module

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;
use crate::Version;

/// Dot separated identifiers, shared by release labels and metadata
const IDENTIFIERS: &str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

lazy_static! {
    // Numeric core of two to four components, then optional labels and metadata.
    // ASCII classes only: \d would also accept non-ASCII digits.
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:-({ids}))?(?:\+({ids}))?$",
        ids = IDENTIFIERS
    )).unwrap();
}

/// Version parser for normalizing and parsing version strings
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string
    ///
    /// Surrounding whitespace is ignored. `1.2` normalizes to `1.2.0.0` and
    /// `1.2.3` to `1.2.3.0`. Empty input is an argument error, everything else
    /// that does not match the grammar is a malformed version.
    pub fn parse(&self, version: &str) -> Result<Version, ParseError> {
        let version = version.trim();
        if version.is_empty() {
            return Err(ParseError::Argument("version string is empty".to_string()));
        }

        let caps = VERSION_RE
            .captures(version)
            .ok_or_else(|| ParseError::MalformedVersion(version.to_string()))?;

        let mut parts = [0u64; 4];
        for (i, part) in parts.iter_mut().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                *part = m
                    .as_str()
                    .parse()
                    .map_err(|_| ParseError::MalformedVersion(version.to_string()))?;
            }
        }

        let labels: Vec<&str> = caps
            .get(5)
            .map_or_else(Vec::new, |m| m.as_str().split('.').collect());
        let metadata = caps.get(6).map_or("", |m| m.as_str());

        log::trace!("Parsed version {} as {:?}", version, parts);

        Ok(Version::new(parts[0], parts[1], parts[2])
            .with_revision(parts[3])
            .with_release_labels(labels)
            .with_metadata(metadata))
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Version {
        VersionParser::new().parse(s).unwrap()
    }

    #[test]
    fn test_normalize_versions() {
        assert_eq!(parse("1.2").to_full_string(), "1.2.0.0");
        assert_eq!(parse("1.2.3").to_full_string(), "1.2.3.0");
        assert_eq!(parse("1.2.3.4").to_full_string(), "1.2.3.4");
        assert_eq!(parse("00.01.03.04").to_full_string(), "0.1.3.4");
        assert_eq!(parse("10.4.13-beta").to_full_string(), "10.4.13.0-beta");
        assert_eq!(parse("1.0.0-alpha.3.1+foo").to_full_string(), "1.0.0.0-alpha.3.1+foo");
        assert_eq!(parse("1.0-rc-1").to_full_string(), "1.0.0.0-rc-1");
    }

    #[test]
    fn test_space_padding() {
        assert_eq!(parse(" 1.0.0").to_string(), "1.0.0");
        assert_eq!(parse("1.0.0 ").to_string(), "1.0.0");
        assert_eq!(parse("\t2.1\n").to_string(), "2.1.0");
    }

    #[test]
    fn test_parts() {
        let v = parse("4.3.2.1-beta.7+sha.1234");
        assert_eq!(v.major(), 4);
        assert_eq!(v.minor(), 3);
        assert_eq!(v.patch(), 2);
        assert_eq!(v.revision(), 1);
        assert_eq!(v.release_labels(), ["beta", "7"]);
        assert_eq!(v.metadata(), Some("sha.1234"));
        assert!(v.is_prerelease());
    }

    #[test]
    fn test_metadata_without_labels() {
        let v = parse("1.0.0+build.5");
        assert!(!v.is_prerelease());
        assert_eq!(v.metadata(), Some("build.5"));
    }

    #[test]
    fn test_empty_is_argument_error() {
        let parser = VersionParser::new();
        assert!(matches!(parser.parse(""), Err(ParseError::Argument(_))));
        assert!(matches!(parser.parse("   "), Err(ParseError::Argument(_))));
    }

    #[test]
    fn test_parse_fails() {
        let parser = VersionParser::new();

        for input in [
            "a",
            "1",
            "1.0.0.0.0",
            "-1.0",
            "1.-2",
            "1.0 .2",
            "1.0.0-",
            "1.0.0-a..b",
            "1.0.0+",
            "1.0.0+foo bar",
            "1.0.0-beta_1",
            "v1.0.0",
            "1.*",
            "1.x",
            "１.２",
            "99999999999999999999999.0",
        ] {
            assert!(
                matches!(parser.parse(input), Err(ParseError::MalformedVersion(_))),
                "{} should be malformed",
                input
            );
        }
    }

    #[test]
    fn test_labels_and_metadata_share_identifier_grammar() {
        let parser = VersionParser::new();

        let version = parser.parse("1.0-x-y.01.RC+sha.5-b").unwrap();
        assert_eq!(version.release_labels(), ["x-y", "01", "RC"]);
        assert_eq!(version.metadata(), Some("sha.5-b"));

        for input in ["1.0+a..b", "1.0+.a", "1.0-a.", "1.0+a_b"] {
            assert!(!parser.is_valid(input), "{} should be malformed", input);
        }
    }

    #[test]
    fn test_is_valid() {
        let parser = VersionParser::new();
        assert!(parser.is_valid("1.0.0"));
        assert!(parser.is_valid("1.0"));
        assert!(parser.is_valid("1.0.0-beta.1+sha"));
        assert!(!parser.is_valid("1"));
        assert!(!parser.is_valid(""));
    }
}
