//! Range notation: rendering and strict parsing

use std::cmp::Ordering;

use super::{Bound, VersionRange};
use crate::error::ParseError;
use crate::{compare, ComparisonMode, Version, VersionParser};

/// How [`VersionRange::format`] renders a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeStyle {
    /// Interval notation, e.g. `[1.0.0, 2.0.0)`. A range with only an
    /// inclusive lower bound renders as the bare version.
    #[default]
    Canonical,
    /// Operator notation for people, e.g. `(>= 1.0.0 && < 2.0.0)`
    Pretty,
}

pub(crate) fn format(range: &VersionRange, style: RangeStyle) -> String {
    match style {
        RangeStyle::Canonical => format_canonical(range),
        RangeStyle::Pretty => format_pretty(range),
    }
}

// Metadata is part of the text, so both bounds must print the same before
// they can share one slot.
fn same_text(a: &Version, b: &Version) -> bool {
    compare(ComparisonMode::Full, a, b) == Ordering::Equal
}

fn format_canonical(range: &VersionRange) -> String {
    match (range.min(), range.max()) {
        (Bound::Inclusive(min), Bound::Unbounded) => min.to_string(),
        (Bound::Inclusive(min), Bound::Inclusive(max)) if same_text(min, max) => format!("[{}]", min),
        (min, max) => format!(
            "{}{}, {}{}",
            if min.is_inclusive() { '[' } else { '(' },
            min.version().map(ToString::to_string).unwrap_or_default(),
            max.version().map(ToString::to_string).unwrap_or_default(),
            if max.is_inclusive() { ']' } else { ')' },
        ),
    }
}

fn format_pretty(range: &VersionRange) -> String {
    if let (Bound::Inclusive(min), Bound::Inclusive(max)) = (range.min(), range.max()) {
        if same_text(min, max) {
            return format!("(= {})", min);
        }
    }

    let mut parts = Vec::with_capacity(2);
    match range.min() {
        Bound::Inclusive(v) => parts.push(format!(">= {}", v)),
        Bound::Exclusive(v) => parts.push(format!("> {}", v)),
        Bound::Unbounded => {}
    }
    match range.max() {
        Bound::Inclusive(v) => parts.push(format!("<= {}", v)),
        Bound::Exclusive(v) => parts.push(format!("< {}", v)),
        Bound::Unbounded => {}
    }

    if parts.is_empty() {
        "*".to_string()
    } else {
        format!("({})", parts.join(" && "))
    }
}

/// Strict parser for canonical notation
///
/// Accepts a bare version (lower inclusive, no upper), `[v]` (exact) and the
/// interval forms `[a, b]`, `(a, b)`, `[a, b)`, `(a, b]` where either side
/// may be left empty next to a parenthesis.
pub(crate) fn parse(text: &str) -> Result<VersionRange, ParseError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(ParseError::Argument("version range is empty".to_string()));
    }

    let parser = VersionParser::new();
    let parse_bound = |s: &str| {
        parser
            .parse(s)
            .map_err(|e| ParseError::malformed_range(input, e.to_string()))
    };

    let first = input.chars().next().unwrap_or_default();
    if first != '[' && first != '(' {
        let min = parse_bound(input)?;
        return Ok(VersionRange::at_least(min));
    }

    let last = input.chars().last().unwrap_or_default();
    if input.len() < 3 || (last != ']' && last != ')') {
        return Err(ParseError::malformed_range(input, "unbalanced brackets"));
    }

    let min_inclusive = first == '[';
    let max_inclusive = last == ']';
    let inner = &input[1..input.len() - 1];

    let mut sides = inner.split(',');
    let low = sides.next().unwrap_or_default().trim();
    let high = match sides.next() {
        Some(high) => high.trim(),
        None => {
            if !(min_inclusive && max_inclusive) {
                return Err(ParseError::malformed_range(
                    input,
                    "a single version must be enclosed in square brackets",
                ));
            }
            let version = parse_bound(low)?;
            return Ok(VersionRange::exact(version));
        }
    };
    if sides.next().is_some() {
        return Err(ParseError::malformed_range(input, "too many commas"));
    }

    let min = if low.is_empty() {
        if min_inclusive {
            return Err(ParseError::malformed_range(input, "missing lower bound"));
        }
        Bound::Unbounded
    } else {
        Bound::new(parse_bound(low)?, min_inclusive)
    };

    let max = if high.is_empty() {
        if max_inclusive {
            return Err(ParseError::malformed_range(input, "missing upper bound"));
        }
        Bound::Unbounded
    } else {
        Bound::new(parse_bound(high)?, max_inclusive)
    };

    Ok(VersionRange::new(min, max, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VersionComparer;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn canonical(s: &str) -> String {
        VersionRange::parse(s).unwrap().format(RangeStyle::Canonical)
    }

    fn pretty(s: &str) -> String {
        VersionRange::parse(s).unwrap().format(RangeStyle::Pretty)
    }

    #[test]
    fn test_parse_bare_version() {
        let r = VersionRange::parse("1.3").unwrap();
        assert_eq!(r.min(), &Bound::Inclusive(v("1.3")));
        assert_eq!(r.max(), &Bound::Unbounded);
        assert!(!r.include_prerelease());
    }

    #[test]
    fn test_parse_exact() {
        let r = VersionRange::parse("[1.0]").unwrap();
        assert_eq!(r.min(), &Bound::Inclusive(v("1.0")));
        assert_eq!(r.max(), &Bound::Inclusive(v("1.0")));
        assert!(r.satisfies_default(&v("1.0.0.0")));
        assert!(!r.satisfies_default(&v("1.0.0.1")));
    }

    #[test]
    fn test_parse_intervals() {
        let r = VersionRange::parse("[2.4,5.0)").unwrap();
        assert_eq!(r.min(), &Bound::Inclusive(v("2.4")));
        assert_eq!(r.max(), &Bound::Exclusive(v("5.0")));

        let r = VersionRange::parse("( 1.0 , 2.0 ]").unwrap();
        assert_eq!(r.min(), &Bound::Exclusive(v("1.0")));
        assert_eq!(r.max(), &Bound::Inclusive(v("2.0")));

        let r = VersionRange::parse("(,2.0]").unwrap();
        assert_eq!(r.min(), &Bound::Unbounded);
        assert_eq!(r.max(), &Bound::Inclusive(v("2.0")));

        let r = VersionRange::parse("(1.0,)").unwrap();
        assert_eq!(r.min(), &Bound::Exclusive(v("1.0")));
        assert_eq!(r.max(), &Bound::Unbounded);

        let r = VersionRange::parse("(,)").unwrap();
        assert_eq!(r, VersionRange::all());
    }

    #[test]
    fn test_parse_prerelease_bounds() {
        let r = VersionRange::parse("[1.0-beta, 2.0)").unwrap();
        assert!(r.include_prerelease());
        assert!(r.satisfies_default(&v("1.5-alpha")));
    }

    #[test]
    fn test_parse_accepts_inverted_bounds() {
        let r = VersionRange::parse("[2.0, 1.0]").unwrap();
        assert!(!r.satisfies_default(&v("1.5")));
    }

    #[test]
    fn test_parse_empty_is_argument_error() {
        assert!(matches!(VersionRange::parse(""), Err(ParseError::Argument(_))));
        assert!(matches!(VersionRange::parse("  "), Err(ParseError::Argument(_))));
    }

    #[test]
    fn test_parse_fails() {
        for input in [
            "(1.0)",
            "[1.0)",
            "(1.0]",
            "[1.0",
            "1.0]",
            "[]",
            "()",
            "[,]",
            "[,1.0)",
            "(1.0,]",
            "[1.0,2.0,3.0]",
            "[a,2.0]",
            "[1.0,b)",
            "1",
            "abc",
            "[1.0 2.0]",
        ] {
            assert!(
                matches!(VersionRange::parse(input), Err(ParseError::MalformedRange { .. })),
                "{} should be malformed",
                input
            );
        }
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(canonical("1.3"), "1.3.0");
        assert_eq!(canonical("[1.3]"), "[1.3.0]");
        assert_eq!(canonical("[2.4,5.0)"), "[2.4.0, 5.0.0)");
        assert_eq!(canonical("(1.0,)"), "(1.0.0, )");
        assert_eq!(canonical("(,2.0]"), "(, 2.0.0]");
        assert_eq!(canonical("(,)"), "(, )");
        assert_eq!(canonical("[1.0.0.0, 1.0]"), "[1.0.0]");
        assert_eq!(canonical("[1.0-beta+sha, 2.0.0.3)"), "[1.0.0-beta+sha, 2.0.0.3)");
    }

    #[test]
    fn test_format_pretty() {
        assert_eq!(pretty("1.3"), "(>= 1.3.0)");
        assert_eq!(pretty("[1.3]"), "(= 1.3.0)");
        assert_eq!(pretty("[2.4,5.0)"), "(>= 2.4.0 && < 5.0.0)");
        assert_eq!(pretty("(1.0,2.0]"), "(> 1.0.0 && <= 2.0.0)");
        assert_eq!(pretty("(,2.0]"), "(<= 2.0.0)");
        assert_eq!(pretty("(,)"), "*");
    }

    #[test]
    fn test_format_keeps_bounds_differing_in_metadata() {
        let r = VersionRange::parse("[1.0+a, 1.0+b]").unwrap();
        assert_eq!(r.format(RangeStyle::Canonical), "[1.0.0+a, 1.0.0+b]");
        assert_eq!(r.format(RangeStyle::Pretty), "(>= 1.0.0+a && <= 1.0.0+b)");

        let full = VersionComparer::new(ComparisonMode::Full);
        let again = VersionRange::parse(&r.to_string()).unwrap();
        for candidate in ["1.0+a", "1.0+b", "1.0+c", "1.0"] {
            let candidate = v(candidate);
            assert_eq!(again.satisfies(&candidate, &full), r.satisfies(&candidate, &full), "{}", candidate);
        }
        assert!(again.satisfies(&v("1.0+b"), &full));

        // Metadata differing only in case still prints as one version
        assert_eq!(canonical("[1.0+sha, 1.0+SHA]"), "[1.0.0+sha]");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for input in ["1.3", "[1.3]", "[2.4,5.0)", "(1.0,)", "(,2.0]", "(,)", "(1.0-a, 1.0]"] {
            let r = VersionRange::parse(input).unwrap();
            let again = VersionRange::parse(&r.to_string()).unwrap();
            assert_eq!(again, r, "{}", input);
        }
    }
}
