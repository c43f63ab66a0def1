use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::Version;

/// Compare two versions by precedence.
///
/// The core numbers are compared first. For equal cores, a release ranks above
/// any prerelease, and two prereleases are compared identifier by identifier.
/// Build metadata never affects the result.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_prerelease(a, b))
}

fn compare_prerelease(a: &Version, b: &Version) -> Ordering {
    match (a.is_prerelease(), b.is_prerelease()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        // Lexicographic, so a shorter list that is a prefix of a longer one ranks lower.
        (true, true) => a
            .prerelease_identifiers()
            .map(Identifier::new)
            .cmp(b.prerelease_identifiers().map(Identifier::new)),
    }
}

/// One dot-separated part of a prerelease, classified for comparison.
#[derive(Debug, Clone, Copy)]
pub enum Identifier<'a> {
    /// Only ASCII digits, compared by numeric value.
    Numeric(&'a str),
    /// Anything else, compared byte by byte.
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn new(identifier: &'a str) -> Self {
        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            Self::Numeric(identifier)
        } else {
            Self::Alphanumeric(identifier)
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Numeric(s) | Self::Alphanumeric(s) => s,
        }
    }
}

/// Digits without their leading zeros, keeping a lone `0`.
fn significant_digits(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

/// Compares digit strings of any length without parsing them.
fn cmp_decimal(a: &str, b: &str) -> Ordering {
    let a = significant_digits(a);
    let b = significant_digits(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => cmp_decimal(a, b),
            (Self::Numeric(_), Self::Alphanumeric(_)) => Ordering::Less,
            (Self::Alphanumeric(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alphanumeric(a), Self::Alphanumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier<'_> {}

impl Hash for Identifier<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Numeric(digits) => {
                state.write_u8(0);
                significant_digits(digits).hash(state);
            }
            Self::Alphanumeric(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl std::fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
