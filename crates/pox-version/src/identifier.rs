//! Prerelease identifiers and their precedence

use std::cmp::Ordering;
use std::fmt;

/// A single dot-separated segment of a prerelease string.
///
/// Identifiers borrow from the version they were split from. Numeric
/// identifiers keep their digits as text so that values wider than `u64`
/// still order correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// Digits only, without leading zeros (unless exactly `0`)
    Numeric(&'a str),
    /// Contains at least one letter or hyphen
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    /// Build an identifier from a single prerelease segment.
    ///
    /// Returns `None` for segments SemVer does not allow: empty ones, numeric
    /// ones with a leading zero (`01`), and anything outside `[0-9A-Za-z-]`.
    pub fn new(segment: &'a str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return None;
        }
        let id = Self::classify(segment);
        if id.is_numeric() && segment.len() > 1 && segment.starts_with('0') {
            return None;
        }
        Some(id)
    }

    /// Segments coming from a parsed version have already passed the grammar.
    fn classify(segment: &'a str) -> Self {
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(segment)
        } else {
            Identifier::AlphaNumeric(segment)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // No leading zeros, so a longer digit run is always the bigger number.
            (Identifier::Numeric(a), Identifier::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a prerelease string into identifiers.
///
/// An empty string yields no identifiers.
pub fn split(pre_release: &str) -> impl Iterator<Item = Identifier<'_>> {
    pre_release
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(Identifier::classify)
}

/// Compare two non-empty prerelease strings field by field.
///
/// When every identifier of the shorter one matches, the shorter one is lower.
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let mut left = split(a);
    let mut right = split(b);

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}
