//! The semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identifier::{self, Identifier};
use crate::record::VersionRecord;
use crate::version_parser::{try_parse, VersionError};

/// A parsed Semantic Versioning 2.0.0 version.
///
/// Prerelease and build metadata are stored verbatim; an empty string means
/// the part is absent. Values are immutable once built.
///
/// `Eq` and `Hash` look at every field, build metadata included. For SemVer
/// precedence, where build metadata is ignored, use [`Version::cmp_precedence`]
/// or [`Version::compare_to`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionRecord", into = "VersionRecord")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: String,
    build: String,
}

impl Version {
    /// Create a plain release version `major.minor.patch`
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Only called with parts the grammar has already accepted.
    pub(crate) fn from_parts(major: u64, minor: u64, patch: u64, pre_release: String, build: String) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
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

    /// Prerelease string, if any (`alpha.1` for `1.0.0-alpha.1`)
    pub fn pre_release(&self) -> Option<&str> {
        (!self.pre_release.is_empty()).then_some(self.pre_release.as_str())
    }

    /// Build metadata, if any (`exp.sha.5114f85` for `1.0.0+exp.sha.5114f85`)
    pub fn build(&self) -> Option<&str> {
        (!self.build.is_empty()).then_some(self.build.as_str())
    }

    /// Check if this is a prerelease version
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Iterate over the dot-separated prerelease identifiers
    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        identifier::split(&self.pre_release)
    }

    /// Render without a leading `v`, e.g. `1.0.0-alpha+build.001`
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Render with a leading `v`, as used for git tags, e.g. `v1.0.0-beta`
    pub fn to_tag_string(&self) -> String {
        format!("v{}", self)
    }

    /// Compare by SemVer precedence.
    ///
    /// Major, minor and patch are compared numerically. A prerelease is lower
    /// than the release it precedes, and two prereleases are compared
    /// identifier by identifier. Build metadata is never consulted.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => identifier::compare_pre_release(&self.pre_release, &other.pre_release),
            })
    }

    /// Compare by SemVer precedence.
    ///
    /// Returns `1` if `self > other`, `-1` if `self < other` and `0` if both
    /// have the same precedence.
    pub fn compare_to(&self, other: &Version) -> i8 {
        match self.cmp_precedence(other) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }

    /// Check if both versions have the same precedence, ignoring build metadata
    pub fn precedence_eq(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

/// Precedence first, then build metadata as a tie-breaker so the order agrees with `Eq`.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other).then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        try_parse(value)
    }
}
