//! Version parsing and validation module

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version error: empty input")]
    EmptyInput,
    #[error("version error: invalid format \"{0}\"")]
    InvalidFormat(String),
}

impl VersionError {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, VersionError::EmptyInput)
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, VersionError::InvalidFormat(_))
    }
}

lazy_static! {
    // A numeric part or identifier: `0`, or digits without a leading zero.
    // `[0-9]` rather than `\d`, which would also admit non-ASCII digits.
    static ref NUMERIC_REGEX: &'static str = r"0|[1-9][0-9]*";

    static ref PRE_RELEASE_IDENTIFIER_REGEX: String =
        format!(r"(?:{}|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)", *NUMERIC_REGEX);

    // Full SemVer 2.0.0 grammar, anchored at both ends
    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^({num})\.({num})\.({num})(?:-({id}(?:\.{id})*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        num = *NUMERIC_REGEX,
        id = *PRE_RELEASE_IDENTIFIER_REGEX,
    )).unwrap();
}

/// Parse a version string, returning an error if it is not valid SemVer 2.0.0.
///
/// A single leading `v` is accepted and dropped, so `v1.2.3` and `1.2.3`
/// parse to the same value. Prerelease and build metadata are kept exactly
/// as written.
///
/// ```
/// let version = pox_version::try_parse("v1.2.3-beta+exp.sha.5114f85").unwrap();
/// assert_eq!(version.to_canonical_string(), "1.2.3-beta+exp.sha.5114f85");
/// ```
pub fn try_parse(input: &str) -> Result<Version, VersionError> {
    if input.trim().is_empty() {
        log::trace!("rejecting version: empty input");
        return Err(VersionError::EmptyInput);
    }

    let version = input.strip_prefix('v').unwrap_or(input);

    let invalid = || {
        log::trace!("rejecting version \"{}\": does not match the SemVer 2.0.0 grammar", input);
        VersionError::InvalidFormat(input.to_string())
    };

    let caps = SEMVER_RE.captures(version).ok_or_else(invalid)?;

    // The grammar admits arbitrarily long digit runs; anything past u64 is not a version we can hold.
    let number = |index: usize| -> Result<u64, VersionError> {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(invalid)
    };

    let major = number(1)?;
    let minor = number(2)?;
    let patch = number(3)?;

    let pre_release = caps.get(4).map_or("", |m| m.as_str());
    let build = caps.get(5).map_or("", |m| m.as_str());

    Ok(Version::from_parts(major, minor, patch, pre_release.to_string(), build.to_string()))
}

/// Parse a version string that is known to be valid.
///
/// # Panics
///
/// Panics if the input is empty or malformed. The panic payload is the
/// [`VersionError`] itself, so it can be recovered with
/// `payload.downcast_ref::<VersionError>()`. Use [`try_parse`] for anything
/// that did not come from the program itself.
pub fn parse(input: &str) -> Version {
    match try_parse(input) {
        Ok(version) => version,
        Err(err) => std::panic::panic_any(err),
    }
}

/// Check if a version string is valid
pub fn is_valid(input: &str) -> bool {
    try_parse(input).is_ok()
}
