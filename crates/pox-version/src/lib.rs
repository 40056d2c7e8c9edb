//! Semantic Versioning 2.0.0 parsing, rendering and precedence
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into a
//! [`Version`] value, renders it back verbatim, and compares versions by
//! SemVer precedence.
//!
//! Prerelease identifiers are compared one by one as SemVer requires
//! (`alpha.9 < alpha.10`, numeric identifiers below alphanumeric ones), not
//! as a single string.

mod comparator;
mod identifier;
mod operator;
mod record;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use identifier::Identifier;
pub use operator::{InvalidOperatorError, Operator};
pub use record::VersionRecord;
pub use version::Version;
pub use version_parser::{is_valid, parse, try_parse, VersionError};
