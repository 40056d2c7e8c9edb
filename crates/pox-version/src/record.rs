//! Structured serde record for versions

use serde::{Deserialize, Serialize};

use crate::version::Version;
use crate::version_parser::{try_parse, VersionError};

/// Field-by-field form of a [`Version`], used when it is embedded in a
/// surrounding document.
///
/// Empty prerelease and build fields are omitted on output and default to
/// empty on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pre_release: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub build: String,
}

impl From<Version> for VersionRecord {
    fn from(version: Version) -> Self {
        VersionRecord {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release().unwrap_or_default().to_string(),
            build: version.build().unwrap_or_default().to_string(),
        }
    }
}

/// Records are rendered and run back through the grammar, so a record can
/// never produce a version the parser would have rejected.
impl TryFrom<VersionRecord> for Version {
    type Error = VersionError;

    fn try_from(record: VersionRecord) -> Result<Self, Self::Error> {
        let mut text = format!("{}.{}.{}", record.major, record.minor, record.patch);
        if !record.pre_release.is_empty() {
            text.push('-');
            text.push_str(&record.pre_release);
        }
        if !record.build.is_empty() {
            text.push('+');
            text.push_str(&record.build);
        }
        try_parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version_parser::parse;

    #[test]
    fn test_record_from_version() {
        let record = VersionRecord::from(parse("1.2.3-beta+exp.sha.5114f85"));
        assert_eq!(
            record,
            VersionRecord {
                major: 1,
                minor: 2,
                patch: 3,
                pre_release: "beta".to_string(),
                build: "exp.sha.5114f85".to_string(),
            }
        );
    }

    #[test]
    fn test_version_from_record() {
        let record = VersionRecord {
            major: 0,
            minor: 9,
            patch: 1,
            pre_release: String::new(),
            build: "001".to_string(),
        };
        assert_eq!(Version::try_from(record).unwrap(), parse("0.9.1+001"));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let record = VersionRecord {
            major: 1,
            minor: 0,
            patch: 0,
            pre_release: "alpha..1".to_string(),
            build: String::new(),
        };
        assert!(Version::try_from(record).unwrap_err().is_invalid_format());

        let record = VersionRecord {
            major: 1,
            minor: 0,
            patch: 0,
            pre_release: "01".to_string(),
            build: String::new(),
        };
        assert!(Version::try_from(record).is_err());
    }
}
