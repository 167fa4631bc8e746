// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Registry of published schema revisions

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A published revision of the monitoring schema.
///
/// Every revision is an independent frozen snapshot; the variants are
/// ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaVersion {
    V1_0_0,
    V1_0_1,
    V1_0_2,
}

impl SchemaVersion {
    /// All retained snapshots, oldest first.
    pub const ALL: [SchemaVersion; 3] = [Self::V1_0_0, Self::V1_0_1, Self::V1_0_2];

    /// The newest published revision.
    pub fn latest() -> Self {
        Self::V1_0_2
    }

    /// Dotted version string, e.g. `"1.0.2"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_0_0 => "1.0.0",
            Self::V1_0_1 => "1.0.1",
            Self::V1_0_2 => "1.0.2",
        }
    }

    /// Version-stamped filename for this revision, e.g. `1.0.2.json`.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::UnknownVersion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_round_trips_through_str() {
        for version in SchemaVersion::ALL {
            assert_eq!(version.as_str().parse::<SchemaVersion>().unwrap(), version);
        }
    }

    #[test]
    fn test_unknown_version_rejected() {
        assert!(matches!(
            "9.9.9".parse::<SchemaVersion>(),
            Err(Error::UnknownVersion(_))
        ));
    }

    #[test]
    fn test_latest_is_newest() {
        assert_eq!(SchemaVersion::latest(), *SchemaVersion::ALL.last().unwrap());
    }
}
