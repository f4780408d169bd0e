//! The parsed version value type

use std::fmt;
use std::str::FromStr;

use crate::{ParseError, VersionParser};

/// A parsed semantic version
///
/// Equality is exact: all five fields must match, including build metadata
/// and identifier case. Precedence ordering lives on
/// [`Comparator`](crate::Comparator), which ignores build metadata and
/// compares alphanumeric prerelease identifiers case-insensitively. The two
/// relations deliberately disagree, so `Version` implements neither `Ord`
/// nor `PartialOrd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Vec<String>>,
    build: Option<Vec<String>>,
}

impl Version {
    /// Parse a version string against the strict grammar
    pub fn parse(input: &str) -> Result<Version, ParseError> {
        VersionParser::parse(input)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<Vec<String>>,
        build: Option<Vec<String>>,
    ) -> Version {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Major version number
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor version number
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch version number
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers, if any
    pub fn prerelease(&self) -> Option<&[String]> {
        self.prerelease.as_deref()
    }

    /// Build metadata identifiers, if any
    pub fn build(&self) -> Option<&[String]> {
        self.build.as_deref()
    }

    /// Whether this version carries a prerelease component
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::parse(s)
    }
}
