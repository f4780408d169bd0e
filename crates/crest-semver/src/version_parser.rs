//! Version grammar and parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

lazy_static! {
    /// Digits with no leading zero
    static ref DIGITS: &'static str = r"(?:0|[1-9][0-9]*)";

    /// Digits, letters and dashes
    static ref ALPHA_NUM: &'static str = r"[-0-9A-Za-z]+";

    /// Alphanumeric identifier with at least one non-digit character (an
    /// all-digit identifier is a numeric identifier instead)
    static ref STRICT_ALPHA_NUM: &'static str = r"[-0-9A-Za-z]*[-A-Za-z]+[-0-9A-Za-z]*";

    static ref PRE_RELEASE: String = format!(
        r"(?:{0}|{1})(?:\.(?:{0}|{1}))*",
        *DIGITS, *STRICT_ALPHA_NUM
    );

    static ref BUILD: String = format!(r"{0}(?:\.{0})*", *ALPHA_NUM);

    // Anchored at both ends: no surrounding whitespace, no leading "v".
    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^(?P<major>{digits})\.(?P<minor>{digits})\.(?P<patch>{digits})(?:-(?P<prerelease>{pre}))?(?:\+(?P<build>{build}))?$",
        digits = *DIGITS,
        pre = *PRE_RELEASE,
        build = *BUILD,
    )).unwrap();
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version string \"{input}\"")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        ParseError {
            input: input.to_string(),
        }
    }

    /// The original string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parser matching version strings against the strict grammar
pub struct VersionParser;

impl VersionParser {
    /// Parse a version string into its typed parts
    pub fn parse(input: &str) -> Result<Version, ParseError> {
        let caps = SEMVER_RE
            .captures(input)
            .ok_or_else(|| ParseError::new(input))?;

        let major = parse_core_field(&caps["major"], input)?;
        let minor = parse_core_field(&caps["minor"], input)?;
        let patch = parse_core_field(&caps["patch"], input)?;

        // Prerelease and build identifiers stay raw strings. Whether an
        // identifier is treated numerically is decided at comparison time,
        // and build identifiers are never compared at all.
        let prerelease = caps.name("prerelease").map(|m| split_identifiers(m.as_str()));
        let build = caps.name("build").map(|m| split_identifiers(m.as_str()));

        Ok(Version::from_parts(major, minor, patch, prerelease, build))
    }
}

// The grammar only admits digit sequences here, so conversion can fail
// solely on u64 overflow.
fn parse_core_field(field: &str, input: &str) -> Result<u64, ParseError> {
    field.parse::<u64>().map_err(|_| ParseError::new(input))
}

fn split_identifiers(raw: &str) -> Vec<String> {
    raw.split('.').map(str::to_string).collect()
}
