//! Strict semantic version parsing and comparison
//!
//! This crate parses `major.minor.patch[-prerelease][+build]` strings
//! against a strict grammar and defines two relations over the parsed
//! values: a precedence ordering that ignores build metadata, and a
//! stricter exact equality that does not.

mod comparator;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{ParseError, VersionParser};
