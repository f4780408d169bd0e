//! Version precedence comparison

use std::cmp::Ordering;

use crate::Version;

/// Comparator implementing the precedence ordering between versions
///
/// Precedence never consults build metadata and compares alphanumeric
/// prerelease identifiers case-insensitively, so [`Comparator::equal_to`]
/// is weaker than `Version` equality: two versions differing only in build
/// metadata or identifier case compare as equal but are not `==`.
pub struct Comparator;

impl Comparator {
    /// Compare two versions by precedence
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        let core = (a.major(), a.minor(), a.patch()).cmp(&(b.major(), b.minor(), b.patch()));
        if core != Ordering::Equal {
            return core;
        }
        // Only if the core triples are equal, compare the prereleases.
        // Build metadata never participates.
        Self::compare_prerelease(a.prerelease(), b.prerelease())
    }

    /// Check if a > b by precedence
    pub fn greater_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b by precedence
    pub fn greater_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Less
    }

    /// Check if a < b by precedence
    pub fn less_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Check if a <= b by precedence
    pub fn less_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Greater
    }

    /// Check if a and b have equal precedence
    pub fn equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }

    /// Check if a and b differ in precedence
    pub fn not_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Equal
    }

    fn compare_prerelease(a: Option<&[String]>, b: Option<&[String]>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            // No prerelease is greater than any version with a prerelease.
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                if a == b {
                    return Ordering::Equal;
                }
                for (x, y) in a.iter().zip(b.iter()) {
                    let ord = compare_identifier(x, y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                // A strict prefix has lower precedence.
                a.len().cmp(&b.len())
            }
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        // Numeric identifiers always rank below alphanumeric ones.
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
    }
}

// Numeric identifiers carry no leading zeros, so the longer digit string is
// the larger number.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn is_numeric(identifier: &str) -> bool {
    identifier.bytes().all(|b| b.is_ascii_digit())
}
