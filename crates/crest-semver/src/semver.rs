//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::{Comparator, ParseError, Version};

/// Main facade for string-level version operations
pub struct Semver;

impl Semver {
    /// Compare two version strings by precedence
    pub fn compare(a: &str, b: &str) -> Result<Ordering, ParseError> {
        Ok(Comparator::compare(&Version::parse(a)?, &Version::parse(b)?))
    }

    /// Check two version strings for exact equality (build and case included)
    pub fn equals(a: &str, b: &str) -> Result<bool, ParseError> {
        Ok(Version::parse(a)? == Version::parse(b)?)
    }

    /// Sort versions in ascending precedence order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending precedence order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Keep parsed versions with their original index; strings that fail
        // to parse are dropped.
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Version::parse(v).ok().map(|version| (version, i)))
            .collect();

        // Stable sort, so precedence-equal entries keep their input order.
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert_eq!(Semver::compare("1.2.3", "1.2.4").unwrap(), Ordering::Less);
        assert_eq!(Semver::compare("2.0.0", "1.9.9").unwrap(), Ordering::Greater);
        assert_eq!(
            Semver::compare("1.0.0+build1", "1.0.0+build2").unwrap(),
            Ordering::Equal
        );
        assert!(Semver::compare("1.2", "1.2.3").is_err());
    }

    #[test]
    fn test_equals() {
        assert!(Semver::equals("1.0.0-alpha+1", "1.0.0-alpha+1").unwrap());
        assert!(!Semver::equals("1.0.0+build1", "1.0.0+build2").unwrap());
        assert!(!Semver::equals("1.0.0-RC.1", "1.0.0-rc.1").unwrap());
        assert!(Semver::equals("1.2.3", "01.2.3").is_err());
    }

    #[test]
    fn test_sort() {
        let versions = vec!["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(
            sorted,
            vec!["0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(
            rsorted,
            vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]
        );
    }

    #[test]
    fn test_sort_drops_unparseable() {
        let versions = vec!["1.0", "1.0.0", "dev-main", "0.9.9"];
        assert_eq!(Semver::sort(&versions), vec!["0.9.9", "1.0.0"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_precedence() {
        let versions = vec!["1.0.0+b", "1.0.0+a", "0.1.0"];
        assert_eq!(
            Semver::sort(&versions),
            vec!["0.1.0", "1.0.0+b", "1.0.0+a"]
        );
    }
}
