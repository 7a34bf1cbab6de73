use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Error raised when a version string cannot be read as a release level
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,
    #[error("missing {0} version component")]
    MissingComponent(&'static str),
    #[error("invalid {component} version component {value:?}")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },
}

/// Numeric compatibility level of a release
///
/// Only major and minor take part in ordering and compatibility; the build
/// tag identifies a specific build of the same release and is ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
}

impl ReleaseVersion {
    pub const fn new(major: u64, minor: u64) -> Self {
        ReleaseVersion { major, minor }
    }

    /// Parse `"<major>.<minor>"` with an optional trailing build tag
    ///
    /// `"1.1.[BUILD]"` parses the same as `"1.1.4821"`: the third segment is
    /// not a compatibility datum, so an unsubstituted placeholder is never a
    /// parse error.
    pub fn parse(version: &str) -> Result<Self, VersionParseError> {
        if version.trim().is_empty() {
            return Err(VersionParseError::Empty);
        }
        let mut parts = version.splitn(3, '.');
        let major = parse_component(parts.next(), "major")?;
        let minor = parse_component(parts.next(), "minor")?;
        Ok(ReleaseVersion { major, minor })
    }

    /// Releases sharing a major version are compatible
    pub fn is_compatible_with(&self, other: &ReleaseVersion) -> bool {
        self.major == other.major
    }

    pub fn is_newer_than(&self, other: &ReleaseVersion) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

fn parse_component(
    part: Option<&str>,
    component: &'static str,
) -> Result<u64, VersionParseError> {
    let value = part.ok_or(VersionParseError::MissingComponent(component))?;
    value
        .parse()
        .map_err(|_| VersionParseError::InvalidComponent {
            component,
            value: value.to_string(),
        })
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_release() {
        assert_eq!(ReleaseVersion::parse("1.1").unwrap(), ReleaseVersion::new(1, 1));
        assert_eq!(ReleaseVersion::parse("12.340").unwrap(), ReleaseVersion::new(12, 340));
    }

    #[test]
    fn test_parse_ignores_trailing_build_tag() {
        assert_eq!(
            ReleaseVersion::parse("1.1.[BUILD]").unwrap(),
            ReleaseVersion::new(1, 1)
        );
        assert_eq!(
            ReleaseVersion::parse("1.1.4821").unwrap(),
            ReleaseVersion::new(1, 1)
        );
        // Build tags may themselves contain dots
        assert_eq!(
            ReleaseVersion::parse("2.3.2022.11.05").unwrap(),
            ReleaseVersion::new(2, 3)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ReleaseVersion::parse(""), Err(VersionParseError::Empty));
        assert_eq!(ReleaseVersion::parse("  "), Err(VersionParseError::Empty));
        assert_eq!(
            ReleaseVersion::parse("1"),
            Err(VersionParseError::MissingComponent("minor"))
        );
        assert!(matches!(
            ReleaseVersion::parse("1.x"),
            Err(VersionParseError::InvalidComponent { component: "minor", .. })
        ));
        assert!(matches!(
            ReleaseVersion::parse("one.1"),
            Err(VersionParseError::InvalidComponent { component: "major", .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(ReleaseVersion::new(2, 0).is_newer_than(&ReleaseVersion::new(1, 9)));
        assert!(ReleaseVersion::new(1, 2).is_newer_than(&ReleaseVersion::new(1, 1)));
        assert!(!ReleaseVersion::new(1, 1).is_newer_than(&ReleaseVersion::new(1, 1)));
        assert!(ReleaseVersion::new(1, 0) < ReleaseVersion::new(1, 1));
    }

    #[test]
    fn test_compatibility_is_same_major() {
        assert!(ReleaseVersion::new(1, 0).is_compatible_with(&ReleaseVersion::new(1, 9)));
        assert!(!ReleaseVersion::new(1, 9).is_compatible_with(&ReleaseVersion::new(2, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ReleaseVersion::new(1, 1).to_string(), "1.1");
    }
}
