use log::info;
use serde::Serialize;
use std::fmt;

use crate::compare::{ReleaseVersion, VersionParseError};

// Include the generated version information
include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Placeholder shipped when the packaging pipeline injected no build number.
pub const UNSUBSTITUTED_BUILD_TAG: &str = "[BUILD]";

/// Get the major version component
pub fn major() -> &'static str {
    VERSION_MAJOR
}

/// Get the minor version component
pub fn minor() -> &'static str {
    VERSION_MINOR
}

/// Get the build tag
///
/// May still be the unsubstituted placeholder; callers rendering it for
/// humans should go through [`VersionInfo::build_tag_display`].
pub fn build_tag() -> &'static str {
    BUILD_TAG
}

/// Get the build timestamp
pub fn build_timestamp() -> &'static str {
    BUILD_TIMESTAMP
}

/// Get the product name
pub fn product_name() -> &'static str {
    PRODUCT_NAME
}

/// Get the full version string, e.g. `"1.1.[BUILD]"` or `"1.1.4821"`
pub fn version_string() -> String {
    VersionInfo::current().version_string()
}

/// Print version information to stdout
pub fn print_version_info() {
    let info = VersionInfo::current();
    println!("{} v{}.{}", info.product_name, info.major, info.minor);
    println!("Build: {}", info.build_tag_display());
    println!("Built: {}", info.build_timestamp);
}

/// Log the startup banner through the `log` facade
pub fn log_startup() {
    let info = VersionInfo::current();
    info!("Starting {} v{}", info.product_name, info);
}

/// Version identity of a build, fixed at compile time
///
/// Constructed once and passed by reference to whatever displays it; there
/// is no mutable global state behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub major: &'static str,
    pub minor: &'static str,
    pub build_tag: &'static str,
    pub build_timestamp: &'static str,
    pub product_name: &'static str,
}

impl VersionInfo {
    /// The identity compiled into this binary by the build script
    pub fn current() -> Self {
        VersionInfo {
            major: VERSION_MAJOR,
            minor: VERSION_MINOR,
            build_tag: BUILD_TAG,
            build_timestamp: BUILD_TIMESTAMP,
            product_name: PRODUCT_NAME,
        }
    }

    /// An identity with explicit components, for callers comparing against
    /// a version that did not come from this build
    pub fn new(major: &'static str, minor: &'static str, build_tag: &'static str) -> Self {
        VersionInfo {
            major,
            minor,
            build_tag,
            build_timestamp: BUILD_TIMESTAMP,
            product_name: PRODUCT_NAME,
        }
    }

    /// Whether the packaging pipeline replaced the build tag placeholder
    pub fn is_build_stamped(&self) -> bool {
        self.build_tag != UNSUBSTITUTED_BUILD_TAG
    }

    /// Build tag for human output; an unsubstituted placeholder reads as
    /// "unknown build" rather than leaking the literal marker
    pub fn build_tag_display(&self) -> &'static str {
        if self.is_build_stamped() {
            self.build_tag
        } else {
            "unknown build"
        }
    }

    /// The three components joined by `"."`, stable across calls
    pub fn version_string(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.build_tag)
    }

    /// The numeric compatibility level of this identity
    pub fn release(&self) -> Result<ReleaseVersion, VersionParseError> {
        ReleaseVersion::parse(&self.version_string())
    }

    /// Same-major compatibility check against another release
    pub fn is_compatible_with(&self, other: &ReleaseVersion) -> bool {
        self.release()
            .map(|release| release.is_compatible_with(other))
            .unwrap_or(false)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version_string())
    }
}
