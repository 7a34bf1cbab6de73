//! Version identity for the Kombine build tool.
//!
//! The build script stamps major, minor, and build tag into the binary at
//! compile time; this crate exposes them as constants, as a [`VersionInfo`]
//! value object, and as a [`ReleaseVersion`] compatibility level for
//! updaters. The build tag is `"[BUILD]"` until the packaging pipeline
//! injects a real build number via the `KOMBINE_BUILD_TAG` environment
//! variable; nothing here fails when it stays unsubstituted.

pub mod compare;
pub mod version;

pub use compare::{ReleaseVersion, VersionParseError};
pub use version::{
    build_tag, build_timestamp, log_startup, major, minor, print_version_info, product_name,
    version_string, VersionInfo, UNSUBSTITUTED_BUILD_TAG,
};
