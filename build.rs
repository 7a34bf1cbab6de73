use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Always use the version from Cargo.toml for consistency
    let major = env::var("CARGO_PKG_VERSION_MAJOR").unwrap_or_else(|_| "1".to_string());
    let minor = env::var("CARGO_PKG_VERSION_MINOR").unwrap_or_else(|_| "1".to_string());

    // The packaging pipeline injects a concrete build number or commit hash
    // through KOMBINE_BUILD_TAG; without it the placeholder ships as-is.
    let build_tag = env::var("KOMBINE_BUILD_TAG")
        .ok()
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| "[BUILD]".to_string());

    let now: DateTime<Utc> = Utc::now();

    // Write version to a file that can be included in the binary
    let version_file_path = Path::new(&env::var("OUT_DIR").unwrap()).join("version.rs");
    let version_content = format!(
        r#"
pub const VERSION_MAJOR: &str = "{}";
pub const VERSION_MINOR: &str = "{}";
pub const BUILD_TAG: &str = "{}";
pub const BUILD_TIMESTAMP: &str = "{}";
pub const PRODUCT_NAME: &str = "Kombine";
"#,
        major,
        minor,
        build_tag,
        now.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    fs::write(&version_file_path, version_content).expect("Failed to write version file");

    // Tell Cargo to rerun this build script if any of these change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KOMBINE_BUILD_TAG");
}
