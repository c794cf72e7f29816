//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Revision as shown to users: the short commit, marked when built from a
/// tree with uncommitted edits.
pub fn revision() -> String {
    if BUILD_DIRTY {
        format!("{}-dirty", BUILD_COMMIT)
    } else {
        BUILD_COMMIT.to_string()
    }
}

/// `angler <version> (<revision> <date>)`, with the profile appended for
/// non-release builds.
pub fn version_string() -> String {
    let mut version = format!(
        "angler {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        revision(),
        BUILD_DATE
    );
    if BUILD_PROFILE != "release" {
        version.push_str(&format!(" [{}]", BUILD_PROFILE));
    }
    version
}
