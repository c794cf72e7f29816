//! Generates `build_info.rs` for `angler --version`: source revision, whether
//! the tree had local edits, build date and cargo profile.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Trimmed stdout of a successful git command.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

struct Revision {
    commit: String,
    dirty: bool,
}

fn revision() -> Revision {
    // Release pipelines pin the revision; the tree is clean by definition there
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return Revision {
            commit,
            dirty: false,
        };
    }
    match git(&["rev-parse", "--short=7", "HEAD"]).filter(|c| !c.is_empty()) {
        Some(commit) => Revision {
            commit,
            dirty: git(&["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|s| !s.is_empty()),
        },
        None => Revision {
            commit: "unknown".to_string(),
            dirty: false,
        },
    }
}

/// `BUILD_DATE` wins, then `SOURCE_DATE_EPOCH` for reproducible builds, then
/// today in UTC.
fn build_date() -> String {
    if let Ok(date) = env::var("BUILD_DATE") {
        return date;
    }
    let pinned = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));
    pinned
        .unwrap_or_else(chrono::Utc::now)
        .format("%Y-%m-%d")
        .to_string()
}

fn main() {
    let Revision { commit, dirty } = revision();
    let date = build_date();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {commit:?};\n\
         pub const BUILD_DIRTY: bool = {dirty};\n\
         pub const BUILD_DATE: &str = {date:?};\n\
         pub const BUILD_PROFILE: &str = {profile:?};\n"
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    for path in [".git/HEAD", ".git/index"] {
        println!("cargo:rerun-if-changed={path}");
    }
    for var in ["BUILD_COMMIT", "BUILD_DATE", "SOURCE_DATE_EPOCH"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
