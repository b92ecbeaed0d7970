//! Version information for the shroud binary

/// Current version, stamped by the build script (`SHROUD_VERSION`)
pub const VERSION: &str = env!("SHROUD_VERSION");

/// Git commit hash (set at compile time)
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Get full version string with optional build information
pub fn full_version() -> String {
    let mut version = VERSION.to_string();

    if let Some(commit) = GIT_COMMIT {
        version.push_str(&format!(" ({})", &commit[..8.min(commit.len())]));
    }

    version
}
