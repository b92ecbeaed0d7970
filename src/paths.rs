//! Entry-name helpers shared by the builder and launcher sides.
//!
//! Archive entry names always use forward slashes regardless of the host
//! platform, so paths are normalized once on the way in and compared as
//! plain strings afterwards.

/// Replace every backslash separator with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Remove a trailing `suffix` from an entry name.
///
/// The suffix is only stripped when it appears after the first separator,
/// so a bare root name is never truncated down to nothing. Returns the
/// (possibly stripped) name and whether stripping happened.
pub fn strip_entry_suffix(path: &str, suffix: &str) -> (String, bool) {
    if !suffix.is_empty() {
        if let Some(stem) = path.strip_suffix(suffix) {
            if stem.contains('/') {
                return (stem.to_string(), true);
            }
        }
    }
    (path.to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::{normalize_separators, strip_entry_suffix};

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(normalize_separators(r"pkg\payload\app.bin"), "pkg/payload/app.bin");
        assert_eq!(normalize_separators("already/normal"), "already/normal");
        assert_eq!(normalize_separators(""), "");
    }

    #[test]
    fn suffix_after_separator_is_stripped() {
        let (stripped, found) = strip_entry_suffix("pkg/payload.enc", ".enc");
        assert!(found);
        assert_eq!(stripped, "pkg/payload");
    }

    #[test]
    fn suffix_on_root_name_is_kept() {
        // No separator before the suffix: leave the name alone.
        let (kept, found) = strip_entry_suffix("payload.enc", ".enc");
        assert!(!found);
        assert_eq!(kept, "payload.enc");
    }

    #[test]
    fn missing_suffix_is_reported() {
        let (kept, found) = strip_entry_suffix("pkg/payload.bin", ".enc");
        assert!(!found);
        assert_eq!(kept, "pkg/payload.bin");
    }

    #[test]
    fn empty_suffix_never_matches() {
        let (kept, found) = strip_entry_suffix("pkg/payload", "");
        assert!(!found);
        assert_eq!(kept, "pkg/payload");
    }
}
