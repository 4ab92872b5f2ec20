//! Version reporting
//!
//! The server tracks upstream SuperSQL releases. Its version string is
//! `<upstream>.<lsp patch>+<upstream commit>`, e.g. `0.1.0.0+e8764da`.

/// SuperSQL release this server is synced to
pub const SUPER_VERSION: &str = "0.1.0";

/// LSP-only fixes since the last sync; reset to 0 on each sync
pub const LSP_PATCH: u32 = 0;

/// Upstream commit the registry was generated from
pub const SUPER_COMMIT: &str = "e8764da";

pub fn full_version() -> String {
    let version = format!("{SUPER_VERSION}.{LSP_PATCH}");
    if SUPER_COMMIT.is_empty() {
        version
    } else {
        format!("{version}+{SUPER_COMMIT}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_format() {
        assert_eq!(full_version(), "0.1.0.0+e8764da");
    }
}
