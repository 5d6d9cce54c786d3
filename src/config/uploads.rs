//! Upload restrictions.

use std::collections::BTreeSet;

use serde::Serialize;

use super::constants::DEFAULT_ALLOWED_EXTENSIONS;
use super::source::{self, Lookup};

/// Permitted file extensions for uploads.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UploadSettings {
    pub allowed_extensions: BTreeSet<String>,
}

impl UploadSettings {
    pub(crate) fn resolve(lookup: Lookup<'_>) -> Self {
        let allowed_extensions =
            source::list_or(lookup, "ALLOWED_EXTENSIONS", DEFAULT_ALLOWED_EXTENSIONS)
                .into_iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect();

        Self { allowed_extensions }
    }

    /// Whether files with the given extension may be uploaded.
    /// Comparison is case-insensitive and ignores a leading dot.
    pub fn is_allowed(&self, extension: &str) -> bool {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        self.allowed_extensions.contains(&normalized)
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self::resolve(&|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extensions_match_documented_set() {
        let uploads = UploadSettings::default();
        let expected: BTreeSet<String> =
            ["txt", "csv", "json", "xml"].iter().map(|s| s.to_string()).collect();
        assert_eq!(uploads.allowed_extensions, expected);
    }

    #[test]
    fn extension_check_normalizes_case_and_dot() {
        let uploads = UploadSettings::default();
        assert!(uploads.is_allowed("csv"));
        assert!(uploads.is_allowed(".CSV"));
        assert!(!uploads.is_allowed("exe"));
    }
}
