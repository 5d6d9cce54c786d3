//! Feature flags toggling optional host-framework behavior.

use std::collections::BTreeMap;

use serde::Serialize;

use super::source::{self, Lookup};

/// Documented flag names, in the order the host framework lists them.
pub const FLAG_NAMES: &[&str] = &[
    "ENABLE_TEMPLATE_PROCESSING",
    "DASHBOARD_NATIVE_FILTERS",
    "DASHBOARD_CROSS_FILTERS",
    "DASHBOARD_NATIVE_FILTERS_SET",
    "ALERT_REPORTS",
    "ESCAPE_MARKDOWN_HTML",
    "THUMBNAILS",
    "LISTVIEWS_DEFAULT_CARD_VIEW",
];

/// The documented feature-flag set.
///
/// Each flag can be flipped via `FEATURE_FLAG_<NAME>`; the set of names
/// itself is fixed, matching what the host framework recognizes.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_template_processing: bool,
    pub dashboard_native_filters: bool,
    pub dashboard_cross_filters: bool,
    pub dashboard_native_filters_set: bool,
    pub alert_reports: bool,
    pub escape_markdown_html: bool,
    pub thumbnails: bool,
    pub listviews_default_card_view: bool,
}

impl FeatureFlags {
    pub(crate) fn resolve(lookup: Lookup<'_>) -> Self {
        let flag = |name: &str, default: bool| {
            source::bool_or(lookup, &format!("FEATURE_FLAG_{name}"), default)
        };

        Self {
            enable_template_processing: flag("ENABLE_TEMPLATE_PROCESSING", true),
            dashboard_native_filters: flag("DASHBOARD_NATIVE_FILTERS", true),
            dashboard_cross_filters: flag("DASHBOARD_CROSS_FILTERS", true),
            dashboard_native_filters_set: flag("DASHBOARD_NATIVE_FILTERS_SET", true),
            alert_reports: flag("ALERT_REPORTS", true),
            escape_markdown_html: flag("ESCAPE_MARKDOWN_HTML", true),
            thumbnails: flag("THUMBNAILS", false),
            listviews_default_card_view: flag("LISTVIEWS_DEFAULT_CARD_VIEW", false),
        }
    }

    /// Flag mapping as the host framework's loader consumes it.
    pub fn as_map(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("ENABLE_TEMPLATE_PROCESSING", self.enable_template_processing),
            ("DASHBOARD_NATIVE_FILTERS", self.dashboard_native_filters),
            ("DASHBOARD_CROSS_FILTERS", self.dashboard_cross_filters),
            ("DASHBOARD_NATIVE_FILTERS_SET", self.dashboard_native_filters_set),
            ("ALERT_REPORTS", self.alert_reports),
            ("ESCAPE_MARKDOWN_HTML", self.escape_markdown_html),
            ("THUMBNAILS", self.thumbnails),
            ("LISTVIEWS_DEFAULT_CARD_VIEW", self.listviews_default_card_view),
        ])
    }

    /// Whether a named flag is enabled; `None` for unrecognized names.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.as_map().get(name).copied()
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::resolve(&|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_contains_exactly_the_documented_names() {
        let map = FeatureFlags::default().as_map();
        assert_eq!(map.len(), FLAG_NAMES.len());
        for name in FLAG_NAMES {
            assert!(map.contains_key(name), "missing flag {name}");
        }
    }

    #[test]
    fn unknown_flag_name_is_none() {
        assert_eq!(FeatureFlags::default().is_enabled("NO_SUCH_FLAG"), None);
    }
}
