//! Environment lookup helpers.
//!
//! All settings resolve through a lookup function so the same logic works
//! against the process environment and against test-supplied maps. An unset
//! or empty variable always falls back to the documented default; a value
//! that fails to parse is logged and defaulted, never fatal.

use std::str::FromStr;

/// Source of raw setting values, keyed by environment variable name.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Raw value of `name`, treating an empty string as unset.
fn raw(lookup: Lookup<'_>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.is_empty())
}

/// String value of `name`, or `default` when unset or empty.
pub(crate) fn string_or(lookup: Lookup<'_>, name: &str, default: &str) -> String {
    raw(lookup, name).unwrap_or_else(|| default.to_string())
}

/// Parsed value of `name`, or `default` when unset, empty, or malformed.
pub(crate) fn parse_or<T>(lookup: Lookup<'_>, name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match raw(lookup, name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("{} has unparseable value {:?}, using default {}", name, value, default);
            default
        }),
        None => default,
    }
}

/// Boolean value of `name`, or `default` when unset, empty, or unrecognized.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, and `on`/`off`, case-insensitive.
pub(crate) fn bool_or(lookup: Lookup<'_>, name: &str, default: bool) -> bool {
    match raw(lookup, name) {
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => {
                tracing::warn!("{} has unrecognized boolean {:?}, using default {}", name, value, default);
                default
            }
        },
        None => default,
    }
}

/// Comma-separated list value of `name`, or `default` when unset or empty.
///
/// Items are trimmed; blank items are dropped.
pub(crate) fn list_or(lookup: Lookup<'_>, name: &str, default: &[&str]) -> Vec<String> {
    match raw(lookup, name) {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        None => default.iter().map(|item| item.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn string_or_prefers_env_value() {
        let env = source(&[("NAME", "value")]);
        let lookup = |name: &str| env.get(name).cloned();
        assert_eq!(string_or(&lookup, "NAME", "fallback"), "value");
        assert_eq!(string_or(&lookup, "MISSING", "fallback"), "fallback");
    }

    #[test]
    fn empty_string_counts_as_unset() {
        let env = source(&[("NAME", "")]);
        let lookup = |name: &str| env.get(name).cloned();
        assert_eq!(string_or(&lookup, "NAME", "fallback"), "fallback");
        assert_eq!(parse_or(&lookup, "NAME", 7u32), 7);
        assert!(bool_or(&lookup, "NAME", true));
    }

    #[test]
    fn parse_or_defaults_on_garbage() {
        let env = source(&[("PORT", "not-a-number")]);
        let lookup = |name: &str| env.get(name).cloned();
        assert_eq!(parse_or(&lookup, "PORT", 5432u16), 5432);
    }

    #[test]
    fn bool_or_accepts_common_spellings() {
        let env = source(&[("A", "TRUE"), ("B", "0"), ("C", "Yes"), ("D", "off"), ("E", "maybe")]);
        let lookup = |name: &str| env.get(name).cloned();
        assert!(bool_or(&lookup, "A", false));
        assert!(!bool_or(&lookup, "B", true));
        assert!(bool_or(&lookup, "C", false));
        assert!(!bool_or(&lookup, "D", true));
        assert!(bool_or(&lookup, "E", true));
    }

    #[test]
    fn list_or_trims_and_drops_blanks() {
        let env = source(&[("ITEMS", " a, b ,, c ")]);
        let lookup = |name: &str| env.get(name).cloned();
        assert_eq!(list_or(&lookup, "ITEMS", &["x"]), vec!["a", "b", "c"]);
        assert_eq!(list_or(&lookup, "MISSING", &["x", "y"]), vec!["x", "y"]);
    }
}
