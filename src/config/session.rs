//! Session cookie policy.

use std::time::Duration;

use serde::Serialize;

use super::constants::{
    DEFAULT_SESSION_COOKIE_SAMESITE, DEFAULT_SESSION_COOKIE_SECURE,
    DEFAULT_SESSION_LIFETIME_SECONDS,
};
use super::source::{self, Lookup};

/// SameSite policy for the session cookie.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

impl SameSite {
    fn from_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lax" => Some(SameSite::Lax),
            "strict" => Some(SameSite::Strict),
            "none" => Some(SameSite::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for SameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SameSite::Lax => write!(f, "Lax"),
            SameSite::Strict => write!(f, "Strict"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Session cookie settings.
///
/// Secure cookies default to off; deployments terminate TLS at a reverse
/// proxy in development, so this stays a documented default rather than a
/// hard requirement.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSettings {
    pub cookie_samesite: SameSite,
    pub cookie_secure: bool,
    /// Absolute session lifetime in seconds
    pub lifetime_seconds: u64,
}

impl SessionSettings {
    pub(crate) fn resolve(lookup: Lookup<'_>) -> Self {
        let samesite_value = source::string_or(
            lookup,
            "SESSION_COOKIE_SAMESITE",
            DEFAULT_SESSION_COOKIE_SAMESITE,
        );
        let cookie_samesite = SameSite::from_value(&samesite_value).unwrap_or_else(|| {
            tracing::warn!(
                "SESSION_COOKIE_SAMESITE has unrecognized value {:?}, using {}",
                samesite_value,
                DEFAULT_SESSION_COOKIE_SAMESITE
            );
            SameSite::Lax
        });

        Self {
            cookie_samesite,
            cookie_secure: source::bool_or(
                lookup,
                "SESSION_COOKIE_SECURE",
                DEFAULT_SESSION_COOKIE_SECURE,
            ),
            lifetime_seconds: source::parse_or(
                lookup,
                "PERMANENT_SESSION_LIFETIME",
                DEFAULT_SESSION_LIFETIME_SECONDS,
            ),
        }
    }

    /// Absolute session lifetime as a duration.
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_seconds)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::resolve(&|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samesite_parses_case_insensitively() {
        assert_eq!(SameSite::from_value("LAX"), Some(SameSite::Lax));
        assert_eq!(SameSite::from_value("strict"), Some(SameSite::Strict));
        assert_eq!(SameSite::from_value("None"), Some(SameSite::None));
        assert_eq!(SameSite::from_value("sideways"), None);
    }

    #[test]
    fn lifetime_defaults_to_a_day() {
        let session = SessionSettings::default();
        assert_eq!(session.lifetime(), Duration::from_secs(86_400));
    }
}
