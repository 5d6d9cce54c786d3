//! Cache backend settings.

use std::time::Duration;

use serde::Serialize;

use super::constants::{
    DEFAULT_CACHE_BACKEND, DEFAULT_CACHE_KEY_PREFIX, DEFAULT_CACHE_REDIS_DB,
    DEFAULT_CACHE_REDIS_HOST, DEFAULT_CACHE_REDIS_PASSWORD, DEFAULT_CACHE_REDIS_PORT,
    DEFAULT_CACHE_TIMEOUT_SECONDS,
};
use super::source::{self, Lookup};

/// Cache configuration consumed by the host framework.
#[derive(Clone, Serialize)]
pub struct CacheSettings {
    /// Backend identifier, e.g. `RedisCache`
    pub backend: String,
    /// Default entry expiry in seconds
    pub default_timeout_seconds: u64,
    /// Prefix applied to every cache key
    pub key_prefix: String,
    pub redis_host: String,
    pub redis_port: u16,
    #[serde(skip_serializing)]
    redis_password: String,
    /// Logical Redis database index
    pub redis_db: u32,
}

impl std::fmt::Debug for CacheSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheSettings")
            .field("backend", &self.backend)
            .field("default_timeout_seconds", &self.default_timeout_seconds)
            .field("key_prefix", &self.key_prefix)
            .field("redis_host", &self.redis_host)
            .field("redis_port", &self.redis_port)
            .field("redis_password", &"[REDACTED]")
            .field("redis_db", &self.redis_db)
            .finish()
    }
}

impl CacheSettings {
    pub(crate) fn resolve(lookup: Lookup<'_>) -> Self {
        Self {
            backend: source::string_or(lookup, "CACHE_TYPE", DEFAULT_CACHE_BACKEND),
            default_timeout_seconds: source::parse_or(
                lookup,
                "CACHE_DEFAULT_TIMEOUT",
                DEFAULT_CACHE_TIMEOUT_SECONDS,
            ),
            key_prefix: source::string_or(lookup, "CACHE_KEY_PREFIX", DEFAULT_CACHE_KEY_PREFIX),
            redis_host: source::string_or(lookup, "CACHE_REDIS_HOST", DEFAULT_CACHE_REDIS_HOST),
            redis_port: source::parse_or(lookup, "CACHE_REDIS_PORT", DEFAULT_CACHE_REDIS_PORT),
            redis_password: source::string_or(
                lookup,
                "CACHE_REDIS_PASSWORD",
                DEFAULT_CACHE_REDIS_PASSWORD,
            ),
            redis_db: source::parse_or(lookup, "CACHE_REDIS_DB", DEFAULT_CACHE_REDIS_DB),
        }
    }

    /// Default entry expiry as a duration.
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_seconds)
    }

    /// Cache connection password.
    pub fn redis_password(&self) -> &str {
        &self.redis_password
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::resolve(&|_| None)
    }
}
