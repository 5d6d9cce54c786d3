//! The settings bundle loaded from environment variables.

use std::env;

use once_cell::sync::OnceCell;
use serde::Serialize;

use super::cache::CacheSettings;
use super::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_BROKER_URL, DEFAULT_CACHE_BACKEND,
    DEFAULT_CACHE_KEY_PREFIX, DEFAULT_CACHE_REDIS_DB, DEFAULT_CACHE_REDIS_HOST,
    DEFAULT_CACHE_REDIS_PASSWORD, DEFAULT_CACHE_REDIS_PORT, DEFAULT_CACHE_TIMEOUT_SECONDS,
    DEFAULT_CSRF_ENABLED, DEFAULT_DATABASE_HOST, DEFAULT_DATABASE_NAME,
    DEFAULT_DATABASE_PASSWORD, DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USER,
    DEFAULT_ENABLE_PROXY_FIX, DEFAULT_MAPBOX_API_KEY, DEFAULT_RESULT_BACKEND, DEFAULT_ROW_LIMIT,
    DEFAULT_SECRET_KEY, DEFAULT_SESSION_COOKIE_SAMESITE, DEFAULT_SESSION_COOKIE_SECURE,
    DEFAULT_SESSION_LIFETIME_SECONDS, DEFAULT_SQL_LAB_RATE_LIMIT, DEFAULT_TASK_ACKS_LATE,
    DEFAULT_WORKER_IMPORTS, DEFAULT_WORKER_PREFETCH_MULTIPLIER,
};
use super::database::DatabaseSettings;
use super::features::{FeatureFlags, FLAG_NAMES};
use super::session::SessionSettings;
use super::source::{self, Lookup};
use super::uploads::UploadSettings;
use super::worker::WorkerSettings;

static GLOBAL: OnceCell<Settings> = OnceCell::new();

/// The complete configuration bundle the host framework reads at startup.
///
/// Built once from the environment, immutable afterwards. Loading never
/// fails: every setting has a documented default, and malformed values are
/// logged and defaulted.
#[derive(Clone, Serialize)]
pub struct Settings {
    /// Row limit applied to dashboard queries
    pub row_limit: u32,
    /// CSRF protection toggle
    pub csrf_enabled: bool,
    /// API key enabling Mapbox visualizations; empty disables them
    pub mapbox_api_key: String,
    #[serde(skip_serializing)]
    secret_key: String,
    /// Honor X-Forwarded-* headers from the reverse proxy
    pub enable_proxy_fix: bool,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    pub worker: WorkerSettings,
    pub feature_flags: FeatureFlags,
    pub session: SessionSettings,
    pub uploads: UploadSettings,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("row_limit", &self.row_limit)
            .field("csrf_enabled", &self.csrf_enabled)
            .field("mapbox_api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("enable_proxy_fix", &self.enable_proxy_fix)
            .field("database", &self.database)
            .field("cache", &self.cache)
            .field("worker", &self.worker)
            .field("feature_flags", &self.feature_flags)
            .field("session", &self.session)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl Settings {
    /// Load the bundle from the process environment.
    ///
    /// Reads `.env` first when present, as deployments ship one alongside
    /// the binary.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|name| env::var(name).ok())
    }

    /// Resolve the bundle against an arbitrary value source.
    ///
    /// `from_env` delegates here; tests drive this with in-memory maps.
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let secret_key = source::string_or(lookup, "SUPERSET_SECRET_KEY", DEFAULT_SECRET_KEY);
        if secret_key == DEFAULT_SECRET_KEY {
            tracing::warn!("SUPERSET_SECRET_KEY not set, sessions use the placeholder secret");
        }

        Self {
            row_limit: source::parse_or(lookup, "ROW_LIMIT", DEFAULT_ROW_LIMIT),
            csrf_enabled: source::bool_or(lookup, "WTF_CSRF_ENABLED", DEFAULT_CSRF_ENABLED),
            mapbox_api_key: source::string_or(lookup, "MAPBOX_API_KEY", DEFAULT_MAPBOX_API_KEY),
            secret_key,
            enable_proxy_fix: source::bool_or(
                lookup,
                "ENABLE_PROXY_FIX",
                DEFAULT_ENABLE_PROXY_FIX,
            ),
            database: DatabaseSettings::resolve(lookup),
            cache: CacheSettings::resolve(lookup),
            worker: WorkerSettings::resolve(lookup),
            feature_flags: FeatureFlags::resolve(lookup),
            session: SessionSettings::resolve(lookup),
            uploads: UploadSettings::resolve(lookup),
        }
    }

    /// The process-wide bundle, loaded from the environment on first access.
    pub fn global() -> &'static Settings {
        GLOBAL.get_or_init(Settings::from_env)
    }

    /// Session signing secret.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Whether the session secret is still the shipped placeholder.
    pub fn secret_key_is_placeholder(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(&|_| None)
    }
}

/// A recognized environment variable and its documented default.
#[derive(Clone, Debug)]
pub struct VarSpec {
    pub name: String,
    pub default: String,
}

impl VarSpec {
    fn new(name: &str, default: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            default: default.into(),
        }
    }
}

/// Every environment variable the bundle recognizes, with its default.
pub fn recognized_vars() -> Vec<VarSpec> {
    let composed_uri = format!(
        "postgresql://{DEFAULT_DATABASE_USER}:{DEFAULT_DATABASE_PASSWORD}@{DEFAULT_DATABASE_HOST}:{DEFAULT_DATABASE_PORT}/{DEFAULT_DATABASE_NAME}"
    );

    let mut vars = vec![
        VarSpec::new("ROW_LIMIT", DEFAULT_ROW_LIMIT.to_string()),
        VarSpec::new("WTF_CSRF_ENABLED", DEFAULT_CSRF_ENABLED.to_string()),
        VarSpec::new("MAPBOX_API_KEY", DEFAULT_MAPBOX_API_KEY),
        VarSpec::new("SUPERSET_SECRET_KEY", DEFAULT_SECRET_KEY),
        VarSpec::new("ENABLE_PROXY_FIX", DEFAULT_ENABLE_PROXY_FIX.to_string()),
        VarSpec::new("SQLALCHEMY_DATABASE_URI", composed_uri),
        VarSpec::new("DATABASE_HOST", DEFAULT_DATABASE_HOST),
        VarSpec::new("DATABASE_PORT", DEFAULT_DATABASE_PORT.to_string()),
        VarSpec::new("DATABASE_USER", DEFAULT_DATABASE_USER),
        VarSpec::new("DATABASE_PASSWORD", DEFAULT_DATABASE_PASSWORD),
        VarSpec::new("DATABASE_NAME", DEFAULT_DATABASE_NAME),
        VarSpec::new("CACHE_TYPE", DEFAULT_CACHE_BACKEND),
        VarSpec::new("CACHE_DEFAULT_TIMEOUT", DEFAULT_CACHE_TIMEOUT_SECONDS.to_string()),
        VarSpec::new("CACHE_KEY_PREFIX", DEFAULT_CACHE_KEY_PREFIX),
        VarSpec::new("CACHE_REDIS_HOST", DEFAULT_CACHE_REDIS_HOST),
        VarSpec::new("CACHE_REDIS_PORT", DEFAULT_CACHE_REDIS_PORT.to_string()),
        VarSpec::new("CACHE_REDIS_PASSWORD", DEFAULT_CACHE_REDIS_PASSWORD),
        VarSpec::new("CACHE_REDIS_DB", DEFAULT_CACHE_REDIS_DB.to_string()),
        VarSpec::new("CELERY_BROKER_URL", DEFAULT_BROKER_URL),
        VarSpec::new("CELERY_RESULT_BACKEND", DEFAULT_RESULT_BACKEND),
        VarSpec::new("CELERY_IMPORTS", DEFAULT_WORKER_IMPORTS.join(",")),
        VarSpec::new(
            "CELERY_WORKER_PREFETCH_MULTIPLIER",
            DEFAULT_WORKER_PREFETCH_MULTIPLIER.to_string(),
        ),
        VarSpec::new("CELERY_TASK_ACKS_LATE", DEFAULT_TASK_ACKS_LATE.to_string()),
        VarSpec::new("SQL_LAB_RATE_LIMIT", DEFAULT_SQL_LAB_RATE_LIMIT),
        VarSpec::new("SESSION_COOKIE_SAMESITE", DEFAULT_SESSION_COOKIE_SAMESITE),
        VarSpec::new(
            "SESSION_COOKIE_SECURE",
            DEFAULT_SESSION_COOKIE_SECURE.to_string(),
        ),
        VarSpec::new(
            "PERMANENT_SESSION_LIFETIME",
            DEFAULT_SESSION_LIFETIME_SECONDS.to_string(),
        ),
        VarSpec::new("ALLOWED_EXTENSIONS", DEFAULT_ALLOWED_EXTENSIONS.join(",")),
    ];

    for &name in FLAG_NAMES {
        let default = FeatureFlags::default()
            .is_enabled(name)
            .unwrap_or_default();
        vars.push(VarSpec::new(
            &format!("FEATURE_FLAG_{name}"),
            default.to_string(),
        ));
    }

    vars
}
