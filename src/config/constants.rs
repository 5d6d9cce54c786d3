//! Documented default values for every recognized setting.
//!
//! Centralized location for the defaults the host framework's loader
//! falls back to when an environment variable is unset or empty.

// =============================================================================
// Application
// =============================================================================

/// Default row limit applied to dashboard queries
pub const DEFAULT_ROW_LIMIT: u32 = 5_000;

/// CSRF protection is on unless explicitly disabled
pub const DEFAULT_CSRF_ENABLED: bool = true;

/// Mapbox visualizations stay disabled until a key is supplied
pub const DEFAULT_MAPBOX_API_KEY: &str = "";

/// Placeholder session secret; deployments must override it
pub const DEFAULT_SECRET_KEY: &str = "change_me_superset_secret_key";

/// Honor X-Forwarded-* headers from the reverse proxy
pub const DEFAULT_ENABLE_PROXY_FIX: bool = true;

// =============================================================================
// Database
// =============================================================================

/// Default database user
pub const DEFAULT_DATABASE_USER: &str = "automation";

/// Default database password (development placeholder)
pub const DEFAULT_DATABASE_PASSWORD: &str = "automation_password";

/// Default database host
pub const DEFAULT_DATABASE_HOST: &str = "postgres";

/// Default database port
pub const DEFAULT_DATABASE_PORT: u16 = 5432;

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "superset";

// =============================================================================
// Cache
// =============================================================================

/// Default cache backend identifier recognized by the host framework
pub const DEFAULT_CACHE_BACKEND: &str = "RedisCache";

/// Default cache entry expiry in seconds (5 minutes)
pub const DEFAULT_CACHE_TIMEOUT_SECONDS: u64 = 300;

/// Prefix applied to every cache key
pub const DEFAULT_CACHE_KEY_PREFIX: &str = "superset_";

/// Default cache host
pub const DEFAULT_CACHE_REDIS_HOST: &str = "redis";

/// Default cache port
pub const DEFAULT_CACHE_REDIS_PORT: u16 = 6379;

/// Default cache password (development placeholder)
pub const DEFAULT_CACHE_REDIS_PASSWORD: &str = "redis_password";

/// Logical Redis database index reserved for the cache
pub const DEFAULT_CACHE_REDIS_DB: u32 = 1;

// =============================================================================
// Async task worker
// =============================================================================

/// Default broker endpoint for dispatching background tasks
pub const DEFAULT_BROKER_URL: &str = "redis://:redis_password@redis:6379/0";

/// Default store for background task results
pub const DEFAULT_RESULT_BACKEND: &str = "redis://:redis_password@redis:6379/0";

/// Task modules the worker imports at startup
pub const DEFAULT_WORKER_IMPORTS: &[&str] = &["superset.sql_lab", "superset.tasks"];

/// How many tasks a worker prefetches per process slot
pub const DEFAULT_WORKER_PREFETCH_MULTIPLIER: u32 = 10;

/// Acknowledge tasks after execution rather than on receipt
pub const DEFAULT_TASK_ACKS_LATE: bool = true;

/// Task name carrying the SQL Lab rate limit annotation
pub const SQL_LAB_TASK: &str = "sql_lab.get_sql_results";

/// Default rate limit for SQL Lab result fetches
pub const DEFAULT_SQL_LAB_RATE_LIMIT: &str = "100/s";

// =============================================================================
// Session
// =============================================================================

/// Default SameSite policy for the session cookie
pub const DEFAULT_SESSION_COOKIE_SAMESITE: &str = "Lax";

/// Secure cookies are off by default; enable behind HTTPS in production
pub const DEFAULT_SESSION_COOKIE_SECURE: bool = false;

/// Absolute session lifetime in seconds (24 hours)
pub const DEFAULT_SESSION_LIFETIME_SECONDS: u64 = 86_400;

// =============================================================================
// Uploads
// =============================================================================

/// File extensions accepted for upload
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["txt", "csv", "json", "xml"];
