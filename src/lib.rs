//! Environment-backed configuration bundle for the analytics dashboard stack.
//!
//! The deployment's BI web application reads its configuration once at
//! process startup: database URI, cache backend, async task broker, feature
//! flags, session policy, upload restrictions. This crate materializes that
//! bundle as an immutable struct tree populated from environment variables
//! with documented defaults, plus a small CLI for inspecting the resolved
//! values at deploy time.
//!
//! Resolution never fails: an unset or empty variable yields its documented
//! default, and a malformed value is logged and defaulted. Connection
//! failures, authentication failures and the like surface later inside the
//! consuming services, not here.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved bundle as JSON (secrets omitted)
//! cargo run -- show
//!
//! # List recognized environment variables and defaults
//! cargo run -- vars
//!
//! # Report which values came from the environment
//! cargo run -- check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{
    CacheSettings, DatabaseSettings, FeatureFlags, SameSite, SessionSettings, Settings,
    UploadSettings, WorkerSettings,
};
pub use errors::{ConfigError, ConfigResult};
