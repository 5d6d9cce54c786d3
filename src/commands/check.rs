//! Check command - Reports where each setting's value came from.
//!
//! Purely informational: the bundle has no validation layer, so this
//! always exits successfully.

use std::env;
use std::io::Write;

use crate::config::{recognized_vars, Settings};
use crate::errors::ConfigResult;

/// Execute the check command
pub fn execute(settings: &Settings) -> ConfigResult<()> {
    let mut out = std::io::stdout().lock();

    let mut from_env = 0usize;
    let mut defaulted = 0usize;

    for var in recognized_vars() {
        match env::var(&var.name) {
            Ok(value) if !value.is_empty() => {
                from_env += 1;
                writeln!(out, "{:<36} from environment", var.name)?;
            }
            _ => {
                defaulted += 1;
                writeln!(out, "{:<36} default", var.name)?;
            }
        }
    }

    writeln!(out, "\n{from_env} from environment, {defaulted} defaulted")?;

    if settings.secret_key_is_placeholder() {
        tracing::warn!("SUPERSET_SECRET_KEY is the shipped placeholder; override it before deploying");
    }
    if !settings.session.cookie_secure {
        tracing::info!("SESSION_COOKIE_SECURE is off; enable it behind HTTPS in production");
    }

    Ok(())
}
