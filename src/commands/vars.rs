//! Vars command - Lists recognized environment variables.

use std::env;
use std::io::Write;

use crate::config::recognized_vars;
use crate::errors::ConfigResult;

/// Execute the vars command
pub fn execute() -> ConfigResult<()> {
    let mut out = std::io::stdout().lock();

    for var in recognized_vars() {
        // Empty counts as unset, matching the resolution rule
        let state = match env::var(&var.name) {
            Ok(value) if !value.is_empty() => "set",
            _ => "unset",
        };
        writeln!(out, "{:<36} [{}] default: {}", var.name, state, var.default)?;
    }

    Ok(())
}
