//! Show command - Prints the resolved settings bundle.

use std::io::Write;

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Settings;
use crate::errors::ConfigResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> ConfigResult<()> {
    let mut out = std::io::stdout().lock();

    match args.format {
        OutputFormat::Json => {
            // Serialize skips secret fields, so this is safe to paste in tickets
            let json = serde_json::to_string_pretty(settings)?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            writeln!(out, "{settings:#?}")?;
        }
    }

    Ok(())
}
