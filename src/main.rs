//! Application entry point.
//!
//! CLI-based entry point that resolves the settings bundle and dispatches
//! to the inspection commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analytics_config::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Resolve configuration once for the life of the process
    let settings = Settings::global();
    tracing::debug!("Configuration resolved");

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, settings),
        Commands::Vars => commands::vars::execute(),
        Commands::Check => commands::check::execute(settings),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
