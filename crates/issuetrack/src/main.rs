// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Issuetrack - a minimal GraphQL issue tracker API.
//!
//! This is the binary entry point for the API server.

mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use issuetrack_config::IssuetrackConfig;

/// Issuetrack - a minimal GraphQL issue tracker API.
#[derive(Parser, Debug)]
#[command(name = "issuetrack", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Start the API server (default).
    Serve,
    /// Print the resolved configuration as TOML.
    Config,
    /// Print the GraphQL schema in SDL form.
    Schema,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    if command == Commands::Schema {
        print!("{}", issuetrack_gateway::schema_sdl());
        return;
    }

    let config = load_config(cli.config.as_deref());

    match command {
        Commands::Serve => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("issuetrack: {e}");
                std::process::exit(1);
            }
        }
        Commands::Config => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("issuetrack: failed to render configuration: {e}");
                std::process::exit(1);
            }
        },
        Commands::Schema => {}
    }
}

/// Load and validate configuration, exiting with diagnostics on failure.
fn load_config(path: Option<&std::path::Path>) -> IssuetrackConfig {
    let loaded = match path {
        Some(path) => issuetrack_config::load_and_validate_path(path),
        None => issuetrack_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            issuetrack_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}
