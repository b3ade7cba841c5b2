// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! strapi_cli - Command-line front end for the `strapi` client.
//!
//! Every subcommand performs exactly one request and prints the outcome as
//! pretty JSON on stdout:
//!
//! ```text
//! strapi find-all authors --eq name="David Doe"
//! {
//!   "status": 200,
//!   "data": [ { "documentId": "...", "name": "David Doe", ... } ]
//! }
//! ```
//!
//! Connection settings come from `--url`/`--api-key`, the `STRAPI_URL` and
//! `STRAPI_API_KEY` variables, or a `.env.local` file in the working
//! directory, in that order.

mod cli;
mod commands;
pub mod error;
pub mod filter;

pub use cli::{Cli, Command, ConnectionArgs, FilterArgs};
pub use error::{Error, Result};

use strapi::StrapiClient;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Install the stderr log subscriber: DEBUG when verbose, WARN otherwise.
pub fn init_logging(verbose: bool) -> std::result::Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// Execute a parsed command line against the configured service.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.connection.resolve()?;
    debug!("using {}", config.base_url);
    let client = StrapiClient::new(config)?;

    let output = commands::execute(&client, cli.command).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::print(&mut out, &output)
}
