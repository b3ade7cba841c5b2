// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use strapi_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = strapi_cli::init_logging(cli.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }
    if let Err(e) = strapi_cli::run(cli).await {
        eprintln!("error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("  hint: {}", hint);
        }
        std::process::exit(1);
    }
}
