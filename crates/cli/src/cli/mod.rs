// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand};
use strapi::Payload;

pub use args::{ConnectionArgs, FilterArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a `--data` argument: a JSON object of attributes.
fn json_payload(s: &str) -> Result<Payload, String> {
    let value: serde_json::Value =
        serde_json::from_str(s).map_err(|e| format!("invalid JSON: {}", e))?;
    Payload::from_json(value).map_err(|e| e.to_string())
}

const EXAMPLES_HELP: &str = "\
Examples:
  strapi find-all authors --eq name=\"David Doe\"
  strapi find-all authors --eq name=\"David Doe\" --eq name=\"Sarah Baker\" --any
  strapi create authors --data '{\"name\":\"X\",\"email\":\"x@example.com\"}'
  strapi delete authors <documentId>";

#[derive(Parser)]
#[command(name = "strapi")]
#[command(version)]
#[command(about = "Read and write Strapi collections over the REST API")]
#[command(after_help = EXAMPLES_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Log every request and response status to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch one resource by its documentId
    #[command(arg_required_else_help = true)]
    FindOne {
        /// Collection name, e.g. "authors"
        #[arg(value_parser = non_empty_string)]
        collection: String,

        /// documentId of the resource
        #[arg(value_parser = non_empty_string)]
        id: String,
    },

    /// Fetch every resource of a collection, optionally filtered
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        strapi find-all authors                               All authors\n  \
        strapi find-all authors --eq name=\"David Doe\"         Exact match\n  \
        strapi find-all authors --eq name=a --eq email=b      Both must match\n  \
        strapi find-all authors --eq name=a --eq name=b --any Either may match"
    )]
    FindAll {
        /// Collection name
        #[arg(value_parser = non_empty_string)]
        collection: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Create a resource
    #[command(arg_required_else_help = true)]
    Create {
        /// Collection name
        #[arg(value_parser = non_empty_string)]
        collection: String,

        /// Attributes as a JSON object
        #[arg(long, value_name = "JSON", value_parser = json_payload)]
        data: Payload,
    },

    /// Update some attributes of a resource
    #[command(arg_required_else_help = true)]
    Update {
        /// Collection name
        #[arg(value_parser = non_empty_string)]
        collection: String,

        /// documentId of the resource
        #[arg(value_parser = non_empty_string)]
        id: String,

        /// Attributes to change, as a JSON object
        #[arg(long, value_name = "JSON", value_parser = json_payload)]
        data: Payload,
    },

    /// Delete a resource
    #[command(arg_required_else_help = true)]
    Delete {
        /// Collection name
        #[arg(value_parser = non_empty_string)]
        collection: String,

        /// documentId of the resource
        #[arg(value_parser = non_empty_string)]
        id: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
