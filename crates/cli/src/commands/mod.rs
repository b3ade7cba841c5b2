// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod read;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod write;

use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use strapi::{StrapiClient, Transport};

use crate::cli::Command;
use crate::error::Result;

/// What a successful read or write prints.
#[derive(Serialize)]
struct Output<T> {
    status: u16,
    data: T,
}

fn render<T: Serialize>(status: u16, data: T) -> Result<Value> {
    Ok(serde_json::to_value(Output { status, data })?)
}

/// Run one subcommand and return the JSON document to print.
pub async fn execute<T: Transport>(client: &StrapiClient<T>, command: Command) -> Result<Value> {
    match command {
        Command::FindOne { collection, id } => read::find_one(client, &collection, &id).await,
        Command::FindAll { collection, filter } => {
            read::find_all(client, &collection, filter.to_filter_params().as_ref()).await
        }
        Command::Create { collection, data } => write::create(client, &collection, &data).await,
        Command::Update {
            collection,
            id,
            data,
        } => write::update(client, &collection, &id, &data).await,
        Command::Delete { collection, id } => write::delete(client, &collection, &id).await,
    }
}

/// Pretty-print `value` followed by a newline.
pub fn print(out: &mut impl Write, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
