// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use strapi::{Payload, StrapiClient, Transport};

use crate::error::Result;

use super::render;

pub async fn create<T: Transport>(
    client: &StrapiClient<T>,
    collection: &str,
    payload: &Payload,
) -> Result<Value> {
    let response = client.create(collection, payload).await?;
    render(response.status, response.body.data)
}

pub async fn update<T: Transport>(
    client: &StrapiClient<T>,
    collection: &str,
    id: &str,
    payload: &Payload,
) -> Result<Value> {
    let response = client.update(collection, id, payload).await?;
    render(response.status, response.body.data)
}

/// Prints `{ "status", "deleted" }`; the response body is never shown.
pub async fn delete<T: Transport>(
    client: &StrapiClient<T>,
    collection: &str,
    id: &str,
) -> Result<Value> {
    let response = client.delete(collection, id).await?;
    Ok(serde_json::to_value(response)?)
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
