// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use strapi::{FilterParams, StrapiClient, Transport};
use tracing::debug;

use crate::error::Result;

use super::render;

pub async fn find_one<T: Transport>(
    client: &StrapiClient<T>,
    collection: &str,
    id: &str,
) -> Result<Value> {
    let response = client.find_one(collection, id).await?;
    render(response.status, response.body.data)
}

pub async fn find_all<T: Transport>(
    client: &StrapiClient<T>,
    collection: &str,
    filters: Option<&FilterParams>,
) -> Result<Value> {
    if let Some(filters) = filters {
        debug!("filters: {}", filters.filters());
    }
    let response = client.find_all(collection, filters).await?;
    debug!("{} matched {} resource(s)", collection, response.data().len());
    render(response.status, response.body.data)
}

#[cfg(test)]
#[path = "read_tests.rs"]
mod tests;
