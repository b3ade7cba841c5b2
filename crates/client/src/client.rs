// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CRUD client for Strapi collections.
//!
//! Each method maps to exactly one request:
//!
//! ```text
//! find_one(c, id)        GET    {base}/{c}/{id}
//! find_all(c, filters)   GET    {base}/{c}?filters[...]
//! create(c, payload)     POST   {base}/{c}          { "data": ... }
//! update(c, id, payload) PUT    {base}/{c}/{id}     { "data": ... }
//! delete(c, id)          DELETE {base}/{c}/{id}
//! ```
//!
//! There is no retry, paging, batching or caching. Non-2xx answers become
//! [`ClientError::Status`] and transport failures pass through as
//! [`ClientError::Transport`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use strapi_core::{Document, Envelope, FilterParams, Payload};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

/// Status the service answers a successful delete with.
pub const DELETED_STATUS: u16 = 204;

/// A decoded response envelope together with its HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    /// The body as sent by the service.
    pub body: Envelope<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(&self) -> &T {
        &self.body.data
    }

    pub fn into_data(self) -> T {
        self.body.data
    }
}

/// Outcome of a delete. `deleted` depends only on the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    pub status: u16,
    pub deleted: bool,
}

/// Client for one Strapi service.
///
/// Holds no per-request state, so a single instance can be shared across
/// tasks (wrap it in an `Arc`) and used concurrently.
pub struct StrapiClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    base_url: Url,
    transport: T,
}

impl StrapiClient<ReqwestTransport> {
    /// Create a client using the default reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, transport)
    }

    /// Create a client configured from `STRAPI_URL` and `STRAPI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> StrapiClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        Ok(StrapiClient {
            config,
            base_url,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Read one resource by its `documentId`.
    pub async fn find_one(&self, collection: &str, id: &str) -> Result<ApiResponse<Document>> {
        let url = self.url(&[collection, id])?;
        let response = self.execute(Method::Get, url, None).await?;
        decode(response)
    }

    /// Read every resource of `collection` matching `filters`.
    ///
    /// No match is a successful, empty result.
    pub async fn find_all(
        &self,
        collection: &str,
        filters: Option<&FilterParams>,
    ) -> Result<ApiResponse<Vec<Document>>> {
        let mut url = self.url(&[collection])?;
        if let Some(filters) = filters {
            let pairs = filters.query_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }
        let response = self.execute(Method::Get, url, None).await?;
        decode(response)
    }

    /// Create a resource. The service answers 201 with the new `documentId`.
    pub async fn create(&self, collection: &str, payload: &Payload) -> Result<ApiResponse<Document>> {
        let url = self.url(&[collection])?;
        let body = serde_json::to_value(payload)?;
        let response = self.execute(Method::Post, url, Some(body)).await?;
        decode(response)
    }

    /// Update the attributes present in `payload`; the rest keep their values.
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        payload: &Payload,
    ) -> Result<ApiResponse<Document>> {
        let url = self.url(&[collection, id])?;
        let body = serde_json::to_value(payload)?;
        let response = self.execute(Method::Put, url, Some(body)).await?;
        decode(response)
    }

    /// Delete a resource. The body of the answer, if any, is ignored.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<DeleteResponse> {
        let url = self.url(&[collection, id])?;
        let response = self.execute(Method::Delete, url, None).await?;
        Ok(DeleteResponse {
            status: response.status,
            deleted: response.status == DELETED_STATUS,
        })
    }

    /// Base URL with `segments` appended as escaped path segments.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::InvalidConfig(format!("cannot extend base url '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, body: Option<Value>) -> HttpRequest {
        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key),
            ),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Send one request and turn non-2xx answers into errors.
    async fn execute(&self, method: Method, url: Url, body: Option<Value>) -> Result<HttpResponse> {
        let request = self.request(method, url, body);
        debug!("{} {}", request.method, request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} failed: {}", method, e);
                return Err(e.into());
            }
        };

        if response.is_success() {
            debug!("{} answered {}", method, response.status);
            Ok(response)
        } else {
            warn!("{} answered {}", method, response.status);
            Err(ClientError::from_status(response.status, &response.body))
        }
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<T>> {
    let body: Envelope<T> = serde_json::from_slice(&response.body)?;
    Ok(ApiResponse {
        status: response.status,
        body,
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
