// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! strapi - A small async client for Strapi's REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ StrapiClient │────►│  Transport  │────►│   Strapi    │
//! │  (CRUD ops)  │◄────│   (trait)   │◄────│   service   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        ▲
//!        │ FilterParams
//! ┌──────────────┐
//! │  predicates  │  equals / and / or  (strapi-core)
//! └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use strapi::{and, as_filter_params, equals, ClientConfig, Payload, StrapiClient};
//!
//! let client = StrapiClient::new(ClientConfig::new("http://localhost:1337/api", key))?;
//!
//! let filters = as_filter_params(equals("name", "David Doe"));
//! let authors = client.find_all("authors", Some(&filters)).await?;
//!
//! let created = client
//!     .create("authors", &Payload::default().with("name", "X").with("email", "x@example.com"))
//!     .await?;
//! let removed = client.delete("authors", &created.data().document_id).await?;
//! assert!(removed.deleted);
//! ```

mod client;
pub mod config;
mod env;
pub mod error;
pub mod transport;

pub use client::{ApiResponse, DeleteResponse, StrapiClient, DELETED_STATUS};
pub use config::{ClientConfig, LOCAL_ENV_FILE};
pub use error::{ClientError, Result};
pub use transport::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError,
    TransportResult,
};

pub use strapi_core::{
    and, as_filter_params, equals, or, Document, Envelope, FilterParams, Payload, Predicate,
    Scalar,
};

#[cfg(test)]
mod test_helpers;
