// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use thiserror::Error;

use crate::transport::TransportError;

/// All possible errors returned by the Strapi client.
///
/// Transport failures and error statuses are kept apart: the first means
/// no answer was received, the second means the service answered and said no.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Any non-2xx answer, 4xx and 5xx alike.
    #[error("request failed with status {status} ({name}): {message}")]
    Status {
        status: u16,
        name: String,
        message: String,
        /// Raw response body, lossily decoded.
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("config error: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] strapi_core::Error),
}

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Builds a [`ClientError::Status`] from an error response.
    ///
    /// Strapi error bodies look like
    /// `{ "data": null, "error": { "status", "name", "message", "details" } }`;
    /// `name` and `message` are taken from there when present, otherwise
    /// from the status line.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body).into_owned();
        let error = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").cloned());
        let field = |key: &str| {
            error
                .as_ref()
                .and_then(|e| e.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status");

        ClientError::Status {
            status,
            name: field("name").unwrap_or_else(|| reason.replace(' ', "")),
            message: field("message").unwrap_or_else(|| reason.to_string()),
            body: text,
        }
    }

    /// HTTP status of an error response, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for 4xx responses.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// True for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
