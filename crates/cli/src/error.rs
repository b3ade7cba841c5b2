// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the command-line front end.
///
/// Argument problems are caught by clap before any of these can occur.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] strapi::ClientError),

    #[error("cannot render output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of a rejected request, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Client(e) => e.status(),
            _ => None,
        }
    }

    /// Follow-up suggestion printed under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        if let Error::Client(e) = self {
            if e.is_transport() {
                return Some("check --url or STRAPI_URL and that the service is running");
            }
        }
        match self.status()? {
            401 | 403 => Some("check the API token in --api-key or STRAPI_API_KEY"),
            404 => Some("check the collection name and documentId"),
            _ => None,
        }
    }
}

/// A convenient Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
