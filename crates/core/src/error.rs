// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for strapi-core operations.

use thiserror::Error;

/// All possible errors that can occur in strapi-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("number {0} cannot be used in a filter\n  hint: NaN and infinite values have no query encoding")]
    NonFiniteNumber(f64),

    #[error("payload must be a JSON object, got {0}")]
    PayloadNotObject(&'static str),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for strapi-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
