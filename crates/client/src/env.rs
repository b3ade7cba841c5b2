// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

/// Environment variable names, shared with `.env.local` keys.
pub mod vars {
    pub const STRAPI_URL: &str = "STRAPI_URL";
    pub const STRAPI_API_KEY: &str = "STRAPI_API_KEY";
}

/// Returns the value of `STRAPI_URL` if set and non-empty.
pub fn strapi_url() -> Option<String> {
    non_empty(vars::STRAPI_URL)
}

/// Returns the value of `STRAPI_API_KEY` if set and non-empty.
pub fn strapi_api_key() -> Option<String> {
    non_empty(vars::STRAPI_API_KEY)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
