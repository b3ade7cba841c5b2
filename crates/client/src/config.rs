// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! A client needs two values: the service base address (usually ending in
//! `/api`) and an API token. They can be given directly, read from the
//! environment (`STRAPI_URL`, `STRAPI_API_KEY`), or read from a
//! properties-style file such as `.env.local`:
//!
//! ```text
//! # local development server
//! STRAPI_URL=http://localhost:1337/api
//! STRAPI_API_KEY="0123abcd..."
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::env;
use crate::error::{ClientError, Result};

/// File read by [`ClientConfig::discover`] when the environment is incomplete.
pub const LOCAL_ENV_FILE: &str = ".env.local";

/// Base address and API key. Immutable once handed to a client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads `STRAPI_URL` and `STRAPI_API_KEY` from the environment.
    pub fn from_env() -> Result<Self> {
        resolve(&HashMap::new(), env_lookup)
    }

    /// Reads `STRAPI_URL` and `STRAPI_API_KEY` from a properties file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        resolve(&parse_properties(&content), |_| None)
    }

    /// Environment first, then [`LOCAL_ENV_FILE`] in the current directory.
    pub fn discover() -> Result<Self> {
        let dir = std::env::current_dir()?;
        Self::discover_in(&dir)
    }

    /// Like [`discover`](Self::discover), looking for the file in `dir`.
    pub fn discover_in(dir: &Path) -> Result<Self> {
        Self::discover_in_with(dir, None, None)
    }

    /// Like [`discover`](Self::discover), with explicit values that win over
    /// both the environment and the file. Each key is resolved on its own.
    pub fn discover_with(base_url: Option<&str>, api_key: Option<&str>) -> Result<Self> {
        let dir = std::env::current_dir()?;
        Self::discover_in_with(&dir, base_url, api_key)
    }

    pub fn discover_in_with(
        dir: &Path,
        base_url: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self> {
        let path = dir.join(LOCAL_ENV_FILE);
        let file_values = if path.is_file() {
            parse_properties(&fs::read_to_string(&path)?)
        } else {
            HashMap::new()
        };
        resolve(&file_values, overriding(base_url, api_key, env_lookup))
    }

    /// Parses and checks the base address.
    ///
    /// The address must be absolute `http` or `https`; any query string or
    /// fragment is dropped.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.base_url.trim()).map_err(|e| {
            ClientError::InvalidConfig(format!("invalid base url '{}': {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(format!(
                "base url '{}' must be an http or https address",
                self.base_url
            )));
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

fn env_lookup(name: &str) -> Option<String> {
    match name {
        n if n == env::vars::STRAPI_URL => env::strapi_url(),
        n if n == env::vars::STRAPI_API_KEY => env::strapi_api_key(),
        _ => None,
    }
}

/// Lookup answering with `base_url`/`api_key` when given, else with `lookup`.
fn overriding<'a>(
    base_url: Option<&'a str>,
    api_key: Option<&'a str>,
    lookup: impl Fn(&str) -> Option<String> + 'a,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        let explicit = match name {
            n if n == env::vars::STRAPI_URL => base_url,
            n if n == env::vars::STRAPI_API_KEY => api_key,
            _ => None,
        };
        explicit
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .or_else(|| lookup(name))
    }
}

/// Picks each key from `lookup` when set and non-empty, else from `file_values`.
fn resolve(
    file_values: &HashMap<String, String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig> {
    let get = |name: &str| {
        lookup(name)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| file_values.get(name).cloned())
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::InvalidConfig(format!("{name} is not set")))
    };
    Ok(ClientConfig {
        base_url: get(env::vars::STRAPI_URL)?,
        api_key: get(env::vars::STRAPI_API_KEY)?,
    })
}

/// Parses `key=value` (or `key: value`) lines.
///
/// Blank lines and lines starting with `#` or `!` are skipped, a leading
/// `export ` is ignored, and one pair of matching quotes around the value
/// is removed. Later keys win.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some(split) = line.find(|c: char| c == '=' || c == ':') else {
            continue;
        };
        let key = line[..split].trim();
        if key.is_empty() {
            continue;
        }
        let value = unquote(line[split + 1..].trim());
        values.insert(key.to_string(), value.to_string());
    }
    values
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
