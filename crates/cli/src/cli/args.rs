// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use std::path::Path;

use clap::Args;
use strapi::{ClientConfig, FilterParams};

use crate::filter::{build_filter_params, parse_eq};

/// Where the service lives and how to authenticate.
///
/// Each value is taken from its flag, else the environment, else
/// `.env.local` in the working directory.
#[derive(Args, Clone, Default)]
pub struct ConnectionArgs {
    /// Base URL of the REST API, e.g. http://localhost:1337/api
    #[arg(long, global = true, env = "STRAPI_URL")]
    pub url: Option<String>,

    /// API token sent as a bearer credential
    #[arg(long, global = true, env = "STRAPI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl ConnectionArgs {
    pub fn resolve(&self) -> strapi::Result<ClientConfig> {
        ClientConfig::discover_with(self.url.as_deref(), self.api_key.as_deref())
    }

    /// Like [`resolve`](Self::resolve), reading `.env.local` from `dir`.
    pub fn resolve_in(&self, dir: &Path) -> strapi::Result<ClientConfig> {
        ClientConfig::discover_in_with(dir, self.url.as_deref(), self.api_key.as_deref())
    }
}

/// `--eq` conditions for `find-all`.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Match resources whose FIELD equals VALUE (repeatable)
    #[arg(long = "eq", value_name = "FIELD=VALUE", value_parser = parse_eq)]
    pub eq: Vec<(String, String)>,

    /// Match resources satisfying any --eq condition instead of all
    #[arg(long, requires = "eq")]
    pub any: bool,
}

impl FilterArgs {
    pub fn to_filter_params(&self) -> Option<FilterParams> {
        build_filter_params(&self.eq, self.any)
    }
}
