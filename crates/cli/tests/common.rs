// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const API_KEY: &str = "test-key";

/// The binary with connection settings scrubbed from its environment and
/// a working directory without a `.env.local`.
pub fn strapi(workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("strapi");
    cmd.env_remove("STRAPI_URL")
        .env_remove("STRAPI_API_KEY")
        .current_dir(workdir.path());
    cmd
}

/// Like [`strapi`], pointed at `base_url` with [`API_KEY`].
pub fn strapi_at(workdir: &TempDir, base_url: &str) -> Command {
    let mut cmd = strapi(workdir);
    cmd.arg("--url").arg(base_url).arg("--api-key").arg(API_KEY);
    cmd
}
