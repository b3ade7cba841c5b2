// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns `--eq FIELD=VALUE` arguments into filter predicates.
//!
//! One condition is sent as a bare `equals`; several are wrapped in `and`,
//! or in `or` when `--any` is given. Values are always sent as strings,
//! which is how they travel in the query string anyway.

use strapi::{and, as_filter_params, equals, or, FilterParams, Predicate};

/// Parse one `FIELD=VALUE` condition. Splits on the first `=`, so values
/// may contain `=` themselves.
pub fn parse_eq(s: &str) -> Result<(String, String), String> {
    let Some((field, value)) = s.split_once('=') else {
        return Err(format!("expected FIELD=VALUE, got '{}'", s));
    };
    let field = field.trim();
    if field.is_empty() {
        return Err("field name cannot be empty".to_string());
    }
    Ok((field.to_string(), value.to_string()))
}

/// Combine conditions into one predicate, or `None` when there are none.
pub fn build_predicate(conditions: &[(String, String)], any: bool) -> Option<Predicate> {
    let mut leaves: Vec<Predicate> = conditions
        .iter()
        .map(|(field, value)| equals(field.as_str(), value.as_str()))
        .collect();

    match leaves.len() {
        0 => None,
        1 => leaves.pop(),
        _ if any => Some(or(leaves)),
        _ => Some(and(leaves)),
    }
}

pub fn build_filter_params(conditions: &[(String, String)], any: bool) -> Option<FilterParams> {
    build_predicate(conditions, any).map(as_filter_params)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
