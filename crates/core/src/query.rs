// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Nested-bracket query encoding for filter predicates.
//!
//! Strapi reads filters from the query string using the `qs` convention,
//! where every level of the JSON tree becomes a bracketed key segment and
//! array members are addressed by index:
//!
//! ```text
//! filters[name][$eq]=David Doe
//! filters[$and][0][name][$eq]=David Doe
//! filters[$and][1][email][$eq]=d@example.com
//! filters[$or][0][$and][0][age][$eq]=30
//! ```
//!
//! Values are left unescaped here; percent-encoding happens when the pairs
//! are appended to a URL. Field names are copied into their segment as-is:
//! a `]` in a field name closes the segment early on the server side.

use crate::predicate::{FilterParams, Predicate, AND, EQ, OR};

/// Top-level query key filters live under.
pub const FILTERS_KEY: &str = "filters";

impl Predicate {
    /// Appends the bracket-encoded pairs for this predicate under `prefix`.
    pub fn encode_into(&self, prefix: &str, pairs: &mut Vec<(String, String)>) {
        match self {
            Predicate::Equals { field, value } => {
                pairs.push((format!("{prefix}[{field}][{EQ}]"), value.to_query_value()));
            }
            Predicate::And(children) => encode_children(&format!("{prefix}[{AND}]"), children, pairs),
            Predicate::Or(children) => encode_children(&format!("{prefix}[{OR}]"), children, pairs),
        }
    }

    /// Bracket-encoded pairs for this predicate rooted at `filters`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        self.encode_into(FILTERS_KEY, &mut pairs);
        pairs
    }
}

// An empty composite yields no pairs, which the service reads as no constraint.
fn encode_children(prefix: &str, children: &[Predicate], pairs: &mut Vec<(String, String)>) {
    for (index, child) in children.iter().enumerate() {
        child.encode_into(&format!("{prefix}[{index}]"), pairs);
    }
}

impl FilterParams {
    /// Query pairs to merge into an outgoing request.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.filters().query_pairs()
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
