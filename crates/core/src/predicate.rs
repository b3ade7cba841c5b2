// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter predicates for Strapi collection queries.
//!
//! Predicates mirror the service's own filter vocabulary. A leaf compares
//! one attribute against a scalar, and composites join any number of
//! predicates:
//!
//! ```text
//! equals("name", "logan")                  { "name": { "$eq": "logan" } }
//! and([equals("first", "logan"),           { "$and": [ { "first": { "$eq": "logan" } },
//!      equals("last", "droid")])                       { "last":  { "$eq": "droid" } } ] }
//! or([...])                                { "$or": [ ... ] }
//! ```
//!
//! Nothing here checks field names or simplifies expressions. A filter
//! that can never match (two different `$eq` values for one field under
//! `$and`) is sent as-is and the service answers with an empty page.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Operator key for attribute equality.
pub const EQ: &str = "$eq";
/// Operator key for conjunction.
pub const AND: &str = "$and";
/// Operator key for disjunction.
pub const OR: &str = "$or";

/// A finite `f64`. NaN and infinities have no encoding in either JSON or
/// the query string, so they are rejected on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(f64);

impl FiniteF64 {
    /// Wraps `value`, failing for NaN or infinite inputs.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(FiniteF64(value))
        } else {
            Err(Error::NonFiniteNumber(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// A value an attribute can be compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(FiniteF64),
    Bool(bool),
}

impl Scalar {
    /// JSON form of the value, as it appears inside `{ "$eq": ... }`.
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::String(s) => Value::String(s.clone()),
            Scalar::Integer(n) => Value::from(*n),
            Scalar::Float(f) => Value::from(f.get()),
            Scalar::Bool(b) => Value::Bool(*b),
        }
    }

    /// Text form of the value, as it appears on the right of `=` in a query string.
    pub fn to_query_value(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => f.get().to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Scalar::String(s.clone())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<FiniteF64> for Scalar {
    fn from(f: FiniteF64) -> Self {
        Scalar::Float(f)
    }
}

impl TryFrom<f64> for Scalar {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        FiniteF64::new(value).map(Scalar::Float)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Integer(n) => serializer.serialize_i64(*n),
            Scalar::Float(f) => serializer.serialize_f64(f.get()),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// A filter condition evaluated by the service.
///
/// Composite variants own their children; building a predicate never
/// mutates its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `{ field: { "$eq": value } }`
    Equals { field: String, value: Scalar },
    /// `{ "$and": [...] }`
    And(Vec<Predicate>),
    /// `{ "$or": [...] }`
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Native JSON form of the predicate.
    pub fn to_json(&self) -> Value {
        match self {
            Predicate::Equals { field, value } => {
                let mut op = Map::new();
                op.insert(EQ.to_string(), value.to_json());
                let mut out = Map::new();
                out.insert(field.clone(), Value::Object(op));
                Value::Object(out)
            }
            Predicate::And(children) => composite_json(AND, children),
            Predicate::Or(children) => composite_json(OR, children),
        }
    }
}

fn composite_json(key: &str, children: &[Predicate]) -> Value {
    let mut out = Map::new();
    out.insert(
        key.to_string(),
        Value::Array(children.iter().map(Predicate::to_json).collect()),
    );
    Value::Object(out)
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Predicate::Equals { field, value } => {
                map.serialize_entry(field, &EqOp(value))?;
            }
            Predicate::And(children) => map.serialize_entry(AND, children)?,
            Predicate::Or(children) => map.serialize_entry(OR, children)?,
        }
        map.end()
    }
}

struct EqOp<'a>(&'a Scalar);

impl Serialize for EqOp<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(EQ, self.0)?;
        map.end()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// Equality predicate: `{ field: { "$eq": value } }`.
///
/// Any field name is kept verbatim in the JSON form. The query string has
/// no escape for `[` or `]` inside a bracket segment, so a field name
/// containing either is read back by the service as a different path.
///
/// ```
/// use strapi_core::equals;
/// let p = equals("name", "logan");
/// assert_eq!(p.to_string(), r#"{"name":{"$eq":"logan"}}"#);
/// ```
pub fn equals(field: impl Into<String>, value: impl Into<Scalar>) -> Predicate {
    Predicate::Equals {
        field: field.into(),
        value: value.into(),
    }
}

/// Conjunction of `predicates`, kept in argument order.
///
/// Zero or one child is allowed; the service decides what that means.
pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::And(predicates.into_iter().collect())
}

/// Disjunction of `predicates`, kept in argument order.
pub fn or(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::Or(predicates.into_iter().collect())
}

/// Request-parameter fragment carrying a predicate: `{ params: { filters: p } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterParams {
    pub params: FilterQuery,
}

/// Inner `{ filters: p }` object of [`FilterParams`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterQuery {
    pub filters: Predicate,
}

impl FilterParams {
    pub fn filters(&self) -> &Predicate {
        &self.params.filters
    }
}

/// Wraps `predicate` as the parameter fragment accepted by `find_all`.
pub fn as_filter_params(predicate: Predicate) -> FilterParams {
    FilterParams {
        params: FilterQuery { filters: predicate },
    }
}

impl From<Predicate> for FilterParams {
    fn from(predicate: Predicate) -> Self {
        as_filter_params(predicate)
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
