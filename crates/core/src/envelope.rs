// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response bodies.
//!
//! Every body the service sends or accepts is wrapped in a `data` object:
//! single resources as `{ "data": { "documentId": ..., ... } }`, collections
//! as `{ "data": [ ... ] }`. The client passes these through unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Attribute name of the server-assigned resource identifier.
pub const DOCUMENT_ID: &str = "documentId";

/// Response body wrapper: `{ data, meta? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Pagination and other service metadata, returned on collection reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// One resource as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "documentId")]
    pub document_id: String,
    /// Every other field of the resource, including `id` and timestamps.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Document {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// String attribute, or `None` if absent or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Deserializes the whole document, identifier included, into `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        let mut map = self.attributes;
        map.insert(DOCUMENT_ID.to_string(), Value::String(self.document_id));
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

/// Write body for `create` and `update`: `{ "data": attributes }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub data: Map<String, Value>,
}

impl Payload {
    pub fn new(data: Map<String, Value>) -> Self {
        Payload { data }
    }

    /// Builds a payload from any value serializing to a JSON object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        Self::from_json(serde_json::to_value(value)?)
    }

    /// Builds a payload from a JSON object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Payload { data }),
            other => Err(Error::PayloadNotObject(json_kind(&other))),
        }
    }

    /// Adds or replaces one attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
