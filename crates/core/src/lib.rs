// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! strapi-core: filter predicates and response shapes for Strapi REST clients.
//!
//! This crate has no I/O. It provides the predicate DSL used to build
//! `filters` query parameters, the bracket encoding those filters travel
//! in, and the `{ data: ... }` envelope types returned by the service.

pub mod envelope;
pub mod error;
pub mod predicate;
pub mod query;

pub use envelope::{Document, Envelope, Payload};
pub use error::{Error, Result};
pub use predicate::{and, as_filter_params, equals, or, FilterParams, Predicate, Scalar};
