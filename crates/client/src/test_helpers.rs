// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers: a scripted transport and an in-memory Strapi.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use serde_json::{json, Map, Value};

use crate::client::StrapiClient;
use crate::config::ClientConfig;
use crate::transport::{
    HttpRequest, HttpResponse, Method, Transport, TransportError, TransportResult,
};

pub const FAKE_BASE_URL: &str = "http://strapi.test/api";
pub const FAKE_API_KEY: &str = "test-api-key";

pub fn fake_config() -> ClientConfig {
    ClientConfig::new(FAKE_BASE_URL, FAKE_API_KEY)
}

/// Transport that replays canned answers and records every request.
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a JSON answer.
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, serde_json::to_vec(&body).unwrap())
    }

    /// Queue an answer with an arbitrary body.
    pub fn respond_raw(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, err: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request sent")
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpResponse>> + Send + '_>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Io("no scripted response".into())))
        })
    }
}

pub fn mock_client(transport: MockTransport) -> StrapiClient<MockTransport> {
    StrapiClient::with_transport(fake_config(), transport).unwrap()
}

/// In-memory stand-in for a Strapi service.
///
/// Understands the five CRUD routes under `/api/{collection}`, bearer-key
/// auth, and `filters[...]` queries built from `$eq`, `$and` and `$or`.
pub struct FakeStrapi {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    collections: HashMap<String, Vec<Map<String, Value>>>,
    next_id: u64,
    requests: usize,
    offline: bool,
}

impl FakeStrapi {
    pub fn new() -> Self {
        FakeStrapi {
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Register an empty collection.
    pub fn with_collection(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(name.to_string())
            .or_default();
        self
    }

    /// Refuse every connection, like a stopped server.
    pub fn offline(self) -> Self {
        self.state.lock().unwrap().offline = true;
        self
    }

    /// Insert a resource directly and return its `documentId`.
    pub fn seed(&self, collection: &str, attributes: Value) -> String {
        let mut state = self.state.lock().unwrap();
        let Value::Object(attributes) = attributes else {
            unreachable!("seed attributes must be an object");
        };
        state.insert(collection, attributes)
    }

    pub fn count(&self, collection: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.collections.get(collection).map_or(0, Vec::len)
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests
    }

    fn handle(&self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        let mut state = self.state.lock().unwrap();
        if state.offline {
            return Err(TransportError::Connect("connection refused".into()));
        }
        state.requests += 1;

        let expected = format!("Bearer {FAKE_API_KEY}");
        if request.header("authorization") != Some(expected.as_str()) {
            return Ok(error(401, "UnauthorizedError", "Missing or invalid credentials"));
        }

        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|s| s.map(str::to_string).collect())
            .unwrap_or_default();
        let route: Vec<&str> = segments.iter().skip(1).map(String::as_str).collect();

        let Some(collection) = route.first().copied() else {
            return Ok(error(404, "NotFoundError", "Not Found"));
        };
        if !state.collections.contains_key(collection) {
            return Ok(error(404, "NotFoundError", "Not Found"));
        }

        Ok(match (request.method, route.get(1).copied()) {
            (Method::Get, None) => state.list(collection, request),
            (Method::Post, None) => state.create(collection, request),
            (Method::Get, Some(id)) => state.find(collection, id),
            (Method::Put, Some(id)) => state.update(collection, id, request),
            (Method::Delete, Some(id)) => state.delete(collection, id),
            _ => error(405, "MethodNotAllowedError", "Method Not Allowed"),
        })
    }
}

impl Transport for FakeStrapi {
    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpResponse>> + Send + '_>> {
        Box::pin(async move { self.handle(&request) })
    }
}

pub fn fake_client(service: FakeStrapi) -> StrapiClient<FakeStrapi> {
    StrapiClient::with_transport(fake_config(), service).unwrap()
}

impl FakeState {
    fn insert(&mut self, collection: &str, attributes: Map<String, Value>) -> String {
        self.next_id += 1;
        let document_id = format!("fakedoc{:06}", self.next_id);
        let mut doc = Map::new();
        doc.insert("id".into(), json!(self.next_id));
        doc.insert("documentId".into(), json!(document_id));
        doc.extend(attributes);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        document_id
    }

    fn position(&self, collection: &str, id: &str) -> Option<usize> {
        self.collections
            .get(collection)?
            .iter()
            .position(|doc| doc.get("documentId") == Some(&json!(id)))
    }

    fn list(&self, collection: &str, request: &HttpRequest) -> HttpResponse {
        let filter = parse_filters(request);
        let data: Vec<Value> = self.collections[collection]
            .iter()
            .filter(|doc| matches_filter(&filter, doc))
            .cloned()
            .map(Value::Object)
            .collect();
        let total = data.len();
        ok(
            200,
            json!({
                "data": data,
                "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": total } }
            }),
        )
    }

    fn find(&self, collection: &str, id: &str) -> HttpResponse {
        match self.position(collection, id) {
            Some(i) => ok(
                200,
                json!({ "data": self.collections[collection][i], "meta": {} }),
            ),
            None => error(404, "NotFoundError", "Not Found"),
        }
    }

    fn create(&mut self, collection: &str, request: &HttpRequest) -> HttpResponse {
        let Some(attributes) = payload_data(request) else {
            return error(400, "ValidationError", "Missing \"data\" payload in the request body");
        };
        let id = self.insert(collection, attributes);
        let mut response = self.find(collection, &id);
        response.status = 201;
        response
    }

    fn update(&mut self, collection: &str, id: &str, request: &HttpRequest) -> HttpResponse {
        let Some(attributes) = payload_data(request) else {
            return error(400, "ValidationError", "Missing \"data\" payload in the request body");
        };
        let Some(i) = self.position(collection, id) else {
            return error(404, "NotFoundError", "Not Found");
        };
        if let Some(docs) = self.collections.get_mut(collection) {
            docs[i].extend(attributes);
        }
        self.find(collection, id)
    }

    fn delete(&mut self, collection: &str, id: &str) -> HttpResponse {
        let Some(i) = self.position(collection, id) else {
            return error(404, "NotFoundError", "Not Found");
        };
        if let Some(docs) = self.collections.get_mut(collection) {
            docs.remove(i);
        }
        HttpResponse {
            status: 204,
            body: Vec::new(),
        }
    }
}

fn ok(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

fn error(status: u16, name: &str, message: &str) -> HttpResponse {
    ok(
        status,
        json!({
            "data": null,
            "error": { "status": status, "name": name, "message": message, "details": {} }
        }),
    )
}

fn payload_data(request: &HttpRequest) -> Option<Map<String, Value>> {
    match request.body.as_ref()?.get("data")? {
        Value::Object(data) => Some(data.clone()),
        _ => None,
    }
}

/// Rebuilds the nested filter object from `filters[..][..]=v` pairs.
fn parse_filters(request: &HttpRequest) -> Value {
    let mut root = Value::Object(Map::new());
    for (key, value) in request.url.query_pairs() {
        let Some(path) = bracket_path(&key) else {
            continue;
        };
        let mut node = &mut root;
        for segment in path {
            node = node
                .as_object_mut()
                .unwrap()
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
        }
        *node = Value::String(value.into_owned());
    }
    root
}

fn bracket_path(key: &str) -> Option<Vec<String>> {
    let mut rest = key.strip_prefix("filters")?;
    let mut path = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        path.push(inner[..close].to_string());
        rest = &inner[close + 1..];
    }
    Some(path)
}

/// Every key of an object node must hold; `$and`/`$or` children are keyed by index.
fn matches_filter(node: &Value, doc: &Map<String, Value>) -> bool {
    let Some(clauses) = node.as_object() else {
        return false;
    };
    clauses.iter().all(|(key, value)| match key.as_str() {
        "$and" => children(value).iter().all(|c| matches_filter(c, doc)),
        "$or" => children(value).iter().any(|c| matches_filter(c, doc)),
        field => match value.get("$eq").and_then(Value::as_str) {
            Some(expected) => doc.get(field).map(text).as_deref() == Some(expected),
            None => false,
        },
    })
}

fn children(value: &Value) -> Vec<&Value> {
    let mut indexed: Vec<(usize, &Value)> = value
        .as_object()
        .map(|m| {
            m.iter()
                .filter_map(|(k, v)| k.parse().ok().map(|i| (i, v)))
                .collect()
        })
        .unwrap_or_default();
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, v)| v).collect()
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
