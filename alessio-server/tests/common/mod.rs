//! Test helpers: an in-memory fake store and oneshot request helpers

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alessio_server::api::build_app;
use alessio_server::db::{Document, DocumentStore, Filter, Gateway, StoreError, StoreResult};
use alessio_server::{Config, ServerState};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// In-memory store that records every call and can be told to fail
#[derive(Default)]
pub struct FakeStore {
    docs: Mutex<Vec<(String, Document)>>,
    calls: Mutex<Vec<String>>,
    fail_reads: bool,
    fail_writes: bool,
    collections_error: Option<String>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_collections(message: &str) -> Self {
        Self {
            collections_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Seed a document as if it had been inserted out-of-band
    pub fn seed(&self, collection: &str, document: Value) {
        let Value::Object(map) = document else {
            panic!("seed documents must be objects");
        };
        self.docs
            .lock()
            .unwrap()
            .push((collection.to_string(), map));
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.docs
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, d)| d.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()> {
        self.record(format!("insert {collection}"));
        if self.fail_writes {
            return Err(StoreError::Write("disk full".into()));
        }
        self.docs
            .lock()
            .unwrap()
            .push((collection.to_string(), document));
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>> {
        self.record(format!("find {collection}"));
        if self.fail_reads {
            return Err(StoreError::Read("connection reset".into()));
        }
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .rev()
            .filter(|(c, d)| c == collection && filter.matches(d))
            .take(limit.unwrap_or(usize::MAX))
            .map(|(_, d)| d.clone())
            .collect())
    }

    async fn collections(&self) -> StoreResult<Vec<String>> {
        self.record("collections".into());
        if let Some(message) = &self.collections_error {
            return Err(StoreError::Read(message.clone()));
        }
        let mut names: Vec<String> = self
            .docs
            .lock()
            .unwrap()
            .iter()
            .map(|(c, _)| c.clone())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}

/// App backed by `store`
pub fn app_with(store: Arc<FakeStore>) -> Router {
    app_for(Gateway::new(store), Config::default())
}

/// App without any store
pub fn degraded_app() -> Router {
    app_for(Gateway::unavailable(), Config::default())
}

pub fn app_for(gateway: Gateway, config: Config) -> Router {
    build_app().with_state(ServerState::new(config, gateway))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let response = send(app, request).await;
    let status = response.status();
    (status, json_body(response).await)
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    let response = send(app, request).await;
    let status = response.status();
    (status, json_body(response).await)
}
