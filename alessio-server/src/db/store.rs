//! Document store abstraction
//!
//! [`DocumentStore`] is the seam between the HTTP layer and the backing
//! database. [`Gateway`] wraps an optional store handle: when the process
//! started without a database every call fails fast with
//! [`StoreError::Unavailable`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use shared::util::now_millis;
use thiserror::Error;

/// A schema-less document as stored and returned
pub type Document = Map<String, Value>;

/// Keys that carry store identifiers and never leave the gateway
const ID_FIELDS: [&str; 2] = ["id", "_id"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("document store is not available")]
    Unavailable,

    #[error("store read failed: {0}")]
    Read(String),

    #[error("store write failed: {0}")]
    Write(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Field equality conditions, all of which must hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Rejects field names that are not plain identifiers
    pub fn check(&self) -> StoreResult<()> {
        match self.conditions.iter().find(|(field, _)| !is_identifier(field)) {
            Some((field, _)) => Err(StoreError::Read(format!(
                "invalid filter field name: {field:?}"
            ))),
            None => Ok(()),
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }
}

/// Backing database for the gateway
///
/// Implementations return documents newest first (by `created_at`) and
/// honour `limit` when given.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()>;

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>>;

    /// Names of the collections that exist in the database
    async fn collections(&self) -> StoreResult<Vec<String>>;
}

/// Process-wide access point to the document store
///
/// Cheap to clone. The store handle is fixed at construction.
#[derive(Clone, Default)]
pub struct Gateway {
    store: Option<Arc<dyn DocumentStore>>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Gateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Gateway without a store; every call fails with `Unavailable`
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> StoreResult<&Arc<dyn DocumentStore>> {
        self.store.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Insert one record, stamping `created_at` and `updated_at`
    pub async fn create_document<T: Serialize>(&self, collection: &str, record: &T) -> StoreResult<()> {
        let store = self.store()?;
        if !is_identifier(collection) {
            return Err(StoreError::Write(format!(
                "invalid collection name: {collection:?}"
            )));
        }

        let mut document = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(StoreError::Write(
                    "document must be a JSON object".to_string(),
                ));
            }
            Err(e) => return Err(StoreError::Write(e.to_string())),
        };
        strip_ids(&mut document);

        let now = now_millis();
        document.insert("created_at".to_string(), Value::from(now));
        document.insert("updated_at".to_string(), Value::from(now));

        store.insert(collection, document).await
    }

    /// Read documents matching `filter`, newest first, at most `limit`
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>> {
        let store = self.store()?;
        if !is_identifier(collection) {
            return Err(StoreError::Read(format!(
                "invalid collection name: {collection:?}"
            )));
        }
        filter.check()?;

        let mut documents = store.find(collection, filter, limit).await?;
        if let Some(limit) = limit {
            documents.truncate(limit);
        }
        documents.iter_mut().for_each(strip_ids);
        Ok(documents)
    }

    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.store()?.collections().await
    }
}

fn strip_ids(document: &mut Document) {
    for key in ID_FIELDS {
        document.remove(key);
    }
}
