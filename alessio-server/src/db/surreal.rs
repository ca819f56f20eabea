//! SurrealDB-backed document store
//!
//! Each collection is a schemaless SurrealDB table. Record ids are omitted
//! in every SELECT so documents deserialize as plain JSON.

use async_trait::async_trait;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use super::store::{Document, DocumentStore, Filter, StoreError, StoreResult};

/// Root credentials used when the server requires sign-in
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SurrealStore {
    db: Surreal<Any>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Connect to `url` (`ws://`, `http://`, `mem://`, `rocksdb://`) and select
    /// the namespace and database
    pub async fn connect(
        url: &str,
        namespace: &str,
        database: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Self, surrealdb::Error> {
        let db = any::connect(url).await?;

        if let Some(creds) = credentials {
            db.signin(Root {
                username: &creds.username,
                password: &creds.password,
            })
            .await?;
        }

        db.use_ns(namespace).use_db(database).await?;
        Ok(Self::new(db))
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

/// Build the SELECT for a find; field names must already be identifiers
fn select_query(filter: &Filter, limit: Option<usize>) -> String {
    let mut sql = String::from("SELECT * OMIT id FROM type::table($table)");

    if !filter.is_empty() {
        let clauses: Vec<String> = filter
            .conditions()
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{field} = $p{i}"))
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    sql.push_str(" ORDER BY created_at DESC");
    if limit.is_some() {
        sql.push_str(" LIMIT $limit");
    }
    sql
}

#[async_trait]
impl DocumentStore for SurrealStore {
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<()> {
        self.db
            .query("CREATE type::table($table) CONTENT $data")
            .bind(("table", collection.to_string()))
            .bind(("data", Value::Object(document)))
            .await
            .and_then(|response| response.check())
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> StoreResult<Vec<Document>> {
        filter.check()?;

        let mut query = self
            .db
            .query(select_query(filter, limit))
            .bind(("table", collection.to_string()));
        for (i, (_, value)) in filter.conditions().iter().enumerate() {
            query = query.bind((format!("p{i}"), value.clone()));
        }
        if let Some(limit) = limit {
            query = query.bind(("limit", limit as u64));
        }

        let mut response = query.await.map_err(|e| StoreError::Read(e.to_string()))?;
        let rows: Vec<Value> = response
            .take(0)
            .map_err(|e| StoreError::Read(e.to_string()))?;

        rows.into_iter()
            .map(|row| match row {
                Value::Object(map) => Ok(map),
                other => Err(StoreError::Read(format!(
                    "expected a document, got {other}"
                ))),
            })
            .collect()
    }

    async fn collections(&self) -> StoreResult<Vec<String>> {
        let mut response = self
            .db
            .query("INFO FOR DB")
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;
        let info: Option<Value> = response
            .take(0)
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let mut names: Vec<String> = info
            .as_ref()
            .and_then(|info| info.get("tables"))
            .and_then(Value::as_object)
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_without_filter() {
        assert_eq!(
            select_query(&Filter::new(), None),
            "SELECT * OMIT id FROM type::table($table) ORDER BY created_at DESC"
        );
    }

    #[test]
    fn test_select_with_filter_and_limit() {
        let filter = Filter::new().eq("featured", true).eq("category", "Pizza");
        assert_eq!(
            select_query(&filter, Some(8)),
            "SELECT * OMIT id FROM type::table($table) \
             WHERE featured = $p0 AND category = $p1 \
             ORDER BY created_at DESC LIMIT $limit"
        );
    }
}
