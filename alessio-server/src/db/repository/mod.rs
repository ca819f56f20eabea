//! Repository Module
//!
//! One typed repository per collection. Documents read back from the store
//! are validated like inbound payloads; a document that fails validation is
//! reported as [`RepoError::Decode`].

pub mod menu_item;
pub mod newsletter;
pub mod reservation;
pub mod review;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use newsletter::NewsletterRepository;
pub use reservation::ReservationRepository;
pub use review::ReviewRepository;

use serde_json::Value;
use shared::models::{Record, ValidationError, validate_record};
use thiserror::Error;

use super::store::{Filter, Gateway, StoreError};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stored document is invalid: {0}")]
    Decode(#[from] ValidationError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Typed access to one collection through the gateway
#[derive(Clone, Debug)]
pub struct BaseRepository {
    gateway: Gateway,
}

impl BaseRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Read and decode records of `T`, newest first
    pub async fn find<T: Record>(&self, filter: &Filter, limit: Option<usize>) -> RepoResult<Vec<T>> {
        let documents = self
            .gateway
            .get_documents(T::KIND.collection(), filter, limit)
            .await?;

        let records = documents
            .into_iter()
            .map(|doc| validate_record::<T>(Value::Object(doc)))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(records)
    }

    pub async fn create<T: Record>(&self, record: &T) -> RepoResult<()> {
        self.gateway
            .create_document(T::KIND.collection(), record)
            .await?;
        Ok(())
    }
}
