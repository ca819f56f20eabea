//! Review Repository

use super::{BaseRepository, RepoResult};
use crate::db::{Filter, Gateway};
use shared::models::Review;

#[derive(Clone, Debug)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            base: BaseRepository::new(gateway),
        }
    }

    /// Find the most recent reviews, newest first
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Review>> {
        self.base.find(&Filter::new(), Some(limit)).await
    }

    pub async fn create(&self, review: &Review) -> RepoResult<()> {
        self.base.create(review).await
    }
}
