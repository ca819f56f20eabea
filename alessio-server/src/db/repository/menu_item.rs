//! Menu Item Repository

use super::{BaseRepository, RepoResult};
use crate::db::{Filter, Gateway};
use shared::models::MenuItem;

#[derive(Clone, Debug)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            base: BaseRepository::new(gateway),
        }
    }

    /// Find the whole menu
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        self.base.find(&Filter::new(), None).await
    }

    /// Find featured items, at most `limit`
    pub async fn find_featured(&self, limit: usize) -> RepoResult<Vec<MenuItem>> {
        self.base
            .find(&Filter::new().eq("featured", true), Some(limit))
            .await
    }

    /// Insert one item; the live menu is seeded out-of-band
    pub async fn create(&self, item: &MenuItem) -> RepoResult<()> {
        self.base.create(item).await
    }
}
