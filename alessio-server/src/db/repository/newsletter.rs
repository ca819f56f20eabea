//! Newsletter Repository

use super::{BaseRepository, RepoResult};
use crate::db::Gateway;
use shared::models::Newsletter;

#[derive(Clone, Debug)]
pub struct NewsletterRepository {
    base: BaseRepository,
}

impl NewsletterRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            base: BaseRepository::new(gateway),
        }
    }

    pub async fn create(&self, signup: &Newsletter) -> RepoResult<()> {
        self.base.create(signup).await
    }
}
