//! Reservation Repository

use super::{BaseRepository, RepoResult};
use crate::db::Gateway;
use shared::models::Reservation;

/// Reservations are write-only through the API
#[derive(Clone, Debug)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            base: BaseRepository::new(gateway),
        }
    }

    pub async fn create(&self, reservation: &Reservation) -> RepoResult<()> {
        self.base.create(reservation).await
    }
}
