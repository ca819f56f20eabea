use crate::core::Config;
use crate::db::repository::{
    MenuItemRepository, NewsletterRepository, ReservationRepository, ReviewRepository,
};
use crate::db::{DbService, Gateway};

/// Server state shared by every request handler
///
/// Cloning is cheap: the gateway holds the store behind an `Arc`, and the
/// store handle never changes after startup.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | configuration (immutable) |
/// | gateway | document store access, possibly unavailable |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub gateway: Gateway,
}

impl ServerState {
    /// Build state around an existing gateway
    ///
    /// Tests use this to inject a fake store.
    pub fn new(config: Config, gateway: Gateway) -> Self {
        Self { config, gateway }
    }

    /// Connect to the database named in `config`
    ///
    /// Never fails: without a database the gateway is unavailable and the
    /// routes serve their fallback responses.
    pub async fn initialize(config: &Config) -> Self {
        let gateway = DbService::connect(config).await;
        Self::new(config.clone(), gateway)
    }

    pub fn menu_items(&self) -> MenuItemRepository {
        MenuItemRepository::new(self.gateway.clone())
    }

    pub fn reviews(&self) -> ReviewRepository {
        ReviewRepository::new(self.gateway.clone())
    }

    pub fn reservations(&self) -> ReservationRepository {
        ReservationRepository::new(self.gateway.clone())
    }

    pub fn newsletter(&self) -> NewsletterRepository {
        NewsletterRepository::new(self.gateway.clone())
    }
}
