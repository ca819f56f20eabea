//! Alessio restaurant API server
//!
//! Public content (menu, reviews) and lead capture (newsletter,
//! reservations, reviews) for the restaurant's marketing site, backed by a
//! document store. Every route keeps answering when the store is down.
//!
//! # Module layout
//!
//! ```text
//! alessio-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── db/            # document store gateway, SurrealDB, repositories
//! ├── api/           # HTTP routes and fallback data
//! ├── middleware/    # access log
//! └── utils/         # logger, validated JSON extractor
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use db::{DocumentStore, Gateway};
pub use shared::AppError;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    _   _               _
   / \ | | ___  ___ ___(_) ___
  / _ \| |/ _ \/ __/ __| |/ _ \
 / ___ \ |  __/\__ \__ \ | (_) |
/_/   \_\_|\___||___/___/_|\___/
"#
    );
}
