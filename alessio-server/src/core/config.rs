use crate::db::Credentials;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 8000 | HTTP port |
/// | DATABASE_URL | - | store connection string |
/// | DATABASE_NAME | - | database name |
/// | DATABASE_NAMESPACE | alessio | SurrealDB namespace |
/// | DATABASE_USER | - | root user |
/// | DATABASE_PASSWORD | - | root password |
/// | DATABASE_CONNECT_TIMEOUT_MS | 5000 | startup connect timeout |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | log level |
/// | LOG_DIR | - | directory for daily log files |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=ws://localhost:8001 DATABASE_NAME=alessio PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Unset means the server runs without a database
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub database_namespace: String,
    pub database_user: Option<String>,
    pub database_password: Option<String>,
    pub database_connect_timeout_ms: u64,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            database_namespace: non_empty_var("DATABASE_NAMESPACE")
                .unwrap_or(defaults.database_namespace),
            database_user: non_empty_var("DATABASE_USER"),
            database_password: non_empty_var("DATABASE_PASSWORD"),
            database_connect_timeout_ms: std::env::var("DATABASE_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.database_connect_timeout_ms),
            environment: non_empty_var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: non_empty_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: non_empty_var("LOG_DIR"),
        }
    }

    /// Root credentials, when both user and password are set
    pub fn database_credentials(&self) -> Option<Credentials> {
        match (&self.database_user, &self.database_password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8000,
            database_url: None,
            database_name: None,
            database_namespace: "alessio".into(),
            database_user: None,
            database_password: None,
            database_connect_timeout_ms: 5000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
