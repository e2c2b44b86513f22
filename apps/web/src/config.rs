//! Application configuration loaded from environment variables.

use std::env;

use folio_core::policy::DEFAULT_ADMIN_USER_ID;
use folio_infra::auth::DEFAULT_SECRET;
use folio_infra::{DatabaseConfig, SessionConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub session: SessionConfig,
    pub admin_user_id: i32,
    /// Token of the third-party form-submission service behind `/contact`.
    pub contact_form_token: Option<String>,
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS", 10),
            min_connections: parsed("DB_MIN_CONNECTIONS", 1),
        });

        let secret = env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        if secret == DEFAULT_SECRET {
            let is_production = env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default session secret in production! Set SECRET_KEY environment variable."
                );
            }
        }

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT", 5000),
            database,
            session: SessionConfig {
                secret,
                lifetime_hours: parsed("SESSION_HOURS", 24),
                ..SessionConfig::default()
            },
            admin_user_id: parsed("ADMIN_USER_ID", DEFAULT_ADMIN_USER_ID),
            contact_form_token: env::var("SBFORM").ok().filter(|t| !t.is_empty()),
        }
    }
}
