//! Application state - shared across all handlers.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};

use folio_core::AccessPolicy;
use folio_core::ports::{
    CommentRepository, PasswordService, PostRepository, SessionService, UserRepository,
};
use folio_infra::database::{self, DatabaseConfig};
use folio_infra::{
    Argon2PasswordService, InMemoryCommentRepository, InMemoryPostRepository,
    InMemoryUserRepository, JwtSessionService, SeaOrmCommentRepository, SeaOrmPostRepository,
    SeaOrmUserRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionService>,
    pub policy: AccessPolicy,
    pub contact_form_token: Option<String>,
}

/// The three repositories, from one backend.
pub struct Stores {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
        }
    }

    /// Connect, bring the schema up to date and wrap the pool.
    pub async fn database(config: &DatabaseConfig) -> Result<Self, migration::DbErr> {
        let conn = database::connect(config).await?;
        Migrator::up(&conn, None).await?;
        tracing::info!("Database schema is up to date");

        Ok(Self {
            users: Arc::new(SeaOrmUserRepository::new(conn.clone())),
            posts: Arc::new(SeaOrmPostRepository::new(conn.clone())),
            comments: Arc::new(SeaOrmCommentRepository::new(conn)),
        })
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let stores = match &config.database {
            Some(db_config) => match Stores::database(db_config).await {
                Ok(stores) => stores,
                Err(e) => {
                    tracing::error!(
                        "Failed to prepare database: {}. Using in-memory fallback.",
                        e
                    );
                    Stores::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Stores::in_memory()
            }
        };

        let state = Self::from_parts(
            stores,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtSessionService::new(config.session.clone())),
            AccessPolicy::new(config.admin_user_id),
            config.contact_form_token.clone(),
        );

        tracing::info!(
            admin_user_id = config.admin_user_id,
            "Application state initialized"
        );
        state
    }

    pub fn from_parts(
        stores: Stores,
        passwords: Arc<dyn PasswordService>,
        sessions: Arc<dyn SessionService>,
        policy: AccessPolicy,
        contact_form_token: Option<String>,
    ) -> Self {
        Self {
            users: stores.users,
            posts: stores.posts,
            comments: stores.comments,
            passwords,
            sessions,
            policy,
            contact_form_token,
        }
    }
}
