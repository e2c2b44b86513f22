//! Schema tool for the Folio tables.
//!
//! `migration up` / `migration down` / `migration status` against
//! `DATABASE_URL`. The web server also runs pending migrations on start.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::run_cli(migration::Migrator).await;
}
