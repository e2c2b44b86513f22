//! # Folio
//!
//! Entry point of the blog server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod flash;
mod handlers;
mod middleware;
mod render;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::LogFormat;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(LogFormat::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Folio on {}:{}", config.host, config.port);

    let state = AppState::new(&config).await;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
