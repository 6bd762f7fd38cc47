//! Main entry point for the backend server.
//!
//! Initializes logging, resolves the configuration, starts the lobby and match
//! registry actors, and launches the HTTP server with the WebSocket endpoint.

use actix_web::{web, App, HttpServer};
use lightcycle::config::server::ServerConfig;
use lightcycle::server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    log::info!("Listening on {}:{}", config.host, config.port);

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::start(&config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(server::router::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
