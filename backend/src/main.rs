//! Service entry-point: loads settings, initialises logging and runs the
//! HTTP server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use gmail_variants::inbound::http::health::HealthState;
use gmail_variants::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        std::io::Error::other(format!("failed to load server settings: {e}"))
    })?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr))?;
    server.await
}
