#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]
//! Backend entry-point: connects the document store and serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{GatewayConfig, MongoGateway};
use backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv_result = dotenv::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    if let Err(e) = dotenv_result {
        info!(error = %e, "no .env file loaded");
    }

    let settings = ServerSettings::load_with_fallbacks(std::env::args_os())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let mongo_url = settings
        .mongo_url()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let gateway = MongoGateway::connect(GatewayConfig::new(mongo_url, settings.database()))
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), gateway.clone());
    info!(addr = %config.bind_addr(), "starting HTTP server");
    let server = create_server(health_state.clone(), config)?;

    let outcome = server.await;
    health_state.mark_unhealthy();
    gateway.shutdown().await;
    outcome
}
