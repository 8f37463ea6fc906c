//! Backend entry-point: wires the REST endpoints and OpenAPI docs.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use tutordesk::inbound::http::health::HealthState;
use tutordesk::server::{ServerConfig, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

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

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;
    let seed_defaults = env::var("SEED_DEFAULT_TEACHERS").ok().as_deref() == Some("1");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_seeded_defaults(seed_defaults);

    let server = create_server(health_state, config).await?;
    info!(%bind_addr, seed_defaults, "server started");
    server.await
}
