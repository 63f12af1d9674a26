//! User registry entry-point: wires the in-memory store, lifecycle service,
//! REST endpoints and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};
use user_registry::domain::UserLifecycleService;
use user_registry::inbound::http::health::HealthState;
use user_registry::inbound::http::state::HttpState;
use user_registry::outbound::persistence::InMemoryUserStore;

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let store = Arc::new(InMemoryUserStore::new());
    let users = UserLifecycleService::new(store);
    let http_state = HttpState::new(Arc::new(users));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, &settings)?;
    server.await
}
