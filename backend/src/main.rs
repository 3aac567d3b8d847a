//! Backend entry-point: loads settings, prepares the database, and serves the API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::BackendSettings;
use bookshelf::inbound::http::health::HealthState;
use bookshelf::inbound::http::session_config::{BuildMode, session_settings_from_env};
use bookshelf::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BackendSettings::load().wrap_err("failed to load backend settings")?;
    let session =
        session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
            .wrap_err("invalid session configuration")?;

    let mut config = ServerConfig::new(session, settings.bind_addr());
    match settings.database_url() {
        Some(database_url) => {
            run_pending_migrations(&database_url)
                .await
                .wrap_err("failed to apply database migrations")?;
            let pool_config =
                PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to create database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; serving fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {}", settings.bind_addr()))?;
    health_state.mark_ready();
    info!(bind_addr = %settings.bind_addr(), "server started");

    server.await.wrap_err("server terminated with an error")
}
