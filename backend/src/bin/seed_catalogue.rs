//! Reset the catalogue to fifty generated books and the sample account.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::sync::Arc;

use bookshelf::BackendSettings;
use bookshelf::domain::{BcryptPasswordHasher, CatalogueSeeder};
use bookshelf::outbound::persistence::{
    DbPool, DieselSeedRepository, PoolConfig, run_pending_migrations,
};
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use sample_data::FakerValues;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BackendSettings::load().wrap_err("failed to load settings")?;
    let database_url = settings
        .database_url()
        .ok_or_else(|| eyre!("DATABASE_URL must be set to seed the catalogue"))?;

    run_pending_migrations(&database_url)
        .await
        .wrap_err("failed to apply database migrations")?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .wrap_err("failed to create database pool")?;

    let mut seeder = CatalogueSeeder::new(
        Arc::new(DieselSeedRepository::new(pool)),
        FakerValues::random(),
        BcryptPasswordHasher::default(),
    );
    let outcome = seeder.seed().await.wrap_err("seeding failed; nothing was changed")?;
    info!(books = outcome.books, users = outcome.users, "seed complete");
    Ok(())
}
