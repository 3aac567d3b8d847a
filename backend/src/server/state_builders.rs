//! Builders wiring persistence adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use bookshelf::domain::{AccountService, BcryptPasswordHasher, CatalogueService};
use bookshelf::inbound::http::state::HttpState;
use bookshelf::outbound::persistence::{DbPool, DieselBookRepository, DieselUserRepository};

use super::ServerConfig;

/// Build handler state from Diesel adapters, or fixtures when no pool is set.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => state_from_pool(pool),
        None => HttpState::fixtures(),
    };
    web::Data::new(state)
}

fn state_from_pool(pool: &DbPool) -> HttpState {
    let catalogue = Arc::new(CatalogueService::new(Arc::new(DieselBookRepository::new(
        pool.clone(),
    ))));
    let accounts = Arc::new(AccountService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(BcryptPasswordHasher::default()),
    ));
    HttpState::new(accounts.clone(), catalogue, accounts)
}
