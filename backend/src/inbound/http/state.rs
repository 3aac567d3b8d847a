//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BooksQuery, FixtureBooksQuery, FixtureLoginService, FixtureUserProfileQuery, LoginService,
    UserProfileQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub books: Arc<dyn BooksQuery>,
    pub profile: Arc<dyn UserProfileQuery>,
}

impl HttpState {
    pub fn new(
        login: Arc<dyn LoginService>,
        books: Arc<dyn BooksQuery>,
        profile: Arc<dyn UserProfileQuery>,
    ) -> Self {
        Self {
            login,
            books,
            profile,
        }
    }

    /// State backed by in-memory fixtures, used when no database is configured.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureLoginService),
            Arc::new(FixtureBooksQuery),
            Arc::new(FixtureUserProfileQuery),
        )
    }
}
