//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod books_query;
mod login_service;
mod seed_repository;
mod user_profile_query;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookPersistenceError, BookRepository};
#[cfg(test)]
pub use books_query::MockBooksQuery;
pub use books_query::{BooksQuery, FixtureBooksQuery};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_USER_ID, FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use seed_repository::MockSeedRepository;
pub use seed_repository::{SeedCounts, SeedRepository, SeedRepositoryError, SeedRequest};
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
pub use user_profile_query::{FixtureUserProfileQuery, UserProfileQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserCredentialsRecord, UserPersistenceError, UserRepository};
