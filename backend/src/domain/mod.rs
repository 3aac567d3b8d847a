//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers and the services that implement the driving ports. Types validate
//! on construction and document their invariants in Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Book, User and their newtypes: catalogue and account data.
//! - PasswordHasher / BcryptPasswordHasher: password hashing policy.
//! - CatalogueService, AccountService: driving port implementations.
//! - CatalogueSeeder: one-shot sample data writer.

pub mod account_service;
pub mod auth;
pub mod book;
pub mod catalogue_service;
pub mod error;
pub mod password;
pub mod ports;
pub mod seeder;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::book::{AuthorName, Book, BookId, BookTitle, BookValidationError, NewBook};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode};
#[cfg(test)]
pub use self::password::MockPasswordHasher;
pub use self::password::{BcryptPasswordHasher, PasswordHash, PasswordHashError, PasswordHasher};
pub use self::seeder::{
    CatalogueSeeder, SAMPLE_BOOK_COUNT, SAMPLE_USER_EMAIL, SAMPLE_USER_NAME,
    SAMPLE_USER_PASSWORD, SeedOutcome, SeedingError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserId, UserName, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bookshelf::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
