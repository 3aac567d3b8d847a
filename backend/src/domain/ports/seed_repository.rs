//! Port for atomically replacing the sample catalogue.

use async_trait::async_trait;

use crate::domain::{NewBook, NewUser};

use super::define_port_error;

define_port_error! {
    /// Errors raised while replacing the catalogue.
    pub enum SeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "seed repository connection failed: {message}",
        /// A uniqueness or other constraint rejected the data.
        Constraint { message: String } => "seed rejected by constraint: {message}",
        /// Statement failed during execution; the transaction was rolled back.
        Query { message: String } => "seed repository query failed: {message}",
    }
}

/// Rows to write after clearing the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedRequest {
    pub books: Vec<NewBook>,
    pub users: Vec<NewUser>,
}

/// Rows written by a successful replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub books: usize,
    pub users: usize,
}

/// Destructive writer used by the catalogue seeder.
///
/// Implementations clear every book and user row, reset identities, and
/// insert the request in a single transaction. On error nothing changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    async fn replace_catalogue(&self, request: SeedRequest) -> Result<SeedCounts, SeedRepositoryError>;
}
