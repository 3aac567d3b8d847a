//! Port abstraction for reading stored books.

use async_trait::async_trait;

use crate::domain::Book;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by book repository adapters.
    pub enum BookPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "book repository connection failed: {message}",
        /// Query failed during execution or returned an unusable row.
        Query { message: String } => "book repository query failed: {message}",
    }
}

/// Read access to the book catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every stored book, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Book>, BookPersistenceError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn errors_render_messages() {
        let err = BookPersistenceError::connection("pool timed out");
        assert_eq!(
            err.to_string(),
            "book repository connection failed: pool timed out"
        );
    }
}
