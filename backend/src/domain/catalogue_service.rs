//! Book catalogue domain service.
//!
//! Implements the [`BooksQuery`] driving port on top of a [`BookRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BookPersistenceError, BookRepository, BooksQuery};
use crate::domain::{Book, Error, UserId};

/// Catalogue service implementing the books query port.
#[derive(Clone)]
pub struct CatalogueService<R> {
    books: Arc<R>,
}

impl<R> CatalogueService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(books: Arc<R>) -> Self {
        Self { books }
    }
}

fn map_book_error(error: BookPersistenceError) -> Error {
    match error {
        BookPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("book repository unavailable: {message}"))
        }
        BookPersistenceError::Query { message } => {
            Error::internal(format!("book repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> BooksQuery for CatalogueService<R>
where
    R: BookRepository,
{
    async fn list_books(&self, caller: &UserId) -> Result<Vec<Book>, Error> {
        let books = self.books.list_all().await.map_err(map_book_error)?;
        debug!(user_id = %caller, count = books.len(), "listed catalogue");
        Ok(books)
    }
}
