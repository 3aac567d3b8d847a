//! Driving port for listing the book catalogue.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{AuthorName, Book, BookId, BookTitle, Error, UserId};

/// Domain use-case port for reading books on behalf of a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksQuery: Send + Sync {
    /// Every book, ordered by id ascending.
    ///
    /// The caller is passed for auditing only; rows are not filtered per user.
    async fn list_books(&self, caller: &UserId) -> Result<Vec<Book>, Error>;
}

/// Static catalogue used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBooksQuery;

const FIXTURE_BOOKS: [(&str, &str); 2] = [
    ("Voluptatem quia et aut.", "Jayne Sporer"),
    ("Eius ut dolorem quos sed.", "Maximillian Ward"),
];

#[async_trait]
impl BooksQuery for FixtureBooksQuery {
    async fn list_books(&self, _caller: &UserId) -> Result<Vec<Book>, Error> {
        let created_at = Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| Error::internal("invalid fixture timestamp"))?;
        (1_i64..)
            .zip(FIXTURE_BOOKS)
            .map(|(id, (title, author))| {
                let id = BookId::new(id).map_err(|err| Error::internal(err.to_string()))?;
                let title = BookTitle::new(title).map_err(|err| Error::internal(err.to_string()))?;
                let author =
                    AuthorName::new(author).map_err(|err| Error::internal(err.to_string()))?;
                Ok(Book::new(id, title, author, created_at))
            })
            .collect()
    }
}
