//! PostgreSQL-backed `BookRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Book;
use crate::domain::ports::{BookPersistenceError, BookRepository};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::BookRow;
use super::pool::{DbPool, PoolError};
use super::schema::books;

/// Diesel-backed book reader.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookPersistenceError {
    BookPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> BookPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => BookPersistenceError::connection(message),
        DieselFailure::Constraint(message) | DieselFailure::Query(message) => {
            BookPersistenceError::query(message)
        }
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = books::table
            .select(BookRow::as_select())
            .order(books::id.asc())
            .load::<BookRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| {
                Book::try_from(row)
                    .map_err(|err| BookPersistenceError::query(format!("invalid book row: {err}")))
            })
            .collect()
    }
}
