//! PostgreSQL-backed catalogue replacement.
//!
//! Truncates both tables, restarting their identity sequences, and inserts
//! the new rows inside one transaction. Any failure rolls the whole run back.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{SeedCounts, SeedRepository, SeedRepositoryError, SeedRequest};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{NewBookRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{books, users};

/// Diesel-backed destructive writer used by the seeder binary.
#[derive(Clone)]
pub struct DieselSeedRepository {
    pool: DbPool,
}

impl DieselSeedRepository {
    /// Create a seed repository over the given pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use bookshelf::outbound::persistence::{DbPool, DieselSeedRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookshelf")).await?;
    /// let repository = DieselSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SeedRepositoryError {
    SeedRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> SeedRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => SeedRepositoryError::connection(message),
        DieselFailure::Constraint(message) => SeedRepositoryError::constraint(message),
        DieselFailure::Query(message) => SeedRepositoryError::query(message),
    }
}

#[async_trait]
impl SeedRepository for DieselSeedRepository {
    async fn replace_catalogue(
        &self,
        request: SeedRequest,
    ) -> Result<SeedCounts, SeedRepositoryError> {
        let book_rows: Vec<NewBookRow<'_>> = request
            .books
            .iter()
            .map(|book| NewBookRow {
                title: book.title.as_ref(),
                author: book.author.as_ref(),
            })
            .collect();
        let user_rows: Vec<NewUserRow<'_>> = request
            .users
            .iter()
            .map(|user| NewUserRow {
                name: user.name.as_ref(),
                email: user.email.as_ref(),
                password_hash: user.password_hash.as_ref(),
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                diesel::sql_query("TRUNCATE TABLE books RESTART IDENTITY")
                    .execute(conn)
                    .await?;
                let books = diesel::insert_into(books::table)
                    .values(&book_rows)
                    .execute(conn)
                    .await?;

                diesel::sql_query("TRUNCATE TABLE users RESTART IDENTITY")
                    .execute(conn)
                    .await?;
                let users = diesel::insert_into(users::table)
                    .values(&user_rows)
                    .execute(conn)
                    .await?;

                Ok::<_, diesel::result::Error>(SeedCounts { books, users })
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
