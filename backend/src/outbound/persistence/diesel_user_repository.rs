//! PostgreSQL-backed `UserRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserCredentialsRecord, UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, PasswordHash, User, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{CredentialsRowError, UserCredentialsRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed user reader.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::Constraint(message) | DieselFailure::Query(message) => {
            UserPersistenceError::query(message)
        }
    }
}

fn credentials_from_row(
    row: UserCredentialsRow,
) -> Result<UserCredentialsRecord, CredentialsRowError> {
    Ok(UserCredentialsRecord {
        user: User::try_from(row.user)?,
        password_hash: PasswordHash::new(row.password_hash)?,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::try_from)
            .transpose()
            .map_err(|err| UserPersistenceError::query(format!("invalid user row: {err}")))
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentialsRecord>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserCredentialsRow::as_select())
            .first::<UserCredentialsRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(credentials_from_row)
            .transpose()
            .map_err(|err| UserPersistenceError::query(format!("invalid user row: {err}")))
    }
}
