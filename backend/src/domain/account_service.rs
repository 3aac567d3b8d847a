//! Account domain service.
//!
//! Implements the [`LoginService`] and [`UserProfileQuery`] driving ports on
//! top of a [`UserRepository`] and a [`PasswordHasher`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    LoginService, UserPersistenceError, UserProfileQuery, UserRepository,
};
use crate::domain::{EmailAddress, Error, LoginCredentials, PasswordHasher, User, UserId};

/// Message shared by every failed login so callers cannot probe for accounts.
const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Account service implementing login and profile ports.
#[derive(Clone)]
pub struct AccountService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> AccountService<R, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R, H> LoginService for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Ok(email) = EmailAddress::new(credentials.email()) else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        let Some(record) = self
            .users
            .find_credentials_by_email(&email)
            .await
            .map_err(map_user_error)?
        else {
            debug!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), &record.password_hash)
            .map_err(|err| {
                warn!(user_id = %record.user.id(), error = %err, "stored password digest unusable");
                Error::internal(format!("password verification failed: {err}"))
            })?;
        if !verified {
            debug!(user_id = %record.user.id(), "login rejected: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        Ok(record.user.id())
    }
}

#[async_trait]
impl<R, H> UserProfileQuery for AccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn current_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "session refers to a missing user");
                Error::unauthorized("login required")
            })
    }
}
