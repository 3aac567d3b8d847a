//! Driving port for user profile queries.
//!
//! Inbound adapters use this port to load the session user's profile without
//! importing persistence details.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, User, UserId, UserName};

use super::login_service::FIXTURE_EMAIL;

/// Domain use-case port for reading the current user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile for the authenticated user.
    ///
    /// A session pointing at a user that no longer exists is unauthorised.
    async fn current_user(&self, user_id: &UserId) -> Result<User, Error>;
}

/// Fixture profile query used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserProfileQuery;

#[async_trait]
impl UserProfileQuery for FixtureUserProfileQuery {
    async fn current_user(&self, user_id: &UserId) -> Result<User, Error> {
        let name = UserName::new("Alex")
            .map_err(|err| Error::internal(format!("invalid fixture name: {err}")))?;
        let email = EmailAddress::new(FIXTURE_EMAIL)
            .map_err(|err| Error::internal(format!("invalid fixture email: {err}")))?;
        Ok(User::new(*user_id, name, email))
    }
}
