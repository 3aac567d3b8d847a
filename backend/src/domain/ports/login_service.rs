//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to authenticate credentials without
//! importing the backing infrastructure, so HTTP handler tests can swap in
//! a fixture instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Email accepted by [`FixtureLoginService`].
pub const FIXTURE_EMAIL: &str = "alex@alex.com";
/// Password accepted by [`FixtureLoginService`].
pub const FIXTURE_PASSWORD: &str = "pwdpwd";
/// User id returned by the fixture ports.
pub const FIXTURE_USER_ID: i64 = 1;

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// In-memory authenticator used when no database is configured.
///
/// Accepts the seeded sample account and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.email().eq_ignore_ascii_case(FIXTURE_EMAIL)
            && credentials.password() == FIXTURE_PASSWORD
        {
            UserId::new(FIXTURE_USER_ID)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
