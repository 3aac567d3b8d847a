//! Password hashing.
//!
//! Passwords are stored only as one-way bcrypt digests. The [`PasswordHasher`]
//! trait lets the seeder and login service share one hashing policy while
//! tests lower the bcrypt cost.

use std::fmt;

use thiserror::Error;

/// One-way password digest as stored in the data store.
///
/// `Debug` output is redacted so digests never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already computed digest.
    pub fn new(digest: impl Into<String>) -> Result<Self, PasswordHashError> {
        let digest = digest.into();
        if digest.trim().is_empty() {
            return Err(PasswordHashError::EmptyDigest);
        }
        Ok(Self(digest))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Errors raised while hashing or verifying passwords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    #[error("password digest must not be empty")]
    EmptyDigest,
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    #[error("stored password digest is malformed: {message}")]
    MalformedDigest { message: String },
}

/// Hashing policy shared by the seeder and the login service.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way digest of `password`.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `password` against a stored digest.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}

/// bcrypt-backed [`PasswordHasher`].
///
/// # Examples
/// ```
/// use bookshelf::domain::{BcryptPasswordHasher, PasswordHasher};
///
/// let hasher = BcryptPasswordHasher::with_cost(4);
/// let hash = hasher.hash("pwdpwd").expect("hash");
/// assert!(hasher.verify("pwdpwd", &hash).expect("verify"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Use a custom work factor; bcrypt accepts 4 to 31.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let digest = bcrypt::hash(password, self.cost).map_err(|err| PasswordHashError::Hashing {
            message: err.to_string(),
        })?;
        PasswordHash::new(digest)
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password, hash.as_ref()).map_err(|err| PasswordHashError::MalformedDigest {
            message: err.to_string(),
        })
    }
}
