//! Catalogue seeding.
//!
//! [`CatalogueSeeder`] resets the data store to a known sample state: fifty
//! generated books and the single sample account. The replacement is handed
//! to a [`SeedRepository`] as one request so a failed run leaves the
//! previous catalogue untouched.

use std::sync::Arc;

use sample_data::{GenerationError, SampleValues, generate_books};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SeedRepository, SeedRepositoryError, SeedRequest};
use crate::domain::{
    BookValidationError, EmailAddress, NewBook, NewUser, PasswordHashError, PasswordHasher,
    UserName, UserValidationError,
};

/// Number of books written by every seeding run.
pub const SAMPLE_BOOK_COUNT: usize = 50;
/// Name of the sample account.
pub const SAMPLE_USER_NAME: &str = "Alex";
/// Login email of the sample account.
pub const SAMPLE_USER_EMAIL: &str = "alex@alex.com";
/// Clear-text password of the sample account; only its hash is stored.
pub const SAMPLE_USER_PASSWORD: &str = "pwdpwd";

/// Rows written by a successful seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub books: usize,
    pub users: usize,
}

/// Reasons a seeding run aborts. Nothing is written in any of these cases.
#[derive(Debug, Error)]
pub enum SeedingError {
    #[error("sample value generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("generated book is invalid: {0}")]
    InvalidBook(#[from] BookValidationError),
    #[error("sample user is invalid: {0}")]
    InvalidUser(#[from] UserValidationError),
    #[error("password hashing failed: {0}")]
    Hashing(#[from] PasswordHashError),
    #[error(transparent)]
    Persistence(#[from] SeedRepositoryError),
}

/// One-shot service repopulating books and users.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use bookshelf::domain::{BcryptPasswordHasher, CatalogueSeeder};
/// use bookshelf::domain::ports::SeedRepository;
/// use sample_data::FakerValues;
///
/// async fn run(repository: Arc<impl SeedRepository>) {
///     let mut seeder = CatalogueSeeder::new(
///         repository,
///         FakerValues::random(),
///         BcryptPasswordHasher::default(),
///     );
///     let outcome = seeder.seed().await.expect("seeded");
///     assert_eq!(outcome.books, 50);
/// }
/// ```
pub struct CatalogueSeeder<R: ?Sized, V, H> {
    repository: Arc<R>,
    values: V,
    hasher: H,
}

impl<R, V, H> CatalogueSeeder<R, V, H>
where
    R: SeedRepository + ?Sized,
    V: SampleValues,
    H: PasswordHasher,
{
    /// Create a seeder writing through `repository`.
    pub fn new(repository: Arc<R>, values: V, hasher: H) -> Self {
        Self {
            repository,
            values,
            hasher,
        }
    }

    /// Replace every book and user with freshly generated sample rows.
    ///
    /// Running the seeder repeatedly always ends with exactly
    /// [`SAMPLE_BOOK_COUNT`] books and one user.
    pub async fn seed(&mut self) -> Result<SeedOutcome, SeedingError> {
        let request = self.build_request()?;
        let counts = self.repository.replace_catalogue(request).await?;
        info!(
            books = counts.books,
            users = counts.users,
            "catalogue seeded"
        );
        Ok(SeedOutcome {
            books: counts.books,
            users: counts.users,
        })
    }

    fn build_request(&mut self) -> Result<SeedRequest, SeedingError> {
        let books = generate_books(&mut self.values, SAMPLE_BOOK_COUNT)?
            .into_iter()
            .map(|seed| NewBook::try_from_strings(seed.title, seed.author))
            .collect::<Result<Vec<_>, _>>()?;
        let user = NewUser {
            name: UserName::new(SAMPLE_USER_NAME)?,
            email: EmailAddress::new(SAMPLE_USER_EMAIL)?,
            password_hash: self.hasher.hash(SAMPLE_USER_PASSWORD)?,
        };
        Ok(SeedRequest {
            books,
            users: vec![user],
        })
    }
}
