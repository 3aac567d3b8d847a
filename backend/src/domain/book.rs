//! Book catalogue entries.
//!
//! Books are created only by the catalogue seeder and read by the API layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted for titles and author names.
pub const BOOK_TEXT_MAX: usize = 255;

/// Validation errors returned by book constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Book identifiers are positive database identities.
    NonPositiveId { id: i64 },
    EmptyTitle,
    TitleTooLong { max: usize },
    EmptyAuthor,
    AuthorTooLong { max: usize },
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { id } => write!(f, "book id must be positive, got {id}"),
            Self::EmptyTitle => write!(f, "book title must not be empty"),
            Self::TitleTooLong { max } => {
                write!(f, "book title must be at most {max} characters")
            }
            Self::EmptyAuthor => write!(f, "book author must not be empty"),
            Self::AuthorTooLong { max } => {
                write!(f, "book author must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for BookValidationError {}

/// Database identity of a book row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BookId(i64);

impl BookId {
    /// Validate and construct a [`BookId`].
    pub fn new(id: i64) -> Result<Self, BookValidationError> {
        if id <= 0 {
            return Err(BookValidationError::NonPositiveId { id });
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BookId> for i64 {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for BookId {
    type Error = BookValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn normalise_text(
    raw: String,
    empty: BookValidationError,
    too_long: BookValidationError,
) -> Result<String, BookValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    if trimmed.chars().count() > BOOK_TEXT_MAX {
        return Err(too_long);
    }
    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Book title, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookTitle(String);

impl BookTitle {
    /// Validate and construct a [`BookTitle`].
    ///
    /// # Examples
    /// ```
    /// use bookshelf::domain::BookTitle;
    ///
    /// let title = BookTitle::new("  Dune  ").expect("valid title");
    /// assert_eq!(title.as_ref(), "Dune");
    /// assert!(BookTitle::new("   ").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, BookValidationError> {
        normalise_text(
            title.into(),
            BookValidationError::EmptyTitle,
            BookValidationError::TitleTooLong { max: BOOK_TEXT_MAX },
        )
        .map(Self)
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<BookTitle> for String {
    fn from(value: BookTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for BookTitle {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Author name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
    /// Validate and construct an [`AuthorName`].
    pub fn new(author: impl Into<String>) -> Result<Self, BookValidationError> {
        normalise_text(
            author.into(),
            BookValidationError::EmptyAuthor,
            BookValidationError::AuthorTooLong { max: BOOK_TEXT_MAX },
        )
        .map(Self)
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

impl TryFrom<String> for AuthorName {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: AuthorName,
    created_at: DateTime<Utc>,
}

impl Book {
    /// Assemble a book from validated components.
    #[must_use]
    pub fn new(id: BookId, title: BookTitle, author: AuthorName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            author,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &AuthorName {
        &self.author
    }

    /// Timestamp assigned by the data store on insert.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Book waiting to be inserted; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: BookTitle,
    pub author: AuthorName,
}

impl NewBook {
    /// Validate raw title and author strings.
    ///
    /// # Examples
    /// ```
    /// use bookshelf::domain::NewBook;
    ///
    /// let book = NewBook::try_from_strings("Walden.", "Henry Thoreau").expect("valid");
    /// assert_eq!(book.author.as_ref(), "Henry Thoreau");
    /// ```
    pub fn try_from_strings(
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, BookValidationError> {
        Ok(Self {
            title: BookTitle::new(title)?,
            author: AuthorName::new(author)?,
        })
    }
}
