//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; conversions into domain types
//! re-validate every column.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{
    AuthorName, Book, BookId, BookTitle, BookValidationError, EmailAddress, PasswordHashError,
    User, UserId, UserName, UserValidationError,
};

use super::schema::{books, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookRow> for Book {
    type Error = BookValidationError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book::new(
            BookId::new(row.id)?,
            BookTitle::new(row.title)?,
            AuthorName::new(row.author)?,
            row.created_at,
        ))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub title: &'a str,
    pub author: &'a str,
}

/// Public columns of a user row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::new(
            UserId::new(row.id)?,
            UserName::new(row.name)?,
            EmailAddress::new(row.email)?,
        ))
    }
}

/// User row including the password digest, read only during login.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserCredentialsRow {
    #[diesel(embed)]
    pub user: UserRow,
    pub password_hash: String,
}

/// Reasons a stored credentials row cannot become a domain record.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CredentialsRowError {
    #[error(transparent)]
    User(#[from] UserValidationError),
    #[error(transparent)]
    Hash(#[from] PasswordHashError),
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn book_rows_are_revalidated() {
        let row = BookRow {
            id: 1,
            title: "   ".to_owned(),
            author: "Someone".to_owned(),
            created_at: Utc::now(),
        };
        assert_eq!(Book::try_from(row), Err(BookValidationError::EmptyTitle));
    }

    #[rstest]
    fn user_rows_normalise_email() {
        let row = UserRow {
            id: 1,
            name: "Alex".to_owned(),
            email: "Alex@Alex.com".to_owned(),
        };
        let user = User::try_from(row).expect("valid row");
        assert_eq!(user.email().as_ref(), "alex@alex.com");
    }
}
