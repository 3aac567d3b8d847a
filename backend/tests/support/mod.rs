//! Shared helpers for backend integration tests.
//!
//! [`InMemoryCatalogue`] implements the driven persistence ports over a
//! mutex-guarded store with the same truncate-and-restart-identity semantics
//! as the Diesel seed adapter, so the seeder and the HTTP stack can be
//! exercised without a live database.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use bookshelf::domain::ports::{
    BookPersistenceError, BookRepository, SeedCounts, SeedRepository, SeedRepositoryError,
    SeedRequest, UserCredentialsRecord, UserPersistenceError, UserRepository,
};
use bookshelf::domain::{Book, BookId, EmailAddress, PasswordHash, User, UserId, UserName};

#[derive(Default)]
struct Tables {
    books: Vec<Book>,
    users: Vec<UserCredentialsRecord>,
}

/// In-memory stand-in for the PostgreSQL catalogue.
#[derive(Default)]
pub struct InMemoryCatalogue {
    tables: Mutex<Tables>,
    fail_next_seed: AtomicBool,
    offline: AtomicBool,
}

impl InMemoryCatalogue {
    /// Make the next `replace_catalogue` call fail without touching the data.
    pub fn fail_next_seed(&self) {
        self.fail_next_seed.store(true, Ordering::SeqCst);
    }

    /// Make every read fail as if the database were unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn books(&self) -> Vec<Book> {
        self.tables.lock().expect("store lock").books.clone()
    }

    pub fn users(&self) -> Vec<UserCredentialsRecord> {
        self.tables.lock().expect("store lock").users.clone()
    }

    /// Insert a user row directly, bypassing the seeder.
    pub fn insert_user(&self, name: &str, email: &str, password_hash: PasswordHash) -> UserId {
        let mut tables = self.tables.lock().expect("store lock");
        let id = UserId::new(next_id(tables.users.len())).expect("positive id");
        let user = User::new(
            id,
            UserName::new(name).expect("valid name"),
            EmailAddress::new(email).expect("valid email"),
        );
        tables.users.push(UserCredentialsRecord {
            user,
            password_hash,
        });
        id
    }
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).expect("row count fits i64") + 1
}

#[async_trait]
impl BookRepository for InMemoryCatalogue {
    async fn list_all(&self) -> Result<Vec<Book>, BookPersistenceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(BookPersistenceError::connection("database offline"));
        }
        let mut books = self.books();
        books.sort_by_key(|book| book.id());
        Ok(books)
    }
}

#[async_trait]
impl UserRepository for InMemoryCatalogue {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(UserPersistenceError::connection("database offline"));
        }
        Ok(self
            .users()
            .into_iter()
            .map(|record| record.user)
            .find(|user| user.id() == *id))
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentialsRecord>, UserPersistenceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(UserPersistenceError::connection("database offline"));
        }
        Ok(self
            .users()
            .into_iter()
            .find(|record| record.user.email() == email))
    }
}

#[async_trait]
impl SeedRepository for InMemoryCatalogue {
    async fn replace_catalogue(
        &self,
        request: SeedRequest,
    ) -> Result<SeedCounts, SeedRepositoryError> {
        if self.fail_next_seed.swap(false, Ordering::SeqCst) {
            return Err(SeedRepositoryError::constraint("simulated insert failure"));
        }

        let now = Utc::now();
        let books = request
            .books
            .into_iter()
            .enumerate()
            .map(|(index, new_book)| {
                Book::new(
                    BookId::new(next_id(index)).expect("positive id"),
                    new_book.title,
                    new_book.author,
                    now,
                )
            })
            .collect::<Vec<_>>();
        let users = request
            .users
            .into_iter()
            .enumerate()
            .map(|(index, new_user)| UserCredentialsRecord {
                user: User::new(
                    UserId::new(next_id(index)).expect("positive id"),
                    new_user.name,
                    new_user.email,
                ),
                password_hash: new_user.password_hash,
            })
            .collect::<Vec<_>>();

        let counts = SeedCounts {
            books: books.len(),
            users: users.len(),
        };
        let mut tables = self.tables.lock().expect("store lock");
        tables.books = books;
        tables.users = users;
        Ok(counts)
    }
}
