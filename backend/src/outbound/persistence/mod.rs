//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters translate between Diesel rows and domain types and map every
//! database failure into the matching port error. Row structs and the
//! schema stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use bookshelf::outbound::persistence::{DbPool, DieselBookRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookshelf")).await?;
//! let books = DieselBookRepository::new(pool);
//! # let _ = books;
//! # Ok(())
//! # }
//! ```

mod diesel_book_repository;
mod diesel_error_mapping;
mod diesel_seed_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_book_repository::DieselBookRepository;
pub use diesel_seed_repository::DieselSeedRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
