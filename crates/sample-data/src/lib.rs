//! Sample value generation for seeding the book catalogue.
//!
//! The crate is independent of backend domain types so the seeder can swap
//! generators freely. Production seeding draws random values through
//! [`FakerValues::random`]; tests inject [`FakerValues::seeded`] or
//! [`ScriptedValues`] to obtain reproducible rows.
//!
//! # Example
//!
//! ```
//! use sample_data::{FakerValues, generate_books};
//!
//! let mut values = FakerValues::seeded(42);
//! let books = generate_books(&mut values, 3).expect("generation succeeds");
//!
//! assert_eq!(books.len(), 3);
//! assert!(books.iter().all(|book| !book.title.trim().is_empty()));
//! ```

mod books;
mod error;
mod values;

pub use books::{BookSeed, MAX_VALUE_ATTEMPTS, generate_books};
pub use error::GenerationError;
pub use values::{FakerValues, SampleValues, ScriptedValues};
