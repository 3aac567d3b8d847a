//! Book row generation from a [`SampleValues`] source.

use crate::error::GenerationError;
use crate::values::SampleValues;

/// Maximum number of draws per field before a blank value becomes an error.
pub const MAX_VALUE_ATTEMPTS: usize = 16;

/// Generated title/author pair for one book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSeed {
    /// Multi-word sentence used as the book title.
    pub title: String,
    /// Person name used as the book author.
    pub author: String,
}

/// Generate `count` book rows from the supplied generator.
///
/// Values are trimmed; blank values are redrawn up to
/// [`MAX_VALUE_ATTEMPTS`] times per field.
///
/// # Errors
///
/// Returns [`GenerationError`] when a field stays blank after the maximum
/// number of draws.
///
/// # Example
///
/// ```
/// use sample_data::{ScriptedValues, generate_books};
///
/// let mut values = ScriptedValues::new(["A Tale Of Two Cities."], ["Charles Dickens"]);
/// let books = generate_books(&mut values, 2).expect("generated");
///
/// assert_eq!(books.len(), 2);
/// assert_eq!(books[0].author, "Charles Dickens");
/// ```
pub fn generate_books<V>(values: &mut V, count: usize) -> Result<Vec<BookSeed>, GenerationError>
where
    V: SampleValues + ?Sized,
{
    let mut books = Vec::with_capacity(count);
    for _ in 0..count {
        let title = draw_non_blank(|| values.next_sentence()).ok_or(
            GenerationError::BlankSentence {
                max_attempts: MAX_VALUE_ATTEMPTS,
            },
        )?;
        let author = draw_non_blank(|| values.next_person_name()).ok_or(
            GenerationError::BlankPersonName {
                max_attempts: MAX_VALUE_ATTEMPTS,
            },
        )?;
        books.push(BookSeed { title, author });
    }
    Ok(books)
}

fn draw_non_blank(mut draw: impl FnMut() -> String) -> Option<String> {
    (0..MAX_VALUE_ATTEMPTS)
        .map(|_| draw())
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
}
