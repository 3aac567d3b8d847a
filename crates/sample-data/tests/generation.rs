//! Integration coverage for the public generation surface.

use rstest::{fixture, rstest};
use sample_data::{BookSeed, FakerValues, SampleValues, ScriptedValues, generate_books};

#[fixture]
fn seeded_books() -> Vec<BookSeed> {
    let mut values = FakerValues::seeded(20_260_101);
    generate_books(&mut values, 50).expect("generation succeeds")
}

#[rstest]
fn seeded_generation_is_deterministic(seeded_books: Vec<BookSeed>) {
    let mut values = FakerValues::seeded(20_260_101);
    let again = generate_books(&mut values, 50).expect("generation succeeds");
    assert_eq!(seeded_books, again);
}

#[rstest]
fn seeded_titles_are_multi_word(seeded_books: Vec<BookSeed>) {
    for book in &seeded_books {
        assert!(
            book.title.split_whitespace().count() >= 2,
            "title should be a sentence: {book:?}"
        );
    }
}

#[rstest]
fn seeded_books_are_not_all_identical(seeded_books: Vec<BookSeed>) {
    let first = seeded_books.first().expect("at least one book");
    assert!(seeded_books.iter().any(|book| book != first));
}

/// Generator counting how often each capability is called.
#[derive(Default)]
struct CountingValues {
    sentences: usize,
    names: usize,
}

impl SampleValues for CountingValues {
    fn next_sentence(&mut self) -> String {
        self.sentences += 1;
        format!("Sentence number {}.", self.sentences)
    }

    fn next_person_name(&mut self) -> String {
        self.names += 1;
        format!("Author {}", self.names)
    }
}

#[rstest]
fn custom_generators_are_called_once_per_field() {
    let mut values = CountingValues::default();
    let books = generate_books(&mut values, 5).expect("generation succeeds");

    assert_eq!(values.sentences, 5);
    assert_eq!(values.names, 5);
    assert_eq!(
        books.last().map(|book| book.title.as_str()),
        Some("Sentence number 5.")
    );
}

#[rstest]
fn scripted_values_fill_every_row() {
    let mut values = ScriptedValues::new(["Walden."], ["Henry Thoreau"]);
    let books = generate_books(&mut values, 3).expect("generation succeeds");
    assert!(books.iter().all(|book| book.author == "Henry Thoreau"));
}
