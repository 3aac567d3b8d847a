//! Value generators used by the catalogue seeder.
//!
//! [`SampleValues`] is the seam between seeding and randomness: the seeder
//! only asks for "the next sentence" and "the next person name", so callers
//! decide whether values are random, reproducible, or scripted.

use fake::Fake;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Minimum number of words in a generated sentence.
const SENTENCE_MIN_WORDS: usize = 4;

/// Exclusive upper bound on the number of words in a generated sentence.
const SENTENCE_MAX_WORDS: usize = 9;

/// Source of sample text values.
pub trait SampleValues {
    /// Produce a multi-word sentence, suitable as a book title.
    fn next_sentence(&mut self) -> String;

    /// Produce a person's full name, suitable as a book author.
    fn next_person_name(&mut self) -> String;
}

/// `fake`-backed generator driven by a ChaCha RNG.
///
/// The same seed always yields the same sequence of values.
///
/// # Example
///
/// ```
/// use sample_data::{FakerValues, SampleValues};
///
/// let mut first = FakerValues::seeded(7);
/// let mut second = FakerValues::seeded(7);
/// assert_eq!(first.next_sentence(), second.next_sentence());
/// ```
#[derive(Debug, Clone)]
pub struct FakerValues {
    rng: ChaCha8Rng,
}

impl FakerValues {
    /// Build a reproducible generator from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build a generator seeded from the thread-local entropy source.
    ///
    /// Values differ on every run.
    #[must_use]
    pub fn random() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for FakerValues {
    fn default() -> Self {
        Self::random()
    }
}

impl SampleValues for FakerValues {
    fn next_sentence(&mut self) -> String {
        Sentence(EN, SENTENCE_MIN_WORDS..SENTENCE_MAX_WORDS).fake_with_rng(&mut self.rng)
    }

    fn next_person_name(&mut self) -> String {
        Name(EN).fake_with_rng(&mut self.rng)
    }
}

/// Generator replaying caller-supplied values in a loop.
///
/// An empty list yields empty strings, which lets tests exercise the
/// blank-value guard in [`crate::generate_books`].
///
/// # Example
///
/// ```
/// use sample_data::{SampleValues, ScriptedValues};
///
/// let mut values = ScriptedValues::new(["Dune"], ["Frank Herbert", "Ursula Le Guin"]);
/// assert_eq!(values.next_sentence(), "Dune");
/// assert_eq!(values.next_sentence(), "Dune");
/// assert_eq!(values.next_person_name(), "Frank Herbert");
/// assert_eq!(values.next_person_name(), "Ursula Le Guin");
/// assert_eq!(values.next_person_name(), "Frank Herbert");
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedValues {
    sentences: std::iter::Cycle<std::vec::IntoIter<String>>,
    names: std::iter::Cycle<std::vec::IntoIter<String>>,
}

impl ScriptedValues {
    /// Build a generator cycling through `sentences` and `names`.
    #[must_use]
    pub fn new<S, N>(
        sentences: impl IntoIterator<Item = S>,
        names: impl IntoIterator<Item = N>,
    ) -> Self
    where
        S: Into<String>,
        N: Into<String>,
    {
        let scripted_sentences: Vec<String> = sentences.into_iter().map(Into::into).collect();
        let scripted_names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            sentences: scripted_sentences.into_iter().cycle(),
            names: scripted_names.into_iter().cycle(),
        }
    }
}

impl SampleValues for ScriptedValues {
    fn next_sentence(&mut self) -> String {
        self.sentences.next().unwrap_or_default()
    }

    fn next_person_name(&mut self) -> String {
        self.names.next().unwrap_or_default()
    }
}
