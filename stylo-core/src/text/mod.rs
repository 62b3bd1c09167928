//! Text normalisation: word tokenisation and suffix-stripping stems.

/// Lowercasing, punctuation deletion and whitespace splitting.
pub mod tokenizer;

/// Fixed cascade of suffix rules producing approximate word roots.
pub mod stemmer;

pub use stemmer::stem;
pub use tokenizer::clean_text;
