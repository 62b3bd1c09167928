//! Stylometric text fingerprints and authorship comparison.
//!
//! This crate provides:
//! - Word tokenisation and a suffix-stripping stemmer
//! - Text models counting words, word lengths, stems, sentence lengths
//!   and terminal punctuation
//! - A smoothed log-likelihood score between two distributions
//! - Majority-vote classification of a text between two source models
//! - Directory-backed persistence of models

/// Text models, distributions and classification.
pub mod model;

/// Tokeniser and stemmer.
pub mod text;

/// Model persistence (one `postcard` file per feature).
pub mod storage;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{StyloError, StyloResult};
pub use model::classification::{Classification, SimilarityScores, Source, majority_vote};
pub use model::distribution::{FrequencyDistribution, compare_distributions};
pub use model::feature::Feature;
pub use model::text_model::TextModel;
pub use storage::ModelStore;
