use std::path::PathBuf;

use thiserror::Error;

use crate::model::feature::Feature;

/// Errors raised by model comparison and model persistence.
///
/// Degenerate text (no words, no sentence terminators) is never an error:
/// it only yields sparse distributions.
#[derive(Error, Debug)]
pub enum StyloError {
	/// The reference side of a comparison has a total count of 0.
	#[error("Reference distribution is empty, cannot compute a log similarity score")]
	EmptyReferenceDistribution,

	/// A persisted distribution could not be found for a model.
	#[error("No stored {feature} distribution for model '{model}' ({})", .path.display())]
	MissingResource { model: String, feature: Feature, path: PathBuf },

	/// A model name that cannot be used as a storage key.
	#[error("Invalid model name: '{0}'")]
	InvalidModelName(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Failed to encode or decode a distribution: {0}")]
	Serialization(#[from] postcard::Error),
}

pub type StyloResult<T> = Result<T, StyloError>;
