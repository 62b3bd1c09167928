use std::fmt;

use serde::{Deserialize, Serialize};

/// The five stylometric features tracked by a `TextModel`.
///
/// `Feature::ALL` fixes the order used by score vectors and votes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
	Words,
	WordLengths,
	Stems,
	SentenceLengths,
	Punctuation,
}

impl Feature {
	pub const ALL: [Feature; 5] = [
		Feature::Words,
		Feature::WordLengths,
		Feature::Stems,
		Feature::SentenceLengths,
		Feature::Punctuation,
	];

	/// Position of the feature in score vectors.
	pub fn index(self) -> usize {
		match self {
			Feature::Words => 0,
			Feature::WordLengths => 1,
			Feature::Stems => 2,
			Feature::SentenceLengths => 3,
			Feature::Punctuation => 4,
		}
	}

	/// Name used in storage keys (`<model>_<name>`).
	pub fn storage_name(self) -> &'static str {
		match self {
			Feature::Words => "words",
			Feature::WordLengths => "word_lengths",
			Feature::Stems => "stems",
			Feature::SentenceLengths => "sentence_lengths",
			Feature::Punctuation => "punctuations",
		}
	}
}

impl fmt::Display for Feature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Feature::Words => "words",
			Feature::WordLengths => "word lengths",
			Feature::Stems => "stems",
			Feature::SentenceLengths => "sentence lengths",
			Feature::Punctuation => "punctuation",
		};
		f.write_str(label)
	}
}
