use std::fmt;

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// One log similarity score per feature, in `Feature::ALL` order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimilarityScores([f64; 5]);

impl SimilarityScores {
	pub fn new(scores: [f64; 5]) -> Self {
		Self(scores)
	}

	/// Score for a single feature.
	pub fn get(&self, feature: Feature) -> f64 {
		self.0[feature.index()]
	}

	pub fn as_array(&self) -> &[f64; 5] {
		&self.0
	}

	/// Iterates over `(feature, score)` pairs in fixed feature order.
	pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
		Feature::ALL.into_iter().map(move |feature| (feature, self.get(feature)))
	}
}

impl fmt::Display for SimilarityScores {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (i, score) in self.0.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{score}")?;
		}
		write!(f, "]")
	}
}

/// Which of the two candidate sources won a vote.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
	First,
	Second,
}

/// Counts per-feature votes between two score vectors.
///
/// A feature votes for the first source only when its score is strictly
/// greater; ties (and NaN) vote for the second source.
/// Returns `(votes_first, votes_second)`.
pub fn count_votes(scores1: &SimilarityScores, scores2: &SimilarityScores) -> (usize, usize) {
	let votes1 = scores1
		.as_array()
		.iter()
		.zip(scores2.as_array())
		.filter(|(s1, s2)| s1 > s2)
		.count();
	(votes1, Feature::ALL.len() - votes1)
}

/// Picks the source with strictly more feature votes, the second one otherwise.
pub fn majority_vote(scores1: &SimilarityScores, scores2: &SimilarityScores) -> Source {
	let (votes1, votes2) = count_votes(scores1, scores2);
	if votes1 > votes2 { Source::First } else { Source::Second }
}

/// Outcome of classifying a model against two candidate sources.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Classification {
	/// Name of the classified model.
	pub subject: String,
	pub source1: String,
	pub source2: String,
	/// Scores of the subject against the first source.
	pub scores1: SimilarityScores,
	/// Scores of the subject against the second source.
	pub scores2: SimilarityScores,
	pub votes1: usize,
	pub votes2: usize,
	pub winner: Source,
}

impl Classification {
	/// Builds the result from both score vectors, resolving the vote.
	pub fn new(subject: &str, source1: &str, source2: &str, scores1: SimilarityScores, scores2: SimilarityScores) -> Self {
		let (votes1, votes2) = count_votes(&scores1, &scores2);
		Self {
			subject: subject.to_owned(),
			source1: source1.to_owned(),
			source2: source2.to_owned(),
			scores1,
			scores2,
			votes1,
			votes2,
			winner: majority_vote(&scores1, &scores2),
		}
	}

	/// Name of the winning source.
	pub fn winner_name(&self) -> &str {
		match self.winner {
			Source::First => &self.source1,
			Source::Second => &self.source2,
		}
	}
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} is more likely to have come from {}", self.subject, self.winner_name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_three_of_five_wins() {
		let s1 = SimilarityScores::new([-1.0, -1.0, -1.0, -5.0, -5.0]);
		let s2 = SimilarityScores::new([-2.0, -2.0, -2.0, -1.0, -1.0]);
		assert_eq!(count_votes(&s1, &s2), (3, 2));
		assert_eq!(majority_vote(&s1, &s2), Source::First);
	}

	#[test]
	fn test_feature_tie_votes_for_second() {
		// Two strict wins for the first source, one tie, two losses
		let s1 = SimilarityScores::new([-1.0, -1.0, -2.0, -5.0, -5.0]);
		let s2 = SimilarityScores::new([-2.0, -2.0, -2.0, -1.0, -1.0]);
		assert_eq!(count_votes(&s1, &s2), (2, 3));
		assert_eq!(majority_vote(&s1, &s2), Source::Second);
	}

	#[test]
	fn test_identical_scores_go_to_second() {
		let s = SimilarityScores::new([-3.0; 5]);
		assert_eq!(count_votes(&s, &s), (0, 5));
		assert_eq!(majority_vote(&s, &s), Source::Second);
	}

	#[test]
	fn test_nan_votes_for_second() {
		let s1 = SimilarityScores::new([f64::NAN, -1.0, -1.0, -1.0, f64::NAN]);
		let s2 = SimilarityScores::new([-9.0, -2.0, -2.0, -2.0, -9.0]);
		assert_eq!(count_votes(&s1, &s2), (3, 2));
	}

	#[test]
	fn test_classification_report() {
		let s1 = SimilarityScores::new([-1.0; 5]);
		let s2 = SimilarityScores::new([-2.0; 5]);
		let result = Classification::new("Iliad", "Homer", "Andersen", s1, s2);
		assert_eq!(result.winner, Source::First);
		assert_eq!(result.votes1, 5);
		assert_eq!(result.winner_name(), "Homer");
		assert_eq!(result.to_string(), "Iliad is more likely to have come from Homer");
	}

	#[test]
	fn test_scores_display_and_lookup() {
		let s = SimilarityScores::new([-1.5, -2.0, -3.0, -4.0, 0.0]);
		assert_eq!(s.to_string(), "[-1.5, -2, -3, -4, 0]");
		assert_eq!(s.get(Feature::SentenceLengths), -4.0);
		assert_eq!(s.iter().count(), 5);
	}
}
