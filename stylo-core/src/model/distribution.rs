use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{StyloError, StyloResult};

/// Pseudo-count given to keys of the sample that the reference never saw.
const UNSEEN_PSEUDO_COUNT: f64 = 0.5;

/// Occurrence counts per feature key.
///
/// # Invariants
/// - Every stored count is >= 1
/// - An absent key means a count of 0
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FrequencyDistribution<K: Eq + Hash> {
	counts: HashMap<K, usize>,
}

impl<K: Eq + Hash> Default for FrequencyDistribution<K> {
	fn default() -> Self {
		Self { counts: HashMap::new() }
	}
}

impl<K: Eq + Hash> FrequencyDistribution<K> {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `key`.
	pub fn add(&mut self, key: K) {
		self.add_count(key, 1);
	}

	/// Records `count` occurrences of `key`. A count of 0 is ignored.
	pub fn add_count(&mut self, key: K, count: usize) {
		if count == 0 {
			return;
		}
		*self.counts.entry(key).or_insert(0) += count;
	}

	/// Returns the count of `key`, 0 when absent.
	pub fn get<Q>(&self, key: &Q) -> usize
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.counts.get(key).copied().unwrap_or(0)
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.counts.contains_key(key)
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(key, count)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
		self.counts.iter().map(|(k, v)| (k, *v))
	}

	/// Computes the log similarity score of `sample` against `self` as reference.
	///
	/// For each key of `sample` with count `c`, adds `c * ln(r / total)` where `r`
	/// is the reference count, or `c * ln(0.5 / total)` when the reference lacks
	/// the key. A score closer to 0 means `sample` fits the reference better.
	///
	/// # Errors
	/// Returns `StyloError::EmptyReferenceDistribution` if `self` is empty.
	pub fn log_similarity(&self, sample: &Self) -> StyloResult<f64> {
		let total = self.total();
		if total == 0 {
			return Err(StyloError::EmptyReferenceDistribution);
		}
		let total = total as f64;

		let score = sample
			.iter()
			.map(|(key, sample_count)| {
				let reference_count = match self.counts.get(key) {
					Some(count) => *count as f64,
					None => UNSEEN_PSEUDO_COUNT,
				};
				(reference_count / total).ln() * sample_count as f64
			})
			.sum();

		Ok(score)
	}
}

impl<K: Eq + Hash + Clone> FrequencyDistribution<K> {
	/// Adds every count of `other` into this distribution.
	pub fn merge(&mut self, other: &Self) {
		for (key, count) in other.iter() {
			self.add_count(key.clone(), count);
		}
	}
}

impl<K: Eq + Hash> FromIterator<(K, usize)> for FrequencyDistribution<K> {
	fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
		let mut distribution = Self::new();
		for (key, count) in iter {
			distribution.add_count(key, count);
		}
		distribution
	}
}

/// Scores `sample` against `reference`, see `FrequencyDistribution::log_similarity`.
pub fn compare_distributions<K: Eq + Hash>(
	reference: &FrequencyDistribution<K>,
	sample: &FrequencyDistribution<K>,
) -> StyloResult<f64> {
	reference.log_similarity(sample)
}
