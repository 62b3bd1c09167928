use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::classification::{Classification, SimilarityScores};
use super::distribution::FrequencyDistribution;
use super::feature::Feature;
use crate::error::{StyloError, StyloResult};
use crate::io::{get_filename, read_text};
use crate::text::{clean_text, stem};

/// Characters that close a sentence.
const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// Statistical fingerprint of a body of text.
///
/// # Responsibilities
/// - Accumulate word, word length, stem, sentence length and punctuation counts
/// - Merge with another model (parallel ingestion of many files)
/// - Score another model's distributions against its own
/// - Pick the likelier of two source models
///
/// # Invariants
/// - Additions are cumulative: feeding the same text twice doubles its counts
/// - `words`, `word_lengths` and `stems` always hold the same total
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextModel {
	/// Display name, also the storage key prefix.
	name: String,
	words: FrequencyDistribution<String>,
	/// Length in characters of each word.
	word_lengths: FrequencyDistribution<usize>,
	stems: FrequencyDistribution<String>,
	/// Number of words in each sentence.
	sentence_lengths: FrequencyDistribution<usize>,
	/// Sentence-ending characters (`.`, `!`, `?`).
	punctuation: FrequencyDistribution<char>,
}

impl TextModel {
	/// Creates an empty model.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			words: FrequencyDistribution::new(),
			word_lengths: FrequencyDistribution::new(),
			stems: FrequencyDistribution::new(),
			sentence_lengths: FrequencyDistribution::new(),
			punctuation: FrequencyDistribution::new(),
		}
	}

	/// Creates a model named after the file (without extension) and feeds it the file.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> StyloResult<Self> {
		let mut model = Self::new(&get_filename(&filepath)?);
		model.add_file(&filepath)?;
		Ok(model)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn words(&self) -> &FrequencyDistribution<String> {
		&self.words
	}

	pub fn word_lengths(&self) -> &FrequencyDistribution<usize> {
		&self.word_lengths
	}

	pub fn stems(&self) -> &FrequencyDistribution<String> {
		&self.stems
	}

	pub fn sentence_lengths(&self) -> &FrequencyDistribution<usize> {
		&self.sentence_lengths
	}

	pub fn punctuation(&self) -> &FrequencyDistribution<char> {
		&self.punctuation
	}

	/// Replaces all five distributions at once (used when loading from storage).
	pub(crate) fn set_distributions(
		&mut self,
		words: FrequencyDistribution<String>,
		word_lengths: FrequencyDistribution<usize>,
		stems: FrequencyDistribution<String>,
		sentence_lengths: FrequencyDistribution<usize>,
		punctuation: FrequencyDistribution<char>,
	) {
		self.words = words;
		self.word_lengths = word_lengths;
		self.stems = stems;
		self.sentence_lengths = sentence_lengths;
		self.punctuation = punctuation;
	}

	/// Adds a text to the model.
	///
	/// # Sentences
	/// Spaces are counted while scanning; each terminator records a sentence
	/// of `spaces + 1` words and resets the counter to -1 so that the space
	/// following it is not counted. A terminator met while the counter is -1
	/// (as in `"?!"`) records nothing. Trailing words without terminator form
	/// one last sentence.
	///
	/// # Words
	/// Tokens come from `clean_text`; each one feeds `words`, `word_lengths`
	/// (character count) and `stems`.
	pub fn add_string(&mut self, text: &str) {
		let mut count: i64 = 0;
		for c in text.chars() {
			if c == ' ' {
				count += 1;
			} else if SENTENCE_ENDINGS.contains(&c) {
				if count >= 0 {
					self.sentence_lengths.add((count + 1) as usize);
				}
				count = -1;
				self.punctuation.add(c);
			}
		}
		if count > 0 {
			self.sentence_lengths.add((count + 1) as usize);
		}

		let tokens = clean_text(text);
		for word in &tokens {
			self.word_lengths.add(word.chars().count());
			self.stems.add(stem(word));
			self.words.add(word.clone());
		}

		debug!("Model '{}': added {} words from {} characters", self.name, tokens.len(), text.len());
	}

	/// Adds the content of a text file to the model.
	///
	/// Invalid UTF-8 byte sequences are dropped.
	///
	/// # Errors
	/// Returns an error if the file cannot be read.
	pub fn add_file<P: AsRef<Path>>(&mut self, filepath: P) -> StyloResult<()> {
		let text = read_text(&filepath)?;
		debug!("Model '{}': reading {}", self.name, filepath.as_ref().display());
		self.add_string(&text);
		Ok(())
	}

	/// Adds several text files, reading them in parallel.
	///
	/// # Behavior
	/// - Splits the files into chunks (based on CPU cores).
	/// - Spawns a thread per chunk building a partial model.
	/// - Merges the partial models one by one once all succeeded.
	///
	/// # Errors
	/// Returns the first read error; the model is then left unchanged.
	pub fn add_files<P: AsRef<Path>>(&mut self, filepaths: &[P]) -> StyloResult<()> {
		if filepaths.is_empty() {
			return Ok(());
		}

		let paths: Vec<PathBuf> = filepaths.iter().map(|p| p.as_ref().to_path_buf()).collect();
		let chunks = num_cpus::get().clamp(1, paths.len());
		let chunk_size = paths.len().div_ceil(chunks);

		let (tx, rx) = mpsc::channel();
		for chunk in paths.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<PathBuf> = chunk.to_vec();
			let name = self.name.clone();

			thread::spawn(move || {
				let mut partial_model = TextModel::new(&name);
				let result = chunk
					.iter()
					.try_for_each(|path| partial_model.add_file(path))
					.map(|_| partial_model);
				let _ = tx.send(result);
			});
		}
		drop(tx);

		let partial_models = rx.iter().collect::<StyloResult<Vec<_>>>()?;
		for partial_model in &partial_models {
			self.merge(partial_model);
		}

		info!("Model '{}': added {} files", self.name, paths.len());
		Ok(())
	}

	/// Merges another model's counts into this one. The name is kept.
	pub fn merge(&mut self, other: &Self) {
		self.words.merge(&other.words);
		self.word_lengths.merge(&other.word_lengths);
		self.stems.merge(&other.stems);
		self.sentence_lengths.merge(&other.sentence_lengths);
		self.punctuation.merge(&other.punctuation);
	}

	/// Scores this model against `other`, one score per feature.
	///
	/// `other` is the reference and `self` the sample, in `Feature::ALL` order.
	///
	/// # Errors
	/// Returns `StyloError::EmptyReferenceDistribution` if any distribution
	/// of `other` is empty.
	pub fn similarity_scores(&self, other: &Self) -> StyloResult<SimilarityScores> {
		let mut scores = [0.0; 5];
		for feature in Feature::ALL {
			let score = match feature {
				Feature::Words => other.words.log_similarity(&self.words),
				Feature::WordLengths => other.word_lengths.log_similarity(&self.word_lengths),
				Feature::Stems => other.stems.log_similarity(&self.stems),
				Feature::SentenceLengths => other.sentence_lengths.log_similarity(&self.sentence_lengths),
				Feature::Punctuation => other.punctuation.log_similarity(&self.punctuation),
			};
			scores[feature.index()] = score.inspect_err(|e| {
				if let StyloError::EmptyReferenceDistribution = e {
					warn!("Cannot score '{}' against '{}': no {} in reference", self.name, other.name, feature);
				}
			})?;
		}
		Ok(SimilarityScores::new(scores))
	}

	/// Decides which of two source models this model more likely came from.
	///
	/// Each feature votes for the source with the strictly higher score, ties
	/// vote for `source2`. `source1` wins only with strictly more votes.
	///
	/// # Errors
	/// Fails if either source has an empty distribution.
	pub fn classify(&self, source1: &Self, source2: &Self) -> StyloResult<Classification> {
		let scores1 = self.similarity_scores(source1)?;
		let scores2 = self.similarity_scores(source2)?;
		let result = Classification::new(&self.name, &source1.name, &source2.name, scores1, scores2);

		info!("scores for {}: {}", source1.name, scores1);
		info!("scores for {}: {}", source2.name, scores2);
		info!("{result}");
		Ok(result)
	}
}

impl fmt::Display for TextModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "text model name: {}", self.name)?;
		writeln!(f, "  number of words: {}", self.words.len())?;
		writeln!(f, "  number of word lengths: {}", self.word_lengths.len())?;
		writeln!(f, "  number of stems: {}", self.stems.len())?;
		writeln!(f, "  number of sentence lengths: {}", self.sentence_lengths.len())?;
		write!(f, "  number of various punctuational endings: {}", self.punctuation.len())
	}
}
