use std::fs;
use std::hash::Hash;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StyloError, StyloResult};
use crate::io::{list_files, normalize_folder};
use crate::model::distribution::FrequencyDistribution;
use crate::model::feature::Feature;
use crate::model::text_model::TextModel;

/// Extension of stored distribution files.
const EXTENSION: &str = "bin";

/// Directory-backed persistence for `TextModel`s.
///
/// Each of the five distributions of a model lives in its own file,
/// `<root>/<model>_<feature>.bin`, encoded with `postcard`.
///
/// # Guarantees
/// - Loading after saving reproduces every key and count exactly
/// - Decoding never executes the stored content
#[derive(Clone, Debug)]
pub struct ModelStore {
	root: PathBuf,
}

impl ModelStore {
	/// Creates a store rooted at `root`. `"."` resolves to the current directory.
	///
	/// The directory is created on the first save.
	pub fn new<P: AsRef<Path>>(root: P) -> Self {
		Self { root: normalize_folder(root) }
	}

	/// Path of the file holding one feature of one model.
	pub fn path_for(&self, model_name: &str, feature: Feature) -> PathBuf {
		self.root.join(format!("{}_{}.{}", model_name, feature.storage_name(), EXTENSION))
	}

	/// Writes the five distributions of `model`, replacing previous files.
	///
	/// # Errors
	/// Fails on an unusable model name, on I/O errors, or if encoding fails.
	pub fn save(&self, model: &TextModel) -> StyloResult<()> {
		let name = model.name();
		check_name(name)?;
		fs::create_dir_all(&self.root)?;

		self.write_feature(name, Feature::Words, model.words())?;
		self.write_feature(name, Feature::WordLengths, model.word_lengths())?;
		self.write_feature(name, Feature::Stems, model.stems())?;
		self.write_feature(name, Feature::SentenceLengths, model.sentence_lengths())?;
		self.write_feature(name, Feature::Punctuation, model.punctuation())?;

		info!("Saved model '{}' to {}", name, self.root.display());
		Ok(())
	}

	/// Builds a new model named `name` from its stored distributions.
	///
	/// # Errors
	/// Returns `StyloError::MissingResource` if any of the five files is absent.
	pub fn load(&self, name: &str) -> StyloResult<TextModel> {
		let mut model = TextModel::new(name);
		self.read_into(&mut model)?;
		Ok(model)
	}

	/// Replaces the distributions of `model` with the stored ones.
	///
	/// All five files are decoded before `model` is touched.
	pub fn read_into(&self, model: &mut TextModel) -> StyloResult<()> {
		let name = model.name().to_owned();
		check_name(&name)?;

		let words = self.read_feature(&name, Feature::Words)?;
		let word_lengths = self.read_feature(&name, Feature::WordLengths)?;
		let stems = self.read_feature(&name, Feature::Stems)?;
		let sentence_lengths = self.read_feature(&name, Feature::SentenceLengths)?;
		let punctuation = self.read_feature(&name, Feature::Punctuation)?;
		model.set_distributions(words, word_lengths, stems, sentence_lengths, punctuation);

		info!("Loaded model '{}' from {}", name, self.root.display());
		Ok(())
	}

	/// Returns `true` if every distribution of `name` is stored.
	pub fn contains(&self, name: &str) -> bool {
		Feature::ALL.iter().all(|feature| self.path_for(name, *feature).is_file())
	}

	/// Names of the models with a stored words distribution, sorted.
	///
	/// An absent root directory holds no models.
	pub fn model_names(&self) -> StyloResult<Vec<String>> {
		let files = match list_files(&self.root, EXTENSION) {
			Ok(files) => files,
			Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
			Err(e) => return Err(e.into()),
		};

		let suffix = format!("_{}.{}", Feature::Words.storage_name(), EXTENSION);
		let mut names: Vec<String> = files
			.iter()
			.filter_map(|file| file.strip_suffix(&suffix))
			.filter(|name| !name.is_empty())
			.map(str::to_owned)
			.collect();
		names.sort();
		Ok(names)
	}

	fn write_feature<K>(&self, name: &str, feature: Feature, distribution: &FrequencyDistribution<K>) -> StyloResult<()>
	where
		K: Eq + Hash + Serialize,
	{
		let bytes = postcard::to_stdvec(distribution)?;
		fs::write(self.path_for(name, feature), bytes)?;
		Ok(())
	}

	fn read_feature<K>(&self, name: &str, feature: Feature) -> StyloResult<FrequencyDistribution<K>>
	where
		K: Eq + Hash + DeserializeOwned,
	{
		let path = self.path_for(name, feature);
		let bytes = match fs::read(&path) {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				return Err(StyloError::MissingResource { model: name.to_owned(), feature, path });
			}
			Err(e) => return Err(e.into()),
		};
		Ok(postcard::from_bytes(&bytes)?)
	}
}

/// Model names become file name prefixes: no empty names, no separators.
fn check_name(name: &str) -> StyloResult<()> {
	if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
		return Err(StyloError::InvalidModelName(name.to_owned()));
	}
	Ok(())
}
