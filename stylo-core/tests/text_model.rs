// Integration tests for text models: feature extraction end to end,
// file ingestion, comparison and classification through the public API.

use std::fs;

use stylo_core::text::{clean_text, stem};
use stylo_core::{Feature, FrequencyDistribution, Source, StyloError, TextModel, compare_distributions};

fn model(name: &str, text: &str) -> TextModel {
	let mut m = TextModel::new(name);
	m.add_string(text);
	m
}

// ============================================================
// Feature extraction
// ============================================================

#[test]
fn two_short_texts_share_sentence_shape() {
	let a = model("A", "The cat sat. The cat ran!");
	let b = model("B", "Dogs run fast. Dogs bark loud!");

	let three_twice: FrequencyDistribution<usize> = [(3, 2)].into_iter().collect();
	assert_eq!(a.sentence_lengths(), &three_twice);
	assert_eq!(b.sentence_lengths(), &three_twice);

	let punctuation: FrequencyDistribution<char> = [('.', 1), ('!', 1)].into_iter().collect();
	assert_eq!(a.punctuation(), &punctuation);
}

#[test]
fn word_totals_agree_across_features() {
	let text = "Call me Ishmael. Some years ago, never mind how long precisely, having little money!";
	let m = model("Moby", text);
	let tokens = clean_text(text);

	assert_eq!(m.words().total(), tokens.len());
	assert_eq!(m.word_lengths().total(), tokens.len());
	assert_eq!(m.stems().total(), tokens.len());
	assert_eq!(m.stems().get(&stem("precisely")), 1);
	assert_eq!(m.words().get("ishmael"), 1);
}

#[test]
fn file_and_string_ingestion_agree() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("sample.txt");
	let text = "It was a dark night. The wind howled!";
	fs::write(&path, text).unwrap();

	let from_file = TextModel::from_file(&path).unwrap();
	assert_eq!(from_file.name(), "sample");

	let from_string = model("sample", text);
	assert_eq!(from_file, from_string);
}

#[test]
fn file_with_invalid_bytes_is_read() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("broken.txt");
	fs::write(&path, b"Hello \xffthere.").unwrap();

	let mut m = TextModel::new("broken");
	m.add_file(&path).unwrap();
	assert_eq!(m.words().get("there"), 1);
	assert_eq!(m.words().len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let mut m = TextModel::new("none");
	assert!(matches!(m.add_file(dir.path().join("absent.txt")), Err(StyloError::Io(_))));
}

#[test]
fn parallel_files_match_sequential_ingestion() {
	let dir = tempfile::tempdir().unwrap();
	let texts = [
		"First file. It has two sentences!",
		"Second file? Yes, indeed.",
		"Third file without an ending",
		"Fourth one. Running, jumping, walked.",
		"",
	];
	let mut paths = Vec::new();
	for (i, text) in texts.iter().enumerate() {
		let path = dir.path().join(format!("{i}.txt"));
		fs::write(&path, text).unwrap();
		paths.push(path);
	}

	let mut parallel = TextModel::new("corpus");
	parallel.add_files(&paths).unwrap();

	let mut sequential = TextModel::new("corpus");
	for text in texts {
		sequential.add_string(text);
	}

	assert_eq!(parallel, sequential);
}

#[test]
fn parallel_files_fail_without_partial_update() {
	let dir = tempfile::tempdir().unwrap();
	let present = dir.path().join("present.txt");
	fs::write(&present, "Some words here.").unwrap();
	let paths = vec![present, dir.path().join("absent.txt")];

	let mut m = TextModel::new("corpus");
	assert!(m.add_files(&paths).is_err());
	assert!(m.words().is_empty());
}

// ============================================================
// Comparison and classification
// ============================================================

#[test]
fn self_comparison_equals_entropy_sum() {
	let m = model("A", "a a a b b c. d!");
	let words = m.words();
	let total = words.total() as f64;
	let expected: f64 = words.iter().map(|(_, c)| c as f64 * (c as f64 / total).ln()).sum();

	let score = compare_distributions(words, words).unwrap();
	assert!(score <= 0.0);
	assert!((score - expected).abs() < 1e-9);
}

#[test]
fn scores_follow_feature_order() {
	let sample = model("S", "The cat sat. The dog ran!");
	let reference = model("R", "The cat sat on a mat. A dog ran off!");
	let scores = sample.similarity_scores(&reference).unwrap();

	let words = compare_distributions(reference.words(), sample.words()).unwrap();
	let punctuation = compare_distributions(reference.punctuation(), sample.punctuation()).unwrap();
	assert_eq!(scores.get(Feature::Words), words);
	assert_eq!(scores.as_array()[4], punctuation);
}

#[test]
fn comparison_does_not_mutate_models() {
	let a = model("A", "One fish. Two fish!");
	let b = model("B", "Red fish? Blue fish.");
	let (a_before, b_before) = (a.clone(), b.clone());

	a.similarity_scores(&b).unwrap();
	a.classify(&b, &a).unwrap();
	assert_eq!(a, a_before);
	assert_eq!(b, b_before);
}

#[test]
fn classification_against_two_authors() {
	let formal = model(
		"Formal",
		"It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife. \
		 However little known the feelings or views of such a man may be on his first entering a neighbourhood, this truth is so well fixed in the minds of the surrounding families.",
	);
	let terse = model("Terse", "Go now! Run! Why? Stop it! Who knows? Not me! Hurry up! Now!");
	let unknown = model("Unknown", "It is a truth that a man in want of a wife must be in possession of a fortune.");

	let result = unknown.classify(&formal, &terse).unwrap();
	assert_eq!(result.winner, Source::First);
	assert_eq!(result.winner_name(), "Formal");
	assert_eq!(result.votes1 + result.votes2, 5);
	assert_eq!(result.to_string(), "Unknown is more likely to have come from Formal");
}

#[test]
fn classification_requires_complete_sources() {
	let subject = model("Subject", "Some text. More text!");
	let complete = model("Complete", "Other text. Other words!");
	let unpunctuated = model("Bare", "no ending punctuation at all");

	assert!(matches!(
		subject.classify(&complete, &unpunctuated),
		Err(StyloError::EmptyReferenceDistribution)
	));
}
