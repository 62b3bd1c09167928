use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a text file, dropping any byte sequence that is not valid UTF-8.
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let bytes = fs::read(filename)?;
	let mut contents = String::with_capacity(bytes.len());
	for chunk in bytes.utf8_chunks() {
		contents.push_str(chunk.valid());
	}
	Ok(contents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/hca.txt"` → `"hca"`
/// - `"hca.txt"` → `"hca"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths).
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_read_text_skips_invalid_bytes() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("broken.txt");
		fs::write(&path, b"caf\xc3\xa9 \xff\xfeok.").unwrap();
		assert_eq!(read_text(&path).unwrap(), "café ok.");
	}

	#[test]
	fn test_get_filename() {
		assert_eq!(get_filename("./data/hca.txt").unwrap(), "hca");
		assert_eq!(get_filename("raj.txt").unwrap(), "raj");
	}

	#[test]
	fn test_list_files_filters_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("a.bin"), b"").unwrap();
		fs::write(dir.path().join("b.txt"), b"").unwrap();
		fs::create_dir(dir.path().join("c.bin")).unwrap();
		assert_eq!(list_files(dir.path(), "bin").unwrap(), vec!["a.bin".to_owned()]);
	}

	#[test]
	fn test_normalize_folder_keeps_other_paths() {
		assert_eq!(normalize_folder("data/models"), PathBuf::from("data/models"));
		assert!(normalize_folder(".").is_absolute());
	}
}
