use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::DiscoveryError;

/// Reads a UTF-8 corpus and returns its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, terminators are not part of the lines
///
/// # Errors
/// Returns `DiscoveryError::Corpus` if the file is missing, unreadable or
/// not valid UTF-8. Nothing is extracted in that case.
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, DiscoveryError> {
	let path = filename.as_ref();
	let corpus_error = |source| DiscoveryError::Corpus { path: path.to_path_buf(), source };

	let mut contents = String::new();
	File::open(path)
		.map_err(corpus_error)?
		.read_to_string(&mut contents)
		.map_err(corpus_error)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/corpus.txt` + `"csv"` → `data/corpus.csv`
pub fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}
