use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::NgramError;

/// Reads a text file and returns its words as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on any Unicode whitespace (see [`split_words`])
pub fn read_words<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, NgramError> {
	let mut contents = String::new();
	File::open(&filename)?.read_to_string(&mut contents)?;
	let words = split_words(&contents);
	debug!("read {} words from {}", words.len(), filename.as_ref().display());
	Ok(words)
}

/// Splits raw text into its ordered word sequence.
///
/// Words are maximal runs of non-whitespace characters. Punctuation and
/// case are kept untouched; phrase normalization happens later.
///
/// Example:
/// `"The cat\n sat."` → `["The", "cat", "sat."]`
pub fn split_words(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}
