use std::iter::FusedIterator;

use log::trace;

use crate::error::NgramError;

/// Extracts n-word phrases from an ordered word sequence.
///
/// The builder makes one attempt per starting position, sliding the window
/// by exactly one word each step. An attempt yields a phrase only when:
/// - `n` words remain from the starting position
/// - every word but the last of the window ends with an alphabetic
///   character (the window does not cross a sentence boundary)
/// - no word is left empty once its trailing punctuation is stripped
///
/// Accepted phrases are the stripped words joined by single spaces, with
/// any leading non-alphabetic characters removed.
///
/// "Alphabetic" is the Unicode Alphabetic property (`char::is_alphabetic`),
/// checked per character rather than per byte: accented and non-Latin
/// letters such as `é` or `ж` count as letters, while digits and symbols
/// count as punctuation.
///
/// The builder only borrows the words; [`PhraseBuilder::phrases`] can be
/// called any number of times to restart the sequence.
///
/// # Invariants
/// - `n` is always >= 1
/// - At most one phrase is produced per starting position
#[derive(Debug)]
pub struct PhraseBuilder<'a, S> {
	words: &'a [S],
	n: usize,
}

impl<S> Clone for PhraseBuilder<'_, S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S> Copy for PhraseBuilder<'_, S> {}

impl<'a, S: AsRef<str>> PhraseBuilder<'a, S> {
	/// Creates a builder producing phrases of `n` words.
	///
	/// # Errors
	/// Returns `NgramError::InvalidNgramSize` if `n == 0`.
	pub fn new(words: &'a [S], n: usize) -> Result<Self, NgramError> {
		if n == 0 {
			return Err(NgramError::InvalidNgramSize(n));
		}
		Ok(Self { words, n })
	}

	/// Returns the window size.
	pub fn ngram_size(&self) -> usize {
		self.n
	}

	/// Returns the number of starting positions (one per word).
	pub fn positions(&self) -> usize {
		self.words.len()
	}

	/// Builds the phrase starting at word index `start`.
	///
	/// Returns `None` when the attempt is rejected, including when fewer
	/// than `n` words remain.
	pub fn phrase_at(&self, start: usize) -> Option<String> {
		let end = start.checked_add(self.n)?;
		let window = self.words.get(start..end)?;

		let mut phrase = String::new();
		for (i, word) in window.iter().enumerate() {
			let word = word.as_ref();

			// Don't let a phrase continue past punctuation
			if i + 1 < window.len() && !ends_alphabetic(word) {
				trace!("window at {} crosses punctuation after {:?}", start, word);
				return None;
			}

			let stripped = word.trim_end_matches(|c: char| !c.is_alphabetic());
			if stripped.is_empty() {
				trace!("window at {} has no alphabetic word {:?}", start, word);
				return None;
			}

			if !phrase.is_empty() {
				phrase.push(' ');
			}
			phrase.push_str(stripped);
		}

		let phrase = phrase.trim_start_matches(|c: char| !c.is_alphabetic());
		if phrase.is_empty() {
			None
		} else {
			Some(phrase.to_owned())
		}
	}

	/// Returns a fresh iterator over every valid phrase, in word order.
	pub fn phrases(&self) -> Phrases<'a, S> {
		Phrases {
			builder: *self,
			position: 0,
		}
	}
}

impl<'a, S: AsRef<str>> IntoIterator for &PhraseBuilder<'a, S> {
	type Item = String;
	type IntoIter = Phrases<'a, S>;

	fn into_iter(self) -> Self::IntoIter {
		self.phrases()
	}
}

/// Returns true if the last character of `word` is alphabetic.
///
/// An empty word has no last character and is treated as punctuation.
fn ends_alphabetic(word: &str) -> bool {
	word.chars().next_back().is_some_and(char::is_alphabetic)
}

/// Lazy iterator over the phrases of a `PhraseBuilder`.
///
/// Created by [`PhraseBuilder::phrases`].
#[derive(Debug)]
pub struct Phrases<'a, S> {
	builder: PhraseBuilder<'a, S>,
	position: usize,
}

impl<S: AsRef<str>> Iterator for Phrases<'_, S> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		while self.position < self.builder.positions() {
			let start = self.position;
			self.position += 1;
			if let Some(phrase) = self.builder.phrase_at(start) {
				return Some(phrase);
			}
		}
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.builder.positions() - self.position))
	}
}

impl<S: AsRef<str>> FusedIterator for Phrases<'_, S> {}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect(words: &[&str], n: usize) -> Vec<String> {
		PhraseBuilder::new(words, n).unwrap().phrases().collect()
	}

	#[test]
	fn test_zero_size_rejected() {
		let words = ["a", "b"];
		assert!(matches!(
			PhraseBuilder::new(&words[..], 0),
			Err(NgramError::InvalidNgramSize(0))
		));
	}

	#[test]
	fn test_sentence_end_on_last_word_is_stripped() {
		assert_eq!(collect(&["The", "cat", "sat."], 2), vec!["The cat", "cat sat"]);
	}

	#[test]
	fn test_punctuation_inside_window_rejects() {
		assert!(collect(&["Hello,", "world"], 2).is_empty());
	}

	#[test]
	fn test_unigrams_repeat() {
		assert_eq!(collect(&["a", "a", "a"], 1), vec!["a", "a", "a"]);
	}

	#[test]
	fn test_empty_words() {
		let words: [&str; 0] = [];
		for n in 1..4 {
			assert!(collect(&words, n).is_empty());
		}
	}

	#[test]
	fn test_window_larger_than_input() {
		assert!(collect(&["one", "two"], 3).is_empty());
	}

	#[test]
	fn test_leading_punctuation_stripped() {
		assert_eq!(collect(&["\"(Well", "then"], 2), vec!["Well then"]);
		assert_eq!(collect(&["'quoted'"], 1), vec!["quoted"]);
	}

	#[test]
	fn test_trailing_run_stripped_on_last_word() {
		assert_eq!(collect(&["really", "?!..."], 2), Vec::<String>::new());
		assert_eq!(collect(&["really", "now?!..."], 2), vec!["really now"]);
	}

	#[test]
	fn test_all_punctuation_word_discards_attempt() {
		assert_eq!(collect(&["--", "dash", "--"], 1), vec!["dash"]);
		assert!(collect(&["wait", "--", "what"], 2).is_empty());
	}

	#[test]
	fn test_digits_are_not_alphabetic() {
		assert_eq!(collect(&["route", "66", "east"], 2), Vec::<String>::new());
		assert_eq!(collect(&["abc123"], 1), vec!["abc"]);
	}

	#[test]
	fn test_unicode_letters() {
		assert_eq!(collect(&["café,", "crème"], 1), vec!["café", "crème"]);
		assert_eq!(collect(&["déjà", "vu!"], 2), vec!["déjà vu"]);
	}

	#[test]
	fn test_inner_punctuation_kept() {
		assert_eq!(collect(&["don't", "stop"], 2), vec!["don't stop"]);
	}

	#[test]
	fn test_phrase_at_out_of_range() {
		let words = ["a", "b", "c"];
		let builder = PhraseBuilder::new(&words[..], 2).unwrap();
		assert_eq!(builder.phrase_at(1).as_deref(), Some("b c"));
		assert_eq!(builder.phrase_at(2), None);
		assert_eq!(builder.phrase_at(usize::MAX), None);
	}

	#[test]
	fn test_restartable() {
		let words = vec!["one".to_owned(), "two".to_owned(), "three".to_owned()];
		let builder = PhraseBuilder::new(&words, 2).unwrap();
		let first: Vec<String> = builder.phrases().collect();
		let second: Vec<String> = (&builder).into_iter().collect();
		assert_eq!(first, second);
		assert_eq!(first, vec!["one two", "two three"]);
	}

	#[test]
	fn test_accessors() {
		let words = ["a", "b", "c"];
		let builder = PhraseBuilder::new(&words[..], 3).unwrap();
		assert_eq!(builder.ngram_size(), 3);
		assert_eq!(builder.positions(), 3);
	}

	#[test]
	fn test_non_latin_letters() {
		assert_eq!(collect(&["привет", "мир."], 2), vec!["привет мир"]);
		assert!(collect(&["ω1", "x"], 2).is_empty());
	}

	#[test]
	fn test_size_hint_bounded_by_positions() {
		let words = ["a", "b", "c", "d"];
		let builder = PhraseBuilder::new(&words[..], 2).unwrap();
		let mut phrases = builder.phrases();
		assert_eq!(phrases.size_hint(), (0, Some(4)));
		phrases.next();
		assert_eq!(phrases.size_hint(), (0, Some(3)));
	}
}
