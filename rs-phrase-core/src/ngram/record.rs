use std::fmt;

use serde::{Deserialize, Serialize};

/// A counted phrase stored in a `FrequencyTable`.
///
/// A `Record` is identified by its normalized `phrase` text. It is created
/// the first time the phrase is observed and its count grows on every
/// later occurrence.
///
/// ## Invariants
/// - `count` is always >= 1
/// - Only one record exists per distinct phrase within a table
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Record {
	/// Normalized phrase text (words joined by single spaces).
	phrase: String,
	/// Number of times the phrase was observed.
	count: usize,
}

impl Record {
	/// Creates a record for a first occurrence (count = 1).
	pub(crate) fn new(phrase: &str) -> Self {
		Self {
			phrase: phrase.to_owned(),
			count: 1,
		}
	}

	/// Records one more occurrence and returns the updated count.
	pub(crate) fn increment(&mut self) -> usize {
		self.count += 1;
		self.count
	}

	/// Returns the phrase text.
	pub fn phrase(&self) -> &str {
		&self.phrase
	}

	/// Returns how many times the phrase was observed.
	pub fn count(&self) -> usize {
		self.count
	}
}

/// Renders the record as a report line: `<phrase>, <count>`.
impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}", self.phrase, self.count)
	}
}
