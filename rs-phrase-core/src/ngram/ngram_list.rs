use std::fmt;

use log::debug;

use super::config::NgramConfig;
use super::frequency_table::FrequencyTable;
use super::phrase_builder::PhraseBuilder;
use super::rank_sorter::{rank, RankedView};
use crate::error::NgramError;

/// Phrase counts of one word sequence, for a fixed n-gram size.
///
/// Runs the whole pipeline at construction: every valid phrase from a
/// [`PhraseBuilder`] is counted in a [`FrequencyTable`]. Ranking happens
/// on demand through [`NgramList::rank`].
///
/// # Display
/// Renders the full report, ranked at render time:
/// ```text
/// List of 2 word ngrams and counts
/// --------------------------------
/// the cat, 2
/// cat sat, 1
/// ```
#[derive(Clone, Debug)]
pub struct NgramList {
	ngram_size: usize,
	table: FrequencyTable,
}

impl NgramList {
	/// Counts the `ngram_size`-word phrases of `words` using the default
	/// bucket count.
	///
	/// # Errors
	/// Returns `NgramError::InvalidNgramSize` if `ngram_size == 0`.
	pub fn new<S: AsRef<str>>(ngram_size: usize, words: &[S]) -> Result<Self, NgramError> {
		Self::with_config(NgramConfig::new(ngram_size)?, words)
	}

	/// Counts the phrases of `words` according to `config`.
	///
	/// # Errors
	/// Returns an error if `config` fails validation.
	pub fn with_config<S: AsRef<str>>(config: NgramConfig, words: &[S]) -> Result<Self, NgramError> {
		config.validate()?;

		let builder = PhraseBuilder::new(words, config.ngram_size)?;
		let mut table = FrequencyTable::with_buckets(config.bucket_count)?;
		table.extend(&builder);

		debug!(
			"counted {} {}-word phrases ({} distinct) from {} words",
			table.total_count(),
			builder.ngram_size(),
			table.len(),
			words.len()
		);

		Ok(Self {
			ngram_size: builder.ngram_size(),
			table,
		})
	}

	/// Returns the number of words per phrase.
	pub fn ngram_size(&self) -> usize {
		self.ngram_size
	}

	/// Returns the underlying frequency table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Ranks the counted phrases by descending count.
	pub fn rank(&self) -> RankedView<'_> {
		rank(&self.table)
	}

	/// Writes the report header followed by the ranked phrases.
	///
	/// With `limit`, only the `limit` most frequent phrases are listed.
	pub fn write_report<W: fmt::Write>(&self, out: &mut W, limit: Option<usize>) -> fmt::Result {
		writeln!(out, "List of {} word ngrams and counts", self.ngram_size)?;
		writeln!(out, "--------------------------------")?;

		let ranked = self.rank();
		let records = match limit {
			Some(k) => ranked.top(k),
			None => ranked.as_slice(),
		};
		for record in records {
			writeln!(out, "{}", record)?;
		}
		Ok(())
	}
}

impl fmt::Display for NgramList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_report(f, None)
	}
}
