use thiserror::Error;

/// Errors raised while configuring or feeding a phrase counter.
///
/// Counting itself never fails: degenerate input simply yields no phrases.
/// Only invalid construction parameters and the word-list reader can fail.
#[derive(Debug, Error)]
pub enum NgramError {
	/// The n-gram size must be at least 1.
	#[error("n-gram size must be >= 1, got {0}")]
	InvalidNgramSize(usize),

	/// The bucket count is outside `1..=MAX_BUCKET_COUNT`.
	#[error("bucket count must be between 1 and {max}, got {0}", max = crate::ngram::config::MAX_BUCKET_COUNT)]
	InvalidBucketCount(usize),

	/// Reading the word list failed.
	#[error("failed to read word list: {0}")]
	Io(#[from] std::io::Error),
}
