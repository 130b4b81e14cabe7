use serde::{Deserialize, Serialize};

use crate::error::NgramError;

/// Default number of hash table buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 10000;

/// Largest accepted bucket count.
///
/// Buckets are allocated up front, so the count is bounded to keep a
/// caller-supplied value from exhausting memory.
pub const MAX_BUCKET_COUNT: usize = 1 << 20;

/// Default phrase length, in words.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Parameters for building an `NgramList`.
///
/// # Invariants
/// - `ngram_size` >= 1
/// - `1 <= bucket_count <= MAX_BUCKET_COUNT`
///
/// Both are checked by [`NgramConfig::validate`], which every constructor
/// taking a config calls before counting starts. Fields missing from a
/// deserialized config fall back to their defaults.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NgramConfig {
	/// Number of words per phrase.
	#[serde(default = "default_ngram_size")]
	pub ngram_size: usize,

	/// Fixed number of buckets in the frequency table.
	#[serde(default = "default_bucket_count")]
	pub bucket_count: usize,
}

fn default_ngram_size() -> usize {
	DEFAULT_NGRAM_SIZE
}

fn default_bucket_count() -> usize {
	DEFAULT_BUCKET_COUNT
}

impl Default for NgramConfig {
	fn default() -> Self {
		Self {
			ngram_size: default_ngram_size(),
			bucket_count: default_bucket_count(),
		}
	}
}

impl NgramConfig {
	/// Creates a config for phrases of `ngram_size` words, with the
	/// default bucket count.
	///
	/// # Errors
	/// Returns `NgramError::InvalidNgramSize` if `ngram_size == 0`.
	pub fn new(ngram_size: usize) -> Result<Self, NgramError> {
		let config = Self {
			ngram_size,
			..Self::default()
		};
		config.validate()?;
		Ok(config)
	}

	/// Sets the bucket count.
	///
	/// # Errors
	/// Returns `NgramError::InvalidBucketCount` if `bucket_count` is 0 or
	/// above `MAX_BUCKET_COUNT`.
	pub fn with_bucket_count(mut self, bucket_count: usize) -> Result<Self, NgramError> {
		self.bucket_count = bucket_count;
		self.validate()?;
		Ok(self)
	}

	/// Checks the invariants.
	pub fn validate(&self) -> Result<(), NgramError> {
		if self.ngram_size == 0 {
			return Err(NgramError::InvalidNgramSize(self.ngram_size));
		}
		if !(1..=MAX_BUCKET_COUNT).contains(&self.bucket_count) {
			return Err(NgramError::InvalidBucketCount(self.bucket_count));
		}
		Ok(())
	}
}
