use log::debug;

use super::config::{DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT};
use super::record::Record;
use crate::error::NgramError;

/// Hash table counting occurrences of phrase text.
///
/// The table has a fixed number of buckets chosen at construction and
/// never resizes. Collisions are resolved by chaining: each bucket holds an
/// ordered list of indices into a single record arena, in the order the
/// phrases were first inserted.
///
/// # Responsibilities
/// - Own every `Record` (dropped all together with the table)
/// - Insert a new phrase or increment an existing one
/// - Expose records in bucket order, which defines ranking tie order
///
/// # Invariants
/// - At most one record per distinct phrase
/// - Every bucket index is `< bucket_count`
/// - The sum of all counts equals the number of insertions
#[derive(Clone, Debug)]
pub struct FrequencyTable {
	/// Chains of arena indices, one per bucket.
	buckets: Vec<Vec<usize>>,

	/// Record storage in first-insertion order.
	records: Vec<Record>,

	/// Number of insertions performed (sum of counts).
	total: usize,
}

impl FrequencyTable {
	/// Creates an empty table with the default bucket count.
	pub fn new() -> Self {
		Self::empty(DEFAULT_BUCKET_COUNT)
	}

	/// Creates an empty table with `bucket_count` buckets.
	///
	/// # Errors
	/// Returns `NgramError::InvalidBucketCount` if `bucket_count` is 0 or
	/// above `MAX_BUCKET_COUNT`.
	pub fn with_buckets(bucket_count: usize) -> Result<Self, NgramError> {
		if !(1..=MAX_BUCKET_COUNT).contains(&bucket_count) {
			return Err(NgramError::InvalidBucketCount(bucket_count));
		}
		Ok(Self::empty(bucket_count))
	}

	fn empty(bucket_count: usize) -> Self {
		debug!("creating frequency table with {} buckets", bucket_count);
		Self {
			buckets: vec![Vec::new(); bucket_count],
			records: Vec::new(),
			total: 0,
		}
	}

	/// Computes the bucket of `phrase`.
	///
	/// Shift-add-xor rolling hash over the UTF-8 bytes, reduced modulo the
	/// bucket count at every step so the running key stays in range.
	fn bucket_index(&self, phrase: &str) -> usize {
		let bucket_count = self.buckets.len() as u64;
		let key = phrase.bytes().fold(0u64, |key, byte| {
			((key << 5).wrapping_add(key) ^ u64::from(byte)) % bucket_count
		});
		key as usize
	}

	/// Looks up the arena index of `phrase` within `bucket`.
	fn find(&self, bucket: usize, phrase: &str) -> Option<usize> {
		self.buckets[bucket]
			.iter()
			.copied()
			.find(|&index| self.records[index].phrase() == phrase)
	}

	/// Returns the record for `phrase`, if it has been inserted.
	pub fn lookup(&self, phrase: &str) -> Option<&Record> {
		let bucket = self.bucket_index(phrase);
		self.find(bucket, phrase).map(|index| &self.records[index])
	}

	/// Records one occurrence of `phrase` and returns its updated count.
	///
	/// - If the phrase is unknown, a record with count 1 is appended to
	///   the end of its bucket chain.
	/// - Otherwise the existing record's count is incremented.
	pub fn insert_or_increment(&mut self, phrase: &str) -> usize {
		let bucket = self.bucket_index(phrase);
		self.total += 1;

		match self.find(bucket, phrase) {
			Some(index) => self.records[index].increment(),
			None => {
				self.buckets[bucket].push(self.records.len());
				self.records.push(Record::new(phrase));
				1
			}
		}
	}

	/// Returns the number of distinct phrases.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if nothing has been inserted.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the sum of all counts.
	pub fn total_count(&self) -> usize {
		self.total
	}

	/// Returns the fixed number of buckets.
	pub fn bucket_count(&self) -> usize {
		self.buckets.len()
	}

	/// Iterates over records in extraction order.
	///
	/// Buckets are visited by increasing index; within a bucket, records
	/// come in the order they were first inserted. Ranking starts from
	/// this order, which makes its tie order reproducible.
	pub fn records(&self) -> impl Iterator<Item = &Record> {
		self.buckets
			.iter()
			.flatten()
			.map(|&index| &self.records[index])
	}
}

impl Default for FrequencyTable {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> Extend<&'a str> for FrequencyTable {
	fn extend<I: IntoIterator<Item = &'a str>>(&mut self, phrases: I) {
		for phrase in phrases {
			self.insert_or_increment(phrase);
		}
	}
}

impl Extend<String> for FrequencyTable {
	fn extend<I: IntoIterator<Item = String>>(&mut self, phrases: I) {
		for phrase in phrases {
			self.insert_or_increment(&phrase);
		}
	}
}
