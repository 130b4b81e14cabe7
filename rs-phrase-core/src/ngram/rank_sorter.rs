use std::cmp::Ordering;
use std::fmt;
use std::iter::Copied;
use std::slice;

use log::debug;

use super::frequency_table::FrequencyTable;
use super::record::Record;

/// Records of a `FrequencyTable` ordered by descending count.
///
/// The view borrows the table, so it cannot outlive it nor survive a
/// later insertion.
///
/// # Tie order
/// Records with equal counts are not sorted alphabetically. Ranking starts
/// from the table's extraction order (bucket index, then insertion order
/// within a bucket) and the partition rules of [`quicksort_by`] permute it
/// from there. The result is fully deterministic: the same insertions into
/// a table with the same bucket count always rank identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedView<'a> {
	records: Vec<&'a Record>,
}

impl<'a> RankedView<'a> {
	/// Returns the number of ranked records.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if the table was empty.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the ranked records as a slice.
	pub fn as_slice(&self) -> &[&'a Record] {
		&self.records
	}

	/// Returns at most `k` of the highest-ranked records.
	pub fn top(&self, k: usize) -> &[&'a Record] {
		&self.records[..k.min(self.records.len())]
	}

	/// Iterates over the records from highest to lowest count.
	pub fn iter(&self) -> Copied<slice::Iter<'_, &'a Record>> {
		self.records.iter().copied()
	}
}

impl<'a> IntoIterator for RankedView<'a> {
	type Item = &'a Record;
	type IntoIter = std::vec::IntoIter<&'a Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.into_iter()
	}
}

impl<'a, 'v> IntoIterator for &'v RankedView<'a> {
	type Item = &'a Record;
	type IntoIter = Copied<slice::Iter<'v, &'a Record>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Renders one `<phrase>, <count>` line per record.
impl fmt::Display for RankedView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for record in self {
			writeln!(f, "{}", record)?;
		}
		Ok(())
	}
}

/// Ranks every record of `table` by descending count.
///
/// Snapshots the records in extraction order, then sorts the snapshot in
/// place with [`quicksort_by`]. An empty table yields an empty view.
pub fn rank(table: &FrequencyTable) -> RankedView<'_> {
	let mut records: Vec<&Record> = table.records().collect();
	quicksort_by(&mut records, by_count_descending);
	debug!("ranked {} records ({} occurrences)", records.len(), table.total_count());
	RankedView { records }
}

/// Orders records so that higher counts come first.
///
/// `Less` means `l` ranks ahead of `r`.
pub fn by_count_descending(l: &&Record, r: &&Record) -> Ordering {
	r.count().cmp(&l.count())
}

/// Sorts `items` in place with a partition-exchange (quicksort) scheme.
///
/// `compare(a, b) == Less` means `a` belongs before `b`. Each range is
/// partitioned around its last element:
/// - a left index advances while items belong before the pivot
/// - a right index retreats while items belong after the pivot, never
///   passing the left index
/// - the two items are exchanged when both stop before crossing
/// - the pivot is finally exchanged into the left index
///
/// Equal items stop both scans, so ranges of equal keys split near their
/// middle instead of degenerating. The smaller side is sorted recursively
/// and the larger one iteratively, keeping stack depth logarithmic.
///
/// The sort is not stable.
pub fn quicksort_by<T, F>(items: &mut [T], compare: F)
where
	F: Fn(&T, &T) -> Ordering,
{
	sort_range(items, &compare);
}

fn sort_range<T, F>(mut items: &mut [T], compare: &F)
where
	F: Fn(&T, &T) -> Ordering,
{
	while items.len() > 1 {
		let split = partition(items, compare);
		let (left, right) = std::mem::take(&mut items).split_at_mut(split);
		let right = &mut right[1..];

		if left.len() < right.len() {
			sort_range(left, compare);
			items = right;
		} else {
			sort_range(right, compare);
			items = left;
		}
	}
}

/// Partitions `items` around its last element and returns the pivot's
/// final index.
///
/// Requires `items.len() >= 2`.
fn partition<T, F>(items: &mut [T], compare: &F) -> usize
where
	F: Fn(&T, &T) -> Ordering,
{
	let pivot = items.len() - 1;
	let mut left = 0;
	let mut right = pivot;

	loop {
		// The pivot compares Equal to itself, which bounds this scan
		while compare(&items[left], &items[pivot]) == Ordering::Less {
			left += 1;
		}

		while right > left {
			right -= 1;
			if compare(&items[right], &items[pivot]) != Ordering::Greater {
				break;
			}
		}

		if left >= right {
			break;
		}
		items.swap(left, right);
		left += 1;
	}

	items.swap(left, pivot);
	left
}

#[cfg(test)]
mod tests {
	use super::*;

	fn descending(a: &i64, b: &i64) -> Ordering {
		b.cmp(a)
	}

	fn assert_descending(values: &[i64]) {
		assert!(values.windows(2).all(|w| w[0] >= w[1]), "not descending: {:?}", values);
	}

	#[test]
	fn test_empty_and_single() {
		let mut empty: Vec<i64> = Vec::new();
		quicksort_by(&mut empty, descending);
		assert!(empty.is_empty());

		let mut single = vec![42];
		quicksort_by(&mut single, descending);
		assert_eq!(single, vec![42]);
	}

	#[test]
	fn test_small_cases() {
		let mut values = vec![2, 1];
		quicksort_by(&mut values, descending);
		assert_eq!(values, vec![2, 1]);

		let mut values = vec![1, 2];
		quicksort_by(&mut values, descending);
		assert_eq!(values, vec![2, 1]);

		let mut values = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
		quicksort_by(&mut values, descending);
		assert_eq!(values, vec![9, 6, 5, 5, 5, 4, 3, 3, 2, 1, 1]);
	}

	#[test]
	fn test_all_equal_terminates() {
		for len in [2, 3, 4, 5, 16, 1000, 10_000] {
			// Tag each item so the output can be checked as a permutation
			let mut items: Vec<(i64, usize)> = (0..len).map(|id| (7, id)).collect();
			quicksort_by(&mut items, |a, b| b.0.cmp(&a.0));

			let mut ids: Vec<usize> = items.iter().map(|&(_, id)| id).collect();
			ids.sort_unstable();
			assert_eq!(ids, (0..len).collect::<Vec<_>>());
		}
	}

	#[test]
	fn test_all_equal_splits_in_middle() {
		let mut items = vec![5i64; 9];
		assert_eq!(partition(&mut items, &descending), 4);
	}

	#[test]
	fn test_two_distinct_keys() {
		let mut values: Vec<i64> = (0..2000).map(|i| i % 2).collect();
		quicksort_by(&mut values, descending);
		assert_descending(&values);
		assert_eq!(values.iter().filter(|&&v| v == 1).count(), 1000);
	}

	#[test]
	fn test_presorted_inputs() {
		let mut ascending: Vec<i64> = (0..5000).collect();
		quicksort_by(&mut ascending, descending);
		assert_eq!(ascending, (0..5000).rev().collect::<Vec<_>>());

		let mut already: Vec<i64> = (0..5000).rev().collect();
		quicksort_by(&mut already, descending);
		assert_eq!(already, (0..5000).rev().collect::<Vec<_>>());
	}

	#[test]
	fn test_matches_library_sort() {
		let mut values: Vec<i64> = (0..3000).map(|i| (i * 7919 + 13) % 257).collect();
		let mut expected = values.clone();
		expected.sort_by(|a, b| b.cmp(a));

		quicksort_by(&mut values, descending);
		assert_eq!(values, expected);
	}

	#[test]
	fn test_rank_empty_table() {
		let table = FrequencyTable::new();
		let ranked = rank(&table);
		assert!(ranked.is_empty());
		assert_eq!(ranked.to_string(), "");
	}

	#[test]
	fn test_rank_orders_by_count() {
		let mut table = FrequencyTable::with_buckets(1).unwrap();
		table.extend(["x", "y", "y", "y", "z", "z"]);

		let ranked = rank(&table);
		let pairs: Vec<(&str, usize)> = ranked.iter().map(|r| (r.phrase(), r.count())).collect();
		assert_eq!(pairs, vec![("y", 3), ("z", 2), ("x", 1)]);
	}

	#[test]
	fn test_tie_order_follows_partition() {
		// One bucket: extraction order is a, b, c
		let mut table = FrequencyTable::with_buckets(1).unwrap();
		table.extend(["a", "b", "c"]);

		let phrases: Vec<&str> = rank(&table).iter().map(Record::phrase).collect();
		assert_eq!(phrases, vec!["b", "c", "a"]);
	}

	#[test]
	fn test_rank_is_repeatable() {
		let mut table = FrequencyTable::with_buckets(13).unwrap();
		for i in 0..200 {
			table.insert_or_increment(&format!("phrase {}", i % 37));
		}
		assert_eq!(rank(&table), rank(&table));
	}

	#[test]
	fn test_owned_view_iterates_in_rank_order() {
		let mut table = FrequencyTable::new();
		table.extend(["rare", "common", "common", "common", "middle", "middle"]);

		let owned: Vec<&Record> = rank(&table).into_iter().collect();
		let phrases: Vec<&str> = owned.iter().map(|r| r.phrase()).collect();
		assert_eq!(phrases, vec!["common", "middle", "rare"]);
	}

	#[test]
	fn test_top_and_display() {
		let mut table = FrequencyTable::new();
		table.extend(["the cat", "the cat", "cat sat"]);

		let ranked = rank(&table);
		assert_eq!(ranked.top(1).len(), 1);
		assert_eq!(ranked.top(1)[0].phrase(), "the cat");
		assert_eq!(ranked.top(10).len(), 2);
		assert_eq!(ranked.to_string(), "the cat, 2\ncat sat, 1\n");
	}
}
