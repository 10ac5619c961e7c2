use indexmap::IndexMap;

use super::neighbor::NeighborTable;
use crate::config::LeftBoundary;

/// Substring statistics accumulated over a set of lines.
///
/// The `NGramTable` is the explicit aggregator of the extraction phase:
/// each worker owns one, fills it from its lines and hands it back to be
/// merged. Nothing is shared while extracting.
///
/// # Responsibilities
/// - Count every contiguous substring of each requested length
/// - Record the characters directly left and right of each occurrence
/// - Merge with another table built from a different set of lines
///
/// # Invariants
/// - Every count is >= 1
/// - Keys keep first-encounter order (line by line, length by length,
///   position by position)
/// - Neighbor relations never cross line boundaries
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NGramTable {
	/// Occurrence count per candidate over all ingested lines.
	frequencies: IndexMap<String, u64>,

	/// Characters observed immediately before each candidate.
	left: NeighborTable,

	/// Characters observed immediately after each candidate.
	right: NeighborTable,
}

impl NGramTable {
	/// Extracts every substring of the lengths in `lengths` from `line`.
	///
	/// Lengths are processed in ascending iteration order, which fixes the
	/// first-encounter order of the keys.
	pub fn add_line<I>(&mut self, line: &str, lengths: I, left_boundary: LeftBoundary)
	where
		I: IntoIterator<Item = usize>,
	{
		let chars: Vec<char> = line.chars().collect();
		for length in lengths {
			self.add_ngrams(&chars, length, left_boundary);
		}
	}

	/// Extracts all substrings of a single `length` from a line already split into characters.
	///
	/// # Notes
	/// - Lines shorter than `length` contribute nothing.
	/// - The right neighbor is recorded whenever it lies inside the line.
	/// - The left neighbor is recorded according to `left_boundary`.
	pub fn add_ngrams(&mut self, chars: &[char], length: usize, left_boundary: LeftBoundary) {
		if length == 0 || chars.len() < length {
			return;
		}

		for start in 0..=chars.len() - length {
			let word: String = chars[start..start + length].iter().collect();

			if left_boundary.records_left(start) {
				self.left.record(&word, chars[start - 1]);
			}
			if let Some(next) = chars.get(start + length) {
				self.right.record(&word, *next);
			}

			*self.frequencies.entry(word).or_insert(0) += 1;
		}
	}

	/// Merges another table into this one.
	///
	/// Counts for matching candidates and neighbors are summed; candidates
	/// unknown to `self` are appended after the existing ones.
	pub fn merge(&mut self, other: &Self) {
		for (word, count) in &other.frequencies {
			if let Some(existing) = self.frequencies.get_mut(word) {
				*existing += *count;
			} else {
				self.frequencies.insert(word.clone(), *count);
			}
		}
		self.left.merge(&other.left);
		self.right.merge(&other.right);
	}

	/// Occurrence count of `word`, `None` if it was never extracted.
	pub fn frequency(&self, word: &str) -> Option<u64> {
		self.frequencies.get(word).copied()
	}

	/// All candidates and their counts, in first-encounter order.
	pub fn frequencies(&self) -> &IndexMap<String, u64> {
		&self.frequencies
	}

	pub fn left_neighbors(&self) -> &NeighborTable {
		&self.left
	}

	pub fn right_neighbors(&self) -> &NeighborTable {
		&self.right
	}

	/// Number of distinct candidates.
	pub fn len(&self) -> usize {
		self.frequencies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frequencies.is_empty()
	}
}
