use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Total number of occurrences per candidate length.
///
/// Used as the denominator when turning raw counts into empirical
/// probabilities: `p(w) = count(w) / total(|w|)`.
///
/// # Invariants
/// - For every stored length `n`, the total equals the sum of the counts of
///   all candidates with `n` characters
/// - Lengths with no occurrence are not stored
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LengthTotals {
	totals: BTreeMap<usize, u64>,
}

impl LengthTotals {
	/// Derives the totals from a frequency table.
	pub fn from_frequencies(frequencies: &IndexMap<String, u64>) -> Self {
		let mut totals = BTreeMap::new();
		for (word, count) in frequencies {
			if *count > 0 {
				*totals.entry(word.chars().count()).or_insert(0) += *count;
			}
		}
		Self { totals }
	}

	/// Total occurrences of candidates of `length` characters.
	///
	/// Returns `None` for a length with no occurrence, so callers cannot
	/// divide by a zero total by accident.
	pub fn get(&self, length: usize) -> Option<u64> {
		self.totals.get(&length).copied().filter(|total| *total > 0)
	}

	/// Iterates `(length, total)` pairs by ascending length.
	pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
		self.totals.iter().map(|(length, total)| (*length, *total))
	}

	pub fn is_empty(&self) -> bool {
		self.totals.is_empty()
	}
}
