use indexmap::IndexMap;
use indexmap::map::Entry;

/// Counts of the characters observed immediately next to one candidate.
///
/// Conceptually this is the outgoing edge set of a candidate on one side
/// (left or right), weighted by the number of observations.
///
/// ## Invariants
/// - Each stored count is strictly positive
/// - Characters are kept in first-observation order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
	/// Example: { '的' => 42, '了' => 3 }
	counts: IndexMap<char, u64>,
}

impl NeighborCounts {
	/// Records one observation of `neighbor`.
	pub fn add(&mut self, neighbor: char) {
		*self.counts.entry(neighbor).or_insert(0) += 1;
	}

	/// Adds every count of `other` into this distribution.
	pub fn merge(&mut self, other: &Self) {
		for (neighbor, count) in &other.counts {
			*self.counts.entry(*neighbor).or_insert(0) += *count;
		}
	}

	/// Number of observations of `neighbor`, zero if never seen.
	pub fn get(&self, neighbor: char) -> u64 {
		self.counts.get(&neighbor).copied().unwrap_or(0)
	}

	/// Total number of observations.
	pub fn total(&self) -> u64 {
		self.counts.values().sum()
	}

	/// Number of distinct neighbor characters.
	pub fn distinct(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
		self.counts.iter().map(|(neighbor, count)| (*neighbor, *count))
	}

	/// Shannon entropy of the distribution, in bits.
	///
	/// Returns `None` when nothing was observed. Otherwise the value lies in
	/// `[0, log2(distinct)]` and is exactly `0.0` for a single neighbor.
	pub fn entropy(&self) -> Option<f64> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let total = total as f64;
		let entropy = self.counts.values().fold(0.0, |entropy, count| {
			let p = *count as f64 / total;
			entropy - p * p.log2()
		});
		Some(entropy)
	}
}

/// Two-level neighbor container: candidate → neighbor character → count.
///
/// One table is kept for left neighbors and one for right neighbors. A
/// candidate only gets an entry once it has been observed with a neighbor
/// on that side, so "never observed" stays distinguishable from any
/// computed value.
///
/// Merging adds counts elementwise. The operation is associative and
/// commutative on counts; merging in a fixed order also fixes key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborTable {
	entries: IndexMap<String, NeighborCounts>,
}

impl NeighborTable {
	/// Records that `neighbor` was seen next to an occurrence of `candidate`.
	pub fn record(&mut self, candidate: &str, neighbor: char) {
		// Avoids allocating the key for already known candidates
		if let Some(counts) = self.entries.get_mut(candidate) {
			counts.add(neighbor);
			return;
		}
		let mut counts = NeighborCounts::default();
		counts.add(neighbor);
		self.entries.insert(candidate.to_owned(), counts);
	}

	/// Merges another table into this one, summing counts per candidate and neighbor.
	pub fn merge(&mut self, other: &Self) {
		for (candidate, counts) in &other.entries {
			match self.entries.entry(candidate.clone()) {
				Entry::Occupied(mut existing) => existing.get_mut().merge(counts),
				Entry::Vacant(slot) => {
					slot.insert(counts.clone());
				}
			}
		}
	}

	pub fn get(&self, candidate: &str) -> Option<&NeighborCounts> {
		self.entries.get(candidate)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates candidates in first-observation order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &NeighborCounts)> + '_ {
		self.entries.iter().map(|(candidate, counts)| (candidate.as_str(), counts))
	}
}
