use std::cmp::Ordering;

use log::info;

use super::scorer::ScoreTables;

/// One ranked new-word candidate.
///
/// The component scores keep their optional form: `None` means the value
/// was never computed, and only `score` has the floor applied.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedCandidate {
	pub candidate: String,
	/// Length in characters.
	pub length: usize,
	/// `AMI · max(left entropy, right entropy)`, missing values floored.
	pub score: f64,
	pub ami: Option<f64>,
	pub left_entropy: Option<f64>,
	pub right_entropy: Option<f64>,
}

/// Top candidates of a single length.
#[derive(Clone, Debug, PartialEq)]
pub struct LengthBucket {
	pub length: usize,
	pub candidates: Vec<RankedCandidate>,
}

/// Total order over all multi-character candidates, best first.
///
/// # Invariants
/// - No single-character candidate is ever present
/// - Scores are non-increasing
/// - Equal scores keep the order in which candidates were supplied
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ranking {
	candidates: Vec<RankedCandidate>,
}

impl Ranking {
	/// Ranks `candidates` using the score maps.
	///
	/// # Parameters
	/// - `candidates`: every extracted candidate, in encounter order
	/// - `scores`: AMI and entropy maps
	/// - `floor`: substituted for an AMI or entropy that has no entry
	///
	/// # Behavior
	/// - Single characters are dropped before scoring.
	/// - `score = ami · max(left, right)` after floor substitution.
	/// - Sorting is stable and descending, no secondary key.
	pub fn rank<'a, I>(candidates: I, scores: &ScoreTables, floor: f64) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut ranked: Vec<RankedCandidate> = candidates
			.into_iter()
			.filter_map(|candidate| {
				let length = candidate.chars().count();
				if length <= 1 {
					return None;
				}

				let ami = scores.ami.get(candidate).copied();
				let left_entropy = scores.left_entropy.get(candidate).copied();
				let right_entropy = scores.right_entropy.get(candidate).copied();

				let boundary = left_entropy.unwrap_or(floor).max(right_entropy.unwrap_or(floor));
				let score = ami.unwrap_or(floor) * boundary;

				Some(RankedCandidate {
					candidate: candidate.to_owned(),
					length,
					score,
					ami,
					left_entropy,
					right_entropy,
				})
			})
			.collect();

		// Stable: ties keep encounter order. `+0.0` and `-0.0` compare equal.
		ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
		info!("ranked {} candidates", ranked.len());

		Self { candidates: ranked }
	}

	/// All ranked candidates, best first.
	pub fn as_slice(&self) -> &[RankedCandidate] {
		&self.candidates
	}

	pub fn iter(&self) -> impl Iterator<Item = &RankedCandidate> + '_ {
		self.candidates.iter()
	}

	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}

	/// Best `k` candidates of `length` characters, in ranking order.
	pub fn top_k(&self, length: usize, k: usize) -> Vec<&RankedCandidate> {
		self.candidates.iter().filter(|candidate| candidate.length == length).take(k).collect()
	}

	/// One bucket per length in `lengths`, each cut to `k` candidates.
	///
	/// Lengths without candidates produce an empty bucket.
	pub fn buckets<I>(&self, lengths: I, k: usize) -> Vec<LengthBucket>
	where
		I: IntoIterator<Item = usize>,
	{
		lengths
			.into_iter()
			.map(|length| LengthBucket {
				length,
				candidates: self.top_k(length, k).into_iter().cloned().collect(),
			})
			.collect()
	}
}
