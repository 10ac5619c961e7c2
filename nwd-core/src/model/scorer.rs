use indexmap::IndexMap;
use log::{debug, info};
use rayon::prelude::*;

use super::corpus_stats::CorpusStats;
use super::neighbor::NeighborTable;

/// Candidate count from which scores are computed on the rayon pool.
const PARALLEL_SCORE_THRESHOLD: usize = 500;

/// Per-candidate scores derived from frozen corpus statistics.
///
/// A candidate missing from a map has no score of that kind: its length
/// bucket had no occurrences (AMI) or it was never observed with a neighbor
/// on that side (entropy). Absence is resolved by the ranker, never here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreTables {
	/// Length-normalized pointwise mutual information.
	pub ami: IndexMap<String, f64>,

	/// Entropy (bits) of the left neighbor distribution.
	pub left_entropy: IndexMap<String, f64>,

	/// Entropy (bits) of the right neighbor distribution.
	pub right_entropy: IndexMap<String, f64>,
}

impl ScoreTables {
	/// Computes every score map from `stats`.
	pub fn compute(stats: &CorpusStats) -> Self {
		let scores = Self {
			ami: score_ami(stats),
			left_entropy: score_entropy(stats.table().left_neighbors()),
			right_entropy: score_entropy(stats.table().right_neighbors()),
		};
		info!(
			"scored {} candidates ({} left entropies, {} right entropies)",
			scores.ami.len(),
			scores.left_entropy.len(),
			scores.right_entropy.len()
		);
		scores
	}
}

/// Computes the AMI of a single candidate.
///
/// `AMI(w) = log2(p(w) / Π p(c)) / |w|` where `p(w)` is normalized by the
/// total of its own length and each `p(c)` by the single character total.
///
/// Returns `None` if a needed total is zero or a character was never counted.
/// For a single character the ratio is exactly one, so the result is `0.0`.
pub fn ami(stats: &CorpusStats, word: &str) -> Option<f64> {
	let table = stats.table();
	let totals = stats.length_totals();

	let length = word.chars().count();
	let count = table.frequency(word)?;
	let length_total = totals.get(length)? as f64;
	let char_total = totals.get(1)? as f64;

	let p_word = count as f64 / length_total;
	let mut p_chars = 1.0;
	for c in word.chars() {
		let mut buffer = [0u8; 4];
		let char_count = table.frequency(c.encode_utf8(&mut buffer))?;
		p_chars *= char_count as f64 / char_total;
	}

	Some((p_word / p_chars).log2() / length as f64)
}

/// Computes the AMI map over every extracted candidate.
///
/// Candidates whose length bucket has a zero total are skipped.
pub fn score_ami(stats: &CorpusStats) -> IndexMap<String, f64> {
	let totals = stats.length_totals();
	for length in 1..stats.max_length() {
		if totals.get(length).is_none() {
			debug!("no occurrence of length {length}, skipping its AMI");
		}
	}

	let words: Vec<&str> = stats.table().frequencies().keys().map(String::as_str).collect();
	score_candidates(&words, |word| ami(stats, word))
}

/// Computes the entropy map of one neighbor side.
///
/// Candidates with an empty distribution get no entry.
pub fn score_entropy(neighbors: &NeighborTable) -> IndexMap<String, f64> {
	let words: Vec<&str> = neighbors.iter().map(|(word, _)| word).collect();
	score_candidates(&words, |word| neighbors.get(word).and_then(|counts| counts.entropy()))
}

/// Applies `score` to every word, keeping the input order and dropping `None`s.
fn score_candidates<F>(words: &[&str], score: F) -> IndexMap<String, f64>
where
	F: Fn(&str) -> Option<f64> + Sync,
{
	let scored: Vec<Option<f64>> = if words.len() >= PARALLEL_SCORE_THRESHOLD {
		words.par_iter().map(|&word| score(word)).collect()
	} else {
		words.iter().map(|&word| score(word)).collect()
	};

	words
		.iter()
		.zip(scored)
		.filter_map(|(word, value)| value.map(|value| ((*word).to_owned(), value)))
		.collect()
}
