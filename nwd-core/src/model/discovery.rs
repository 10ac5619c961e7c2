use std::path::Path;

use log::info;

use super::corpus_stats::CorpusStats;
use super::ranker::{LengthBucket, RankedCandidate, Ranking};
use super::scorer::ScoreTables;
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::io;

/// Result of one complete new-word discovery run.
///
/// # Responsibilities
/// - Run extraction, derivation, scoring and ranking once, in that order
/// - Keep every intermediate table available for inspection and reporting
///
/// A run holds no state shared with other runs. A new corpus needs a new
/// `NewWordDiscovery`.
#[derive(Debug)]
pub struct NewWordDiscovery {
	config: DiscoveryConfig,
	stats: CorpusStats,
	scores: ScoreTables,
	ranking: Ranking,
}

impl NewWordDiscovery {
	/// Runs the whole pipeline over in-memory lines.
	///
	/// # Errors
	/// Returns `DiscoveryError::InvalidConfig` if `config` does not validate.
	/// An empty corpus is not an error and yields an empty ranking.
	pub fn from_lines<S>(lines: &[S], config: DiscoveryConfig) -> Result<Self, DiscoveryError>
	where
		S: AsRef<str> + Sync,
	{
		config.validate()?;

		let stats = CorpusStats::from_lines(lines, &config);
		let scores = ScoreTables::compute(&stats);
		let ranking = Ranking::rank(
			stats.table().frequencies().keys().map(String::as_str),
			&scores,
			config.score_floor,
		);

		Ok(Self { config, stats, scores, ranking })
	}

	/// Reads a corpus file and runs the pipeline over its lines.
	///
	/// # Errors
	/// - `DiscoveryError::InvalidConfig` is checked before the file is touched
	/// - `DiscoveryError::Corpus` if the file cannot be read
	pub fn from_file<P: AsRef<Path>>(path: P, config: DiscoveryConfig) -> Result<Self, DiscoveryError> {
		config.validate()?;
		let lines = io::read_file(&path)?;
		info!("loaded {} lines from {}", lines.len(), path.as_ref().display());
		Self::from_lines(&lines, config)
	}

	pub fn config(&self) -> &DiscoveryConfig {
		&self.config
	}

	pub fn stats(&self) -> &CorpusStats {
		&self.stats
	}

	pub fn scores(&self) -> &ScoreTables {
		&self.scores
	}

	pub fn ranking(&self) -> &Ranking {
		&self.ranking
	}

	/// Best `top_k` candidates of the given length.
	pub fn top_k(&self, length: usize) -> Vec<&RankedCandidate> {
		self.ranking.top_k(length, self.config.top_k)
	}

	/// One bucket per reported length (`2..max_length`), each cut to `top_k`.
	pub fn buckets(&self) -> Vec<LengthBucket> {
		self.ranking.buckets(self.config.bucket_lengths(), self.config.top_k)
	}
}
