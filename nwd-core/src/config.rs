use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DiscoveryError;

/// Default exclusive upper bound on extracted substring lengths.
pub const DEFAULT_MAX_LENGTH: usize = 5;

/// Default number of candidates kept per length bucket.
pub const DEFAULT_TOP_K: usize = 10;

/// Default value substituted for a missing AMI or entropy at ranking time.
pub const DEFAULT_SCORE_FLOOR: f64 = 1e-3;

/// Largest accepted `max_length`.
pub const MAX_MAX_LENGTH: usize = 32;

/// Extraction threads allowed per CPU; larger `workers` values are clamped.
pub const MAX_WORKERS_PER_CPU: usize = 4;

/// Rule deciding which left neighbors are recorded near the start of a line.
///
/// The right side always records every in-line neighbor. The left side can
/// either mirror it (`Symmetric`) or follow the historical stricter rule
/// (`Strict`), which only records a left neighbor when the
/// occurrence starts at character index 2 or later. Under `Strict` the first
/// character of a line is never counted as anyone's left neighbor.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeftBoundary {
	#[default]
	Strict,
	Symmetric,
}

impl LeftBoundary {
	/// Returns `true` if an occurrence starting at `start` records its left neighbor.
	pub fn records_left(self, start: usize) -> bool {
		match self {
			LeftBoundary::Strict => start > 1,
			LeftBoundary::Symmetric => start > 0,
		}
	}
}

impl std::str::FromStr for LeftBoundary {
	type Err = DiscoveryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"strict" => Ok(LeftBoundary::Strict),
			"symmetric" => Ok(LeftBoundary::Symmetric),
			_ => Err(DiscoveryError::InvalidConfig(format!(
				"unknown left boundary '{s}', expected 'strict' or 'symmetric'"
			))),
		}
	}
}

/// Parameters of a discovery run.
///
/// # Invariants (checked by `validate`)
/// - `2 <= max_length <= MAX_MAX_LENGTH`, so single characters are always extracted
/// - `score_floor` is finite
///
/// Unknown keys in a configuration file are rejected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
	/// Substring lengths in `[1, max_length - 1]` are extracted.
	pub max_length: usize,

	/// Number of candidates kept in each length bucket.
	pub top_k: usize,

	/// Fallback for missing AMI / entropy values, applied only by the ranker.
	pub score_floor: f64,

	/// Left-edge neighbor rule used during extraction.
	pub left_boundary: LeftBoundary,

	/// Extraction workers. `0` means one per CPU, `1` forces a sequential pass.
	pub workers: usize,
}

impl Default for DiscoveryConfig {
	fn default() -> Self {
		Self {
			max_length: DEFAULT_MAX_LENGTH,
			top_k: DEFAULT_TOP_K,
			score_floor: DEFAULT_SCORE_FLOOR,
			left_boundary: LeftBoundary::default(),
			workers: 0,
		}
	}
}

impl DiscoveryConfig {
	/// Parses a configuration from TOML text. Missing keys take their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	/// Loads and validates a configuration file.
	///
	/// # Errors
	/// - `DiscoveryError::Io` if the file cannot be read
	/// - `DiscoveryError::ConfigParse` if it is not valid TOML for this struct
	/// - `DiscoveryError::InvalidConfig` if a value is out of range
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DiscoveryError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)?;
		let config = Self::from_toml_str(&content).map_err(|source| DiscoveryError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the invariants listed on the struct.
	pub fn validate(&self) -> Result<(), DiscoveryError> {
		if !(2..=MAX_MAX_LENGTH).contains(&self.max_length) {
			return Err(DiscoveryError::InvalidConfig(format!(
				"max_length must be in 2..={MAX_MAX_LENGTH}, got {}",
				self.max_length
			)));
		}
		if !self.score_floor.is_finite() {
			return Err(DiscoveryError::InvalidConfig(format!(
				"score_floor must be finite, got {}",
				self.score_floor
			)));
		}
		Ok(())
	}

	/// Substring lengths extracted from every line.
	pub fn extracted_lengths(&self) -> std::ops::Range<usize> {
		1..self.max_length
	}

	/// Lengths reported in the output, single characters excluded.
	pub fn bucket_lengths(&self) -> std::ops::Range<usize> {
		2..self.max_length
	}

	/// Number of extraction workers, resolving `0` to the CPU count and
	/// clamping to `MAX_WORKERS_PER_CPU` threads per CPU.
	pub fn effective_workers(&self) -> usize {
		let cpus = num_cpus::get();
		if self.workers == 0 { cpus } else { self.workers.min(cpus.saturating_mul(MAX_WORKERS_PER_CPU)) }
	}
}
