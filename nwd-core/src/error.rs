use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the discovery pipeline.
///
/// Only failures that prevent a run from producing results are represented
/// here. An empty corpus, a length bucket without occurrences or a candidate
/// without neighbor observations are valid outcomes, not errors.
#[derive(Debug, Error)]
pub enum DiscoveryError {
	/// The corpus could not be opened or read. Raised before any extraction.
	#[error("failed to read corpus {}: {source}", path.display())]
	Corpus {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A configuration value is outside its accepted range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// A configuration file exists but is not valid TOML for `DiscoveryConfig`.
	#[error("failed to parse configuration {}: {source}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// The tabular report could not be written.
	#[error("failed to write report: {0}")]
	Report(#[from] csv::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
