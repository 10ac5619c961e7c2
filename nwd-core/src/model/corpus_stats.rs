use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use super::frequency_index::LengthTotals;
use super::ngram_table::NGramTable;
use crate::config::DiscoveryConfig;

/// Number of chunks handed out per worker.
///
/// Several small chunks per worker keep threads busy when line lengths vary.
const CHUNKS_PER_WORKER: usize = 8;

/// Below this many lines the corpus is extracted on the calling thread.
const PARALLEL_LINE_THRESHOLD: usize = 256;

/// Frozen corpus statistics: the merged extraction table and its length totals.
///
/// This struct manages:
/// - `table`: candidate counts and left/right neighbor distributions
/// - `length_totals`: the per-length normalization denominators
/// - the length bound the table was built with
///
/// A `CorpusStats` is produced once per corpus and never updated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CorpusStats {
	max_length: usize,
	lines: usize,
	table: NGramTable,
	length_totals: LengthTotals,
}

impl CorpusStats {
	/// Extracts statistics from `lines`, in parallel when the configuration
	/// and the corpus size allow it.
	///
	/// The result does not depend on the number of workers.
	pub fn from_lines<S>(lines: &[S], config: &DiscoveryConfig) -> Self
	where
		S: AsRef<str> + Sync,
	{
		let workers = config.effective_workers();
		let table = if workers <= 1 || lines.len() < PARALLEL_LINE_THRESHOLD {
			Self::extract_sequential(lines, config)
		} else {
			Self::extract_parallel(lines, config, workers)
		};
		Self::from_table(table, lines.len(), config)
	}

	/// Freezes an already merged table.
	///
	/// Useful when partial tables are built elsewhere and merged by the caller.
	pub fn from_table(table: NGramTable, lines: usize, config: &DiscoveryConfig) -> Self {
		let length_totals = LengthTotals::from_frequencies(table.frequencies());
		for (length, total) in length_totals.iter() {
			debug!("length {length}: {total} occurrences");
		}
		info!(
			"extracted {} candidates from {} lines (lengths 1..{}, {:?} left boundary)",
			table.len(),
			lines,
			config.max_length,
			config.left_boundary
		);

		Self {
			max_length: config.max_length,
			lines,
			table,
			length_totals,
		}
	}

	/// Single forward pass over all lines.
	pub fn extract_sequential<S: AsRef<str>>(lines: &[S], config: &DiscoveryConfig) -> NGramTable {
		let mut table = NGramTable::default();
		for line in lines {
			table.add_line(line.as_ref(), config.extracted_lengths(), config.left_boundary);
		}
		table
	}

	/// Splits the lines into contiguous chunks, extracts each chunk on its own
	/// thread and merges the partial tables.
	///
	/// # Behavior
	/// - Chunk count is `workers * CHUNKS_PER_WORKER`, never more than one
	///   chunk per line.
	/// - Partial tables are sent back over an MPSC channel with their chunk index.
	/// - Partial tables are merged in chunk order, so candidate order is the
	///   same as with `extract_sequential`.
	pub fn extract_parallel<S>(lines: &[S], config: &DiscoveryConfig, workers: usize) -> NGramTable
	where
		S: AsRef<str> + Sync,
	{
		if lines.is_empty() {
			return NGramTable::default();
		}

		let chunks = workers.max(1).saturating_mul(CHUNKS_PER_WORKER).min(lines.len());
		let chunk_size = lines.len().div_ceil(chunks);
		debug!("extracting {} lines in chunks of {} on {} workers", lines.len(), chunk_size, workers);

		let mut partials: Vec<Option<NGramTable>> = Vec::new();
		thread::scope(|scope| {
			let (tx, rx) = mpsc::channel();
			for (index, chunk) in lines.chunks(chunk_size).enumerate() {
				let tx = tx.clone();
				scope.spawn(move || {
					let partial = Self::extract_sequential(chunk, config);
					// The receiver outlives every worker inside the scope
					let _ = tx.send((index, partial));
				});
				partials.push(None);
			}
			drop(tx);

			for (index, partial) in rx.iter() {
				partials[index] = Some(partial);
			}
		});

		let mut table = NGramTable::default();
		for partial in partials.iter().flatten() {
			table.merge(partial);
		}
		table
	}

	/// Exclusive upper bound of the extracted lengths.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Number of corpus lines the statistics were built from.
	pub fn lines(&self) -> usize {
		self.lines
	}

	pub fn table(&self) -> &NGramTable {
		&self.table
	}

	pub fn length_totals(&self) -> &LengthTotals {
		&self.length_totals
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}
