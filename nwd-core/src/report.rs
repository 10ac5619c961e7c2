//! Spreadsheet-friendly export of ranked candidates.
//!
//! Reports are UTF-8 CSV files starting with a byte-order mark, which lets
//! spreadsheet tools pick the right encoding for non-Latin scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::DiscoveryError;
use crate::model::ranker::{LengthBucket, RankedCandidate};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Serialize)]
struct Row<'a> {
	candidate: &'a str,
	length: usize,
	score: f64,
	ami: Option<f64>,
	left_entropy: Option<f64>,
	right_entropy: Option<f64>,
}

impl<'a> From<&'a RankedCandidate> for Row<'a> {
	fn from(candidate: &'a RankedCandidate) -> Self {
		Self {
			candidate: &candidate.candidate,
			length: candidate.length,
			score: candidate.score,
			ami: candidate.ami,
			left_entropy: candidate.left_entropy,
			right_entropy: candidate.right_entropy,
		}
	}
}

/// Writes the buckets as CSV to `writer`.
///
/// Rows are grouped by bucket in the given order, each bucket in ranking
/// order. Missing AMI or entropy values are left empty.
pub fn write_csv<W: Write>(mut writer: W, buckets: &[LengthBucket]) -> Result<(), DiscoveryError> {
	writer.write_all(UTF8_BOM)?;

	// Header written by hand so an empty report still has one
	let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
	csv.write_record(["candidate", "length", "score", "ami", "left_entropy", "right_entropy"])?;

	for bucket in buckets {
		for candidate in &bucket.candidates {
			csv.serialize(Row::from(candidate))?;
		}
	}
	csv.flush()?;
	Ok(())
}

/// Writes the buckets to a CSV file, replacing any existing file.
pub fn write_csv_file<P: AsRef<Path>>(path: P, buckets: &[LengthBucket]) -> Result<(), DiscoveryError> {
	let file = File::create(path)?;
	write_csv(BufWriter::new(file), buckets)
}
