//! Statistics pipeline for new-word discovery.
//!
//! This module provides, in pipeline order:
//! - Substring extraction with neighbor tracking (`NGramTable`, `NeighborTable`)
//! - Frozen corpus statistics and per-length totals (`CorpusStats`, `LengthTotals`)
//! - AMI and boundary entropy scoring (`ScoreTables`)
//! - Composite ranking and length buckets (`Ranking`)
//! - The end-to-end run (`NewWordDiscovery`)

/// Character counts observed next to each candidate.
///
/// Holds the per-candidate distribution and the two-level table
/// (candidate → character → count) with its merge operation.
pub mod neighbor;

/// Extraction aggregator: candidate counts plus left/right neighbors.
///
/// Built per line set and merged, so extraction can run per chunk.
pub mod ngram_table;

/// Total occurrences per candidate length.
pub mod frequency_index;

/// Merged, read-only statistics of a corpus.
///
/// Supports sequential and chunk-parallel extraction.
pub mod corpus_stats;

/// AMI and boundary entropy scores.
pub mod scorer;

/// Composite score, total order and per-length top-K.
pub mod ranker;

/// High-level interface running the whole pipeline.
pub mod discovery;
