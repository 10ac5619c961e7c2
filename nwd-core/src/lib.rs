//! Statistical new-word discovery for unsegmented text.
//!
//! This crate finds character sequences that behave like words in a raw
//! corpus, without any dictionary. It provides:
//! - Character-level substring extraction with left/right neighbor tracking
//! - Length-normalized mutual information (AMI) between a candidate and its characters
//! - Boundary entropy of the characters surrounding a candidate
//! - A composite ranking exposed per length bucket
//! - Corpus loading and a CSV report for the surrounding tooling
//!
//! ```no_run
//! use nwd_core::config::DiscoveryConfig;
//! use nwd_core::model::discovery::NewWordDiscovery;
//!
//! let discovery = NewWordDiscovery::from_file("data/corpus.txt", DiscoveryConfig::default())?;
//! for bucket in discovery.buckets() {
//!     let words: Vec<&str> = bucket.candidates.iter().map(|c| c.candidate.as_str()).collect();
//!     println!("{}: {:?}", bucket.length, words);
//! }
//! # Ok::<(), nwd_core::error::DiscoveryError>(())
//! ```

/// Extraction, scoring and ranking.
pub mod model;

/// Run parameters and their validation.
pub mod config;

/// Error type shared by every fallible operation.
pub mod error;

/// Corpus loading and path helpers.
pub mod io;

/// CSV export of ranked candidates.
pub mod report;
