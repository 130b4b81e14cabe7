//! Top-level module for the phrase counting pipeline.
//!
//! The pipeline runs in three stages:
//! - Phrase extraction over a sliding word window (`PhraseBuilder`)
//! - Occurrence counting in a chained hash table (`FrequencyTable`)
//! - Ranking by descending count (`rank_sorter::rank`)
//!
//! `NgramList` wires the stages together and renders the report.

/// A single counted phrase (`Record`).
pub mod record;

/// Sliding-window phrase extraction with punctuation normalization.
///
/// Windows crossing sentence punctuation are rejected; trailing and
/// leading punctuation is stripped from accepted phrases.
pub mod phrase_builder;

/// Fixed-bucket chained hash table mapping phrase text to its count.
pub mod frequency_table;

/// In-place partition sort and the ranked view it produces.
pub mod rank_sorter;

/// Counting parameters (n-gram size, bucket count).
pub mod config;

/// High-level facade: build, count, rank and render.
pub mod ngram_list;
