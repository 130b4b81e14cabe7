//! N-gram phrase frequency counting library.
//!
//! This crate turns an ordered word sequence into ranked phrase counts:
//! - Sliding-window phrase extraction with punctuation normalization
//! - A chained hash table counting each distinct phrase
//! - An in-place partition sort ranking phrases by descending count
//! - Internal utilities for reading word lists from text
//!
//! Typical use goes through [`ngram::ngram_list::NgramList`], which runs
//! the whole pipeline and renders the ranked report.

/// Phrase extraction, counting and ranking.
///
/// Exposes the `NgramList` facade along with the individual stages so
/// each can be driven and tested on its own.
pub mod ngram;

/// Error type shared by every stage.
pub mod error;

/// I/O utilities (word list loading).
pub mod io;

pub use error::NgramError;
pub use ngram::ngram_list::NgramList;
