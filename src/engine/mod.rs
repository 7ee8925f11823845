//! Extractive summarization engine.
//!
//! Everything here is synchronous and pure: each call is a function of its inputs, holds no
//! shared state, and performs no I/O. The pipeline per request is:
//!
//! - `length`: resolve the length specifier into a target word count.
//! - `normalize`: clean raw text (text-mode only).
//! - `split`: segment into sentences (`.`/`!`/`?` runs for text, `". "` for transcripts).
//! - `score`: word-frequency scoring with positional and length adjustments (text-mode only).
//! - `select`: pick sentences and join them back into a summary.
//!
//! [`summarize_text`] and [`summarize_transcript`] return plain strings with `"Error: ..."`
//! sentinels; the `try_` variants expose the tagged [`Summary`]/[`SummarizeError`] result.

mod facade;
pub mod length;
pub mod normalize;
pub mod score;
pub mod select;
pub mod split;
mod types;

pub use facade::{summarize_text, summarize_transcript, try_summarize_text, try_summarize_transcript};
pub use length::{DEFAULT_LENGTH, LENGTH_PRESETS, resolve_target_words};
pub use types::{ScoredSentence, Sentence, SourceKind, SummarizeError, Summary};
