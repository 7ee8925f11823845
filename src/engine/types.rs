//! Data model and error definitions shared by the summarization stages.

use thiserror::Error;

/// Kind of source being summarized; selects the splitting and selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Free-form text supplied directly by the caller.
    Text,
    /// Caption text concatenated from a video transcript.
    Transcript,
}

impl SourceKind {
    /// Human-readable label used in diagnostics and sentinel messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Transcript => "transcript",
        }
    }
}

/// One segmented sentence, tagged with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Zero-based position of the sentence in the segmented source.
    pub index: usize,
    /// Sentence text exactly as produced by the splitter.
    pub text: String,
    /// Lowercased whitespace-separated tokens of `text`.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Build a sentence and derive its lowercase token list.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self {
            index,
            text,
            tokens,
        }
    }
}

/// A sentence paired with its importance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// The scored sentence.
    pub sentence: Sentence,
    /// Frequency score plus positional bonus minus short-sentence penalty. May be negative.
    pub score: f64,
}

/// Summary produced for a single request, with the statistics that drove selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Joined summary text returned to callers.
    pub text: String,
    /// Source kind the summary was produced from.
    pub kind: SourceKind,
    /// Word budget resolved from the length specifier.
    pub target_words: usize,
    /// Whitespace-separated word count of the (cleaned) source.
    pub source_words: usize,
    /// Number of sentences the source was segmented into.
    pub source_sentences: usize,
    /// Number of sentences emitted in the summary.
    pub selected_sentences: usize,
    /// True when the source was short enough to be returned unchanged.
    pub passthrough: bool,
}

/// Failures surfaced by the summarization facade.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummarizeError {
    /// Source text was empty or whitespace-only.
    #[error("No {} content provided", kind.label())]
    EmptyInput {
        /// Kind of source that was empty.
        kind: SourceKind,
    },
    /// Even-spacing arithmetic produced an index past the end of the sentence list.
    #[error("sentence index {index} out of range for {len} sentences")]
    IndexOutOfRange {
        /// Offending sentence index.
        index: usize,
        /// Number of sentences available.
        len: usize,
    },
}

impl SummarizeError {
    /// Render the sentinel string exposed at the outward-facing string boundary.
    pub fn to_message(&self) -> String {
        match self {
            Self::EmptyInput { .. } => format!("Error: {self}"),
            Self::IndexOutOfRange { .. } => format!("Error summarizing video: {self}"),
        }
    }
}
