//! Entry points composing the stages for each source kind.

use super::{
    length::resolve_target_words,
    normalize::normalize_text,
    score::score_sentences,
    select::{
        is_passthrough, join_text, join_transcript, sample_transcript, select_text,
        target_sentence_count,
    },
    split::{source_words, split_text_sentences, split_transcript_sentences},
    types::{SourceKind, SummarizeError, Summary},
};

/// Summarize raw text, returning a sentinel `"Error: ..."` string on failure.
pub fn summarize_text(text_content: &str, summary_length: &str) -> String {
    try_summarize_text(text_content, summary_length)
        .map_or_else(|error| error.to_message(), |summary| summary.text)
}

/// Summarize transcript text, returning a sentinel `"Error: ..."` string on failure.
pub fn summarize_transcript(transcript_text: &str, summary_length: &str) -> String {
    try_summarize_transcript(transcript_text, summary_length)
        .map_or_else(|error| error.to_message(), |summary| summary.text)
}

/// Summarize raw text into a [`Summary`] of the highest-scoring sentences.
///
/// The input is normalized first; short inputs (two sentences or fewer, or already within the
/// word budget) come back as the cleaned text unchanged.
pub fn try_summarize_text(
    text_content: &str,
    summary_length: &str,
) -> Result<Summary, SummarizeError> {
    if text_content.trim().is_empty() {
        return Err(SummarizeError::EmptyInput {
            kind: SourceKind::Text,
        });
    }

    let cleaned = normalize_text(text_content);
    let target_words = resolve_target_words(summary_length);
    let sentences = split_text_sentences(&cleaned);
    let words = source_words(&cleaned);
    let source_sentences = sentences.len();
    let source_words = words.len();

    if is_passthrough(SourceKind::Text, source_sentences, source_words, target_words) {
        tracing::debug!(
            source_sentences,
            source_words,
            target_words,
            "Text within budget; returning unchanged"
        );
        return Ok(Summary {
            text: cleaned,
            kind: SourceKind::Text,
            target_words,
            source_words,
            source_sentences,
            selected_sentences: source_sentences,
            passthrough: true,
        });
    }

    let target_count = target_sentence_count(source_words, source_sentences, target_words);
    let scored = score_sentences(sentences, &words);
    let selected = select_text(scored, target_count);
    tracing::debug!(
        source_sentences,
        source_words,
        target_words,
        selected = selected.len(),
        "Selected text sentences"
    );

    Ok(Summary {
        text: join_text(&selected),
        kind: SourceKind::Text,
        target_words,
        source_words,
        source_sentences,
        selected_sentences: selected.len(),
        passthrough: false,
    })
}

/// Summarize transcript text by sampling sentences evenly from the start.
///
/// Transcripts with three sentences or fewer, or already within the word budget, come back
/// unchanged.
pub fn try_summarize_transcript(
    transcript_text: &str,
    summary_length: &str,
) -> Result<Summary, SummarizeError> {
    if transcript_text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput {
            kind: SourceKind::Transcript,
        });
    }

    let target_words = resolve_target_words(summary_length);
    let sentences = split_transcript_sentences(transcript_text);
    let source_sentences = sentences.len();
    let source_words = source_words(transcript_text).len();

    if is_passthrough(
        SourceKind::Transcript,
        source_sentences,
        source_words,
        target_words,
    ) {
        tracing::debug!(
            source_sentences,
            source_words,
            target_words,
            "Transcript within budget; returning unchanged"
        );
        return Ok(Summary {
            text: transcript_text.to_string(),
            kind: SourceKind::Transcript,
            target_words,
            source_words,
            source_sentences,
            selected_sentences: source_sentences,
            passthrough: true,
        });
    }

    let target_count = target_sentence_count(source_words, source_sentences, target_words);
    let selected = sample_transcript(&sentences, target_count)?;
    tracing::debug!(
        source_sentences,
        source_words,
        target_words,
        selected = selected.len(),
        "Sampled transcript sentences"
    );

    Ok(Summary {
        text: join_transcript(selected.iter().copied()),
        kind: SourceKind::Transcript,
        target_words,
        source_words,
        source_sentences,
        selected_sentences: selected.len(),
        passthrough: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sentence of `count` distinct filler words prefixed by `tag`.
    fn filler(tag: &str, count: usize) -> String {
        (0..count)
            .map(|i| format!("{tag}w{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn empty_text_returns_sentinel() {
        assert_eq!(summarize_text("", "medium"), "Error: No text content provided");
        assert_eq!(
            summarize_text(" \n\t ", "short"),
            "Error: No text content provided"
        );
    }

    #[test]
    fn empty_transcript_returns_sentinel() {
        assert_eq!(
            summarize_transcript("   ", "medium"),
            "Error: No transcript content provided"
        );
    }

    #[test]
    fn short_text_is_returned_cleaned_and_unchanged() {
        let text = "  Rust is fast.\n\nIt is also safe!  ";
        assert_eq!(summarize_text(text, "medium"), "Rust is fast. It is also safe!");
        assert_eq!(summarize_text(text, "1"), "Rust is fast. It is also safe!");
    }

    #[test]
    fn text_within_budget_is_idempotent_at_any_length() {
        let text = "One short line. Another short line. A third short line.";
        for length in ["short", "medium", "long", "200 words"] {
            let summary = summarize_text(text, length);
            assert_eq!(summary, text);
            assert_eq!(summarize_text(&summary, length), text);
        }
    }

    #[test]
    fn text_mode_selects_top_sentences_in_document_order() {
        // Five sentences of six or more words; "compiler" recurs in sentences 1, 3 and 4.
        let text = "Gardens need water every single morning. \
                    The compiler checks ownership rules before running code. \
                    Birds migrate south during the cold winter. \
                    Every compiler release improves ownership diagnostics for users. \
                    Friendly compiler messages help newcomers learn ownership quickly.";
        // 6 + 8 + 7 + 8 + 8 = 37 words over 5 sentences -> 7.4 per sentence; 15 / 7.4 -> 2.
        let summary = try_summarize_text(text, "15").expect("summary");
        assert!(!summary.passthrough);
        assert_eq!(summary.source_sentences, 5);
        assert_eq!(summary.source_words, 37);
        assert_eq!(summary.selected_sentences, 2);
        assert_eq!(
            summary.text,
            "Every compiler release improves ownership diagnostics for users \
             Friendly compiler messages help newcomers learn ownership quickly"
        );
        assert_eq!(summarize_text(text, "15"), summary.text);
    }

    #[test]
    fn text_mode_output_is_in_document_order() {
        let text = (0..12)
            .map(|i| format!("marker{i} alpha{} beta{} gamma delta epsilon", i % 3, i % 4))
            .collect::<Vec<_>>()
            .join(". ");
        // 72 words over 12 sentences; 20 words -> 3 sentences.
        let summary = try_summarize_text(&text, "20").expect("summary");
        let positions: Vec<usize> = summary
            .text
            .split_whitespace()
            .filter_map(|word| word.strip_prefix("marker"))
            .map(|index| index.parse().expect("marker index"))
            .collect();
        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn transcript_mode_samples_evenly() {
        let sentences: Vec<String> = (0..10).map(|i| filler(&format!("t{i}"), 10)).collect();
        let transcript = sentences.join(". ");
        // 100 words over 10 sentences; 30 words -> 3 sentences at stride 3.
        let summary = try_summarize_transcript(&transcript, "30").expect("summary");
        assert_eq!(summary.selected_sentences, 3);
        assert_eq!(
            summary.text,
            format!("{}. {}. {}.", sentences[0], sentences[3], sentences[6])
        );
    }

    #[test]
    fn transcript_mode_reproduces_prefix_degeneration() {
        let sentences: Vec<String> = (0..7).map(|i| filler(&format!("t{i}"), 10)).collect();
        let transcript = sentences.join(". ");
        // 70 words over 7 sentences; 40 words -> 4 sentences at stride 1.
        let summary = summarize_transcript(&transcript, "40 words");
        assert_eq!(
            summary,
            format!(
                "{}. {}. {}. {}.",
                sentences[0], sentences[1], sentences[2], sentences[3]
            )
        );
    }

    #[test]
    fn short_transcript_is_returned_verbatim() {
        let transcript = "hello there. general kenobi. you are a bold one";
        assert_eq!(summarize_transcript(transcript, "1"), transcript);
    }

    #[test]
    fn transcript_within_budget_is_returned_verbatim() {
        let transcript = "a b. c d. e f. g h. i j";
        assert_eq!(summarize_transcript(transcript, "medium"), transcript);
    }
}
