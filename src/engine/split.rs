//! Sentence segmentation for both source kinds.

use super::types::Sentence;

/// Split cleaned text on runs of `.`, `!` and `?`, trimming and dropping empty fragments.
pub fn split_text_sentences(text: &str) -> Vec<Sentence> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| Sentence::new(index, fragment))
        .collect()
}

/// Split transcript text on the literal `". "` delimiter, keeping every fragment verbatim.
pub fn split_transcript_sentences(text: &str) -> Vec<Sentence> {
    text.split(". ")
        .enumerate()
        .map(|(index, fragment)| Sentence::new(index, fragment))
        .collect()
}

/// Whitespace-separated words of `text`, punctuation attached.
pub fn source_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
