//! Sentence selection and joining policies.
//!
//! Text-mode keeps the highest-scoring sentences and re-emits them in document order.
//! Transcript-mode skips scoring and samples sentences at a fixed stride from the start.

use std::cmp::Ordering;

use super::types::{ScoredSentence, Sentence, SourceKind, SummarizeError};

/// Whether the source is short enough to be returned unchanged.
pub fn is_passthrough(
    kind: SourceKind,
    sentence_count: usize,
    word_count: usize,
    target_words: usize,
) -> bool {
    let max_sentences = match kind {
        SourceKind::Text => 2,
        SourceKind::Transcript => 3,
    };
    sentence_count <= max_sentences || word_count <= target_words
}

/// Number of sentences needed to approach `target_words` at the source's average density.
pub fn target_sentence_count(word_count: usize, sentence_count: usize, target_words: usize) -> usize {
    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    ((target_words as f64 / avg_words_per_sentence) as usize).max(1)
}

/// Keep the `target_count` best-scored sentences, returned in document order.
///
/// Ranking is a stable descending sort, so equal scores keep their scoring-pass order.
pub fn select_text(scored: Vec<ScoredSentence>, target_count: usize) -> Vec<Sentence> {
    let mut ranked = scored;
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(target_count);
    ranked.sort_by_key(|candidate| candidate.sentence.index);
    ranked
        .into_iter()
        .map(|candidate| candidate.sentence)
        .collect()
}

/// Sample `target_count` sentences at indices `0, step, 2*step, ...` with
/// `step = len / target_count`, or take the leading prefix when there are not enough sentences.
pub fn sample_transcript(
    sentences: &[Sentence],
    target_count: usize,
) -> Result<Vec<&Sentence>, SummarizeError> {
    let len = sentences.len();
    if len <= target_count {
        return Ok(sentences.iter().take(target_count).collect());
    }

    let step = len / target_count;
    tracing::trace!(len, target_count, step, "Sampling transcript sentences");
    (0..target_count)
        .map(|position| {
            let index = position * step;
            sentences
                .get(index)
                .ok_or(SummarizeError::IndexOutOfRange { index, len })
        })
        .collect()
}

/// Join text-mode sentences with single spaces.
pub fn join_text<'a, I>(sentences: I) -> String
where
    I: IntoIterator<Item = &'a Sentence>,
{
    sentences
        .into_iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join transcript sentences with `". "` and make sure the result ends with a period.
pub fn join_transcript<'a, I>(sentences: I) -> String
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let mut summary = sentences
        .into_iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}
