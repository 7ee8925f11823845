//! Frequency-based sentence scoring for text-mode summaries.

use std::collections::HashMap;

use super::types::{ScoredSentence, Sentence};

/// Words must be longer than this many characters to be tallied.
const MIN_TALLIED_WORD_CHARS: usize = 3;
/// Fraction of the frequency score added to the first and last sentence.
const POSITION_BONUS: f64 = 0.2;
/// Fraction of the frequency score removed from short sentences.
const SHORT_SENTENCE_PENALTY: f64 = 0.3;
/// Sentences with fewer tokens than this are penalized.
const SHORT_SENTENCE_TOKENS: usize = 5;

/// Occurrence counts of lowercase words across a whole source.
#[derive(Debug, Default)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Tally every word longer than three characters, keyed by its lowercase form.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = HashMap::new();
        for word in words {
            if word.chars().count() > MIN_TALLIED_WORD_CHARS {
                *counts.entry(word.to_lowercase()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count for `word`, zero when it was never tallied.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct tallied words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no word was tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Score each sentence against the frequency table built from `words`.
///
/// Output order matches input order. The first and last sentence receive a 20% bonus on their
/// frequency score; sentences with fewer than five tokens lose 30% of it.
pub fn score_sentences(sentences: Vec<Sentence>, words: &[&str]) -> Vec<ScoredSentence> {
    let table = WordFrequencyTable::from_words(words.iter().copied());
    let last = sentences.len().saturating_sub(1);
    tracing::trace!(distinct_words = table.len(), sentences = sentences.len(), "Scoring sentences");
    if table.is_empty() {
        tracing::debug!("No words longer than three characters; every sentence scores zero");
    }

    sentences
        .into_iter()
        .enumerate()
        .map(|(position, sentence)| {
            let freq_score = sentence
                .tokens
                .iter()
                .map(|token| table.get(token))
                .sum::<usize>() as f64;

            let position_bonus = if position == 0 || position == last {
                freq_score * POSITION_BONUS
            } else {
                0.0
            };
            let length_penalty = if sentence.tokens.len() < SHORT_SENTENCE_TOKENS {
                freq_score * SHORT_SENTENCE_PENALTY
            } else {
                0.0
            };

            ScoredSentence {
                score: freq_score + position_bonus - length_penalty,
                sentence,
            }
        })
        .collect()
}
