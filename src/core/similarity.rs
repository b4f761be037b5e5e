use std::collections::HashSet;

use thiserror::Error;

use crate::core::text::tokenize;

/// Errors that can occur when comparing two texts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("Undefined similarity: {0:?} has no meaningful words")]
    UndefinedSimilarity(String),
}

/// Words ignored when comparing texts
pub trait StopWords: Send + Sync {
    fn is_stop_word(&self, word: &str) -> bool;
}

/// English stop words (NLTK corpus list)
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Owned stop-word set
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// The default English list
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// A set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for StopWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words
            .extend(iter.into_iter().map(|w| w.into().to_lowercase()));
    }
}

impl StopWords for StopWordSet {
    #[inline]
    fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Distinct meaningful words of `text`
fn keywords(text: &str, stop_words: &dyn StopWords) -> HashSet<String> {
    tokenize(text)
        .filter(|word| !stop_words.is_stop_word(word))
        .collect()
}

/// Set-overlap cosine similarity between two texts (0-1)
///
/// Both texts are reduced to their distinct non-stop words; the score is
/// `|A ∩ B| / sqrt(|A| * |B|)`, which is symmetric and exactly 1.0 for texts
/// with the same word set.
///
/// # Errors
/// Returns [`SimilarityError::UndefinedSimilarity`] when either text has no
/// meaningful words left.
pub fn similarity(
    text_a: &str,
    text_b: &str,
    stop_words: &dyn StopWords,
) -> Result<f64, SimilarityError> {
    let a = keywords(text_a, stop_words);
    if a.is_empty() {
        return Err(SimilarityError::UndefinedSimilarity(text_a.to_string()));
    }
    let b = keywords(text_b, stop_words);
    if b.is_empty() {
        return Err(SimilarityError::UndefinedSimilarity(text_b.to_string()));
    }

    let shared = a.intersection(&b).count() as f64;
    Ok(shared / ((a.len() * b.len()) as f64).sqrt())
}

/// [`similarity`] with degenerate inputs treated as "no match"
#[inline]
pub fn similarity_or_zero(text_a: &str, text_b: &str, stop_words: &dyn StopWords) -> f64 {
    similarity(text_a, text_b, stop_words).unwrap_or(0.0)
}
