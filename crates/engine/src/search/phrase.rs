//! Page-title phrase tokenization
//!
//! Turns a page title into the extra `page-token` keywords: its stemmed
//! content words plus word pairs, so that "GitHub Forking tutorial" is also
//! found through "fork tutorial" or "tutorial github".

use super::tokenizer::Tokenizer;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Titles with at least this many content words yield adjacent bigrams
/// instead of all ordered pairs.
pub const BIGRAM_THRESHOLD: usize = 5;

/// Shortest keyword emitted for a title.
const MIN_KEYWORD_LEN: usize = 2;

/// English stopwords dropped from titles before pairing.
static STOPWORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does",
        "doing", "during", "each", "few", "for", "from", "further", "get", "got", "has", "had",
        "he", "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is",
        "it", "its", "itself", "like", "make", "many", "me", "might", "more", "most", "much",
        "must", "my", "myself", "never", "now", "of", "on", "only", "or", "other", "our",
        "ours", "ourselves", "out", "over", "own", "said", "same", "see", "should", "since",
        "so", "some", "still", "such", "take", "than", "that", "the", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
        "under", "until", "up", "very", "was", "way", "we", "well", "were", "what", "where",
        "when", "which", "while", "who", "whom", "with", "would", "why", "you", "your", "yours",
        "yourself", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
        "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    ]
    .into_iter()
    .collect()
});

/// Check if a lowercase word is a stopword.
#[inline]
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Stemmed content words of `text`, in order.
///
/// Whitespace, punctuation and stopwords are removed; stopwords are checked
/// before stemming.
pub fn content_words(text: &str) -> Vec<String> {
    let tokenizer = Tokenizer::new(true);
    tokenizer
        .tokens(text)
        .filter(|t| t.original.chars().any(char::is_alphanumeric))
        .filter(|t| !is_stopword(&t.original.to_lowercase()))
        .map(|t| t.stem)
        .collect()
}

/// Keywords derived from a page title.
///
/// # Example
///
/// ```
/// use autolink_engine::search::phrase::title_keywords;
///
/// assert_eq!(
///     title_keywords("An Officer and a Spy"),
///     vec!["offic", "spy", "offic spy", "spy offic"]
/// );
/// ```
pub fn title_keywords(title: &str) -> Vec<String> {
    let words = content_words(title);

    let mut keywords = words.clone();
    if words.len() >= BIGRAM_THRESHOLD {
        keywords.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    } else {
        for first in &words {
            for second in words.iter().filter(|w| *w != first) {
                keywords.push(format!("{} {}", first, second));
            }
        }
    }

    let mut seen = FxHashSet::default();
    keywords
        .into_iter()
        .filter(|k| k.len() >= MIN_KEYWORD_LEN)
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
