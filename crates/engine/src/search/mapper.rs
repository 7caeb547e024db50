//! Stemmed-to-original offset mapping

use super::matcher::Match;
use super::tokenizer::Token;
use autolink_core::MatchResult;

/// Check that `[start, end)` in the stemmed stream begins at a token's
/// `stem_start` and ends at a token's `stem_end`.
pub fn is_aligned(tokens: &[Token<'_>], start: usize, end: usize) -> bool {
    tokens.binary_search_by_key(&start, |t| t.stem_start).is_ok()
        && tokens.binary_search_by_key(&end, |t| t.stem_end).is_ok()
}

/// Map a match in stemmed coordinates back onto `text`.
///
/// The covering tokens are the maximal contiguous run whose stemmed spans lie
/// inside the match. `text` is the queried text; the tokens may have been
/// computed over a length-preserving redaction of it. `original_keyword` is
/// sliced from `text`.
///
/// Returns `None` when no token lies inside the match, which means the
/// tokenizer and matcher disagree about coordinates.
pub fn map_to_original(m: &Match<'_>, tokens: &[Token<'_>], text: &str) -> Option<MatchResult> {
    let first = tokens.partition_point(|t| t.stem_start < m.start);
    let count = tokens[first..].partition_point(|t| t.stem_end <= m.end);
    let covered = &tokens[first..first + count];

    let (head, tail) = (covered.first()?, covered.last()?);
    let (start, end) = (head.original_start, tail.original_end);

    Some(MatchResult {
        start,
        end,
        index_keyword: covered
            .iter()
            .map(|t| t.stem.as_str())
            .collect::<String>()
            .to_lowercase(),
        original_keyword: match text.get(start..end) {
            Some(slice) => slice.to_string(),
            // span edge falls inside a multibyte char that redaction blanked
            None => covered.iter().map(|t| t.original).collect(),
        },
    })
}
