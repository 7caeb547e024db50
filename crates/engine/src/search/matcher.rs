//! Multi-pattern keyword matcher
//!
//! Wraps a double-array Aho-Corasick automaton built once from a keyword set.
//! A scan collects every overlapping occurrence, keeps whole-word hits, then
//! resolves overlaps longest-first so a contained shorter keyword never
//! survives next to the longer one that covers it.

use autolink_core::{AutolinkError, AutolinkResult};
use daachorse::DoubleArrayAhoCorasick;
use std::collections::{BTreeMap, BTreeSet};

/// A keyword occurrence in the scanned text, `[start, end)` in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'m> {
    /// First byte of the occurrence
    pub start: usize,
    /// First byte after the occurrence
    pub end: usize,
    /// Keyword that matched (lowercase)
    pub keyword: &'m str,
}

impl Match<'_> {
    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length match (never produced)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Immutable automaton over a distinct, lowercase keyword set.
pub struct Matcher {
    /// `None` when the keyword set is empty
    automaton: Option<DoubleArrayAhoCorasick<u32>>,
    keywords: Vec<String>,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("keywords", &self.keywords.len())
            .finish()
    }
}

impl Matcher {
    /// Build the automaton. Keywords are lowercased, empty ones skipped and
    /// duplicates collapsed.
    ///
    /// Cost is proportional to the total keyword length, so callers build
    /// once per keyword-set change and share the result.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::Automaton` if the automaton exceeds the
    /// underlying double-array limits.
    pub fn build<I, S>(keywords: I) -> AutolinkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if keywords.is_empty() {
            return Ok(Self {
                automaton: None,
                keywords,
            });
        }

        let automaton = DoubleArrayAhoCorasick::with_values(
            keywords.iter().enumerate().map(|(i, k)| (k.as_bytes(), i as u32)),
        )
        .map_err(|e| AutolinkError::automaton(e.to_string()))?;

        Ok(Self {
            automaton: Some(automaton),
            keywords,
        })
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// True if the matcher can never match anything
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords in sorted order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Find whole-word, non-overlapping keyword occurrences in `text`,
    /// ordered by start.
    ///
    /// ASCII letters in `text` are folded before scanning; other characters
    /// are compared as-is, so callers scanning non-ASCII text pass it
    /// lowercased.
    ///
    /// # Example
    ///
    /// ```
    /// use autolink_engine::search::matcher::Matcher;
    ///
    /// let matcher = Matcher::build(["github", "github fork"]).unwrap();
    /// let matches = matcher.parse("I use GitHub fork daily");
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].keyword, "github fork");
    /// ```
    pub fn parse(&self, text: &str) -> Vec<Match<'_>> {
        self.parse_aligned(text, |_, _| true)
    }

    /// Like [`parse`](Self::parse), but a candidate is only considered when
    /// `aligned(start, end)` accepts its span. Rejected candidates do not
    /// take part in overlap resolution.
    pub fn parse_aligned<F>(&self, text: &str, aligned: F) -> Vec<Match<'_>>
    where
        F: Fn(usize, usize) -> bool,
    {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let folded = text.to_ascii_lowercase();
        let mut candidates: Vec<(usize, usize, u32)> = automaton
            .find_overlapping_iter(&folded)
            .map(|m| (m.start(), m.end(), m.value()))
            .filter(|&(start, end, _)| is_whole_word(&folded, start, end))
            .filter(|&(start, end, _)| aligned(start, end))
            .collect();

        // Longest first, then leftmost.
        candidates.sort_by(|a, b| (b.1 - b.0).cmp(&(a.1 - a.0)).then(a.0.cmp(&b.0)));

        let mut accepted: BTreeMap<usize, (usize, u32)> = BTreeMap::new();
        for (start, end, value) in candidates {
            if let Some((_, &(prev_end, _))) = accepted.range(..end).next_back() {
                if prev_end > start {
                    continue;
                }
            }
            accepted.insert(start, (end, value));
        }

        accepted
            .into_iter()
            .map(|(start, (end, value))| Match {
                start,
                end,
                keyword: &self.keywords[value as usize],
            })
            .collect()
    }
}

/// Word characters that may not touch either edge of a match.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
