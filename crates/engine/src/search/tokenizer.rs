//! Dual-coordinate tokenizer
//!
//! Pipeline: split into character-class runs → case-fold → Porter stem (when
//!           stemming is enabled) → record original and stemmed spans
//!
//! Every character of the input lands in exactly one token, so concatenating
//! `original` over a tokenization reproduces the input, and concatenating
//! `stem` reproduces the stemmed stream the matcher scans. Offsets are byte
//! offsets, half-open.

use super::stemmer;

/// Character class that decides where one token ends and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Letter,
    Number,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_alphabetic() || is_combining_mark(c) {
            CharClass::Letter
        } else if c.is_numeric() || c == '_' || c == '.' {
            CharClass::Number
        } else {
            CharClass::Other
        }
    }
}

/// Combining diacritical marks (U+0300–U+036F) glue onto the letter run.
#[inline]
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// One token with its span in both coordinate spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Position of the token in the sequence
    pub index: usize,
    /// Slice of the input text
    pub original: &'a str,
    /// First byte of `original` in the input
    pub original_start: usize,
    /// First byte after `original` in the input
    pub original_end: usize,
    /// Normalized form (case-folded, stemmed when stemming is enabled)
    pub stem: String,
    /// First byte of `stem` in the stemmed stream
    pub stem_start: usize,
    /// First byte after `stem` in the stemmed stream
    pub stem_end: usize,
}

impl Token<'_> {
    /// True if the token is a run of letters
    pub fn is_word(&self) -> bool {
        self.original.chars().next().map(CharClass::of) == Some(CharClass::Letter)
    }

    /// True if the token is a whitespace run
    pub fn is_space(&self) -> bool {
        self.original.chars().next().map(CharClass::of) == Some(CharClass::Space)
    }
}

/// Splits text into tokens and normalizes each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    stemming: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer {
    /// Create a tokenizer; without stemming tokens are only case-folded.
    pub fn new(stemming: bool) -> Self {
        Self { stemming }
    }

    /// Whether tokens are reduced to stems
    pub fn stemming(&self) -> bool {
        self.stemming
    }

    /// Lazy token sequence over `text`. Call again to iterate from the start.
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            pos: 0,
            stem_pos: 0,
            index: 0,
            stemming: self.stemming,
        }
    }

    /// Collect all tokens of `text`.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.tokens(text).collect()
    }

    /// Concatenated stems of `text`: the form a phrase takes in the index.
    ///
    /// # Example
    ///
    /// ```
    /// use autolink_engine::search::tokenizer::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new(true);
    /// assert_eq!(tokenizer.normalize("Shared Client Record"), "share client record");
    /// assert_eq!(Tokenizer::new(false).normalize("GitHub Forks"), "github forks");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).map(|t| t.stem).collect()
    }

    fn normalize_token(&self, original: &str) -> String {
        let folded = original.to_lowercase();
        if self.stemming {
            stemmer::stem(&folded)
        } else {
            folded
        }
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    stem_pos: usize,
    index: usize,
    stemming: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;

        let class = CharClass::of(first);
        let len = match class {
            CharClass::Other => first.len_utf8(),
            _ => chars
                .find(|&(_, c)| CharClass::of(c) != class)
                .map(|(i, _)| i)
                .unwrap_or(rest.len()),
        };

        let original = &rest[..len];
        let stem = Tokenizer::new(self.stemming).normalize_token(original);
        let token = Token {
            index: self.index,
            original,
            original_start: self.pos,
            original_end: self.pos + len,
            stem_start: self.stem_pos,
            stem_end: self.stem_pos + stem.len(),
            stem,
        };

        self.pos += len;
        self.stem_pos = token.stem_end;
        self.index += 1;
        Some(token)
    }
}

/// Tokenize `text` with stemming enabled.
///
/// # Example
///
/// ```
/// use autolink_engine::search::tokenizer::tokenize;
///
/// let tokens = tokenize("Searching notes");
/// let stems: Vec<&str> = tokens.iter().map(|t| t.stem.as_str()).collect();
/// assert_eq!(stems, vec!["search", " ", "note"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new(true).tokenize(text)
}
