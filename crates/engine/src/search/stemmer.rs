//! Porter stemmer for English
//!
//! Implements the classic five-step suffix-stripping algorithm (M.F. Porter,
//! 1980). Only purely ASCII-alphabetic words of three or more letters are
//! stemmed; everything else (whitespace, punctuation, numbers, short words,
//! words with diacritics) is returned unchanged.
//!
//! Like every suffix stripper, `stem` is not idempotent in general:
//! `stem("generalization") == "gener"` but a second pass over some outputs can
//! strip further. Already-minimal forms ("search", "note", "fork") are stable.

/// Reduce a single word to its Porter stem.
///
/// Stemmable input is lowercased first, so `stem("Searching") == "search"`.
///
/// # Example
///
/// ```
/// use autolink_engine::search::stemmer::stem;
///
/// assert_eq!(stem("searching"), "search");
/// assert_eq!(stem("shared"), "share");
/// assert_eq!(stem("  "), "  ");
/// ```
pub fn stem(word: &str) -> String {
    if word.len() < 3 || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return word.to_string();
    }

    let mut w = Word::new(word.to_ascii_lowercase().into_bytes());
    w.step1a();
    w.step1b();
    w.step1c();
    w.step2();
    w.step3();
    w.step4();
    w.step5a();
    w.step5b();

    // Only ASCII letters are ever written into the buffer.
    String::from_utf8(w.b).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Step 2 rewrites, tried in order; the first suffix present wins even if
/// its measure condition then fails.
const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

struct Word {
    b: Vec<u8>,
}

impl Word {
    fn new(b: Vec<u8>) -> Self {
        Self { b }
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `b[..len]`.
    fn measure(&self, len: usize) -> usize {
        let mut m = 0;
        let mut prev_vowel = false;
        for i in 0..len {
            let consonant = self.is_consonant(i);
            if consonant && prev_vowel {
                m += 1;
            }
            prev_vowel = !consonant;
        }
        m
    }

    fn has_vowel(&self, len: usize) -> bool {
        (0..len).any(|i| !self.is_consonant(i))
    }

    fn ends_double_consonant(&self, len: usize) -> bool {
        len >= 2 && self.b[len - 1] == self.b[len - 2] && self.is_consonant(len - 1)
    }

    /// consonant-vowel-consonant ending, where the last consonant is not w, x or y
    fn ends_cvc(&self, len: usize) -> bool {
        if len < 3 {
            return false;
        }
        let last = self.b[len - 1];
        self.is_consonant(len - 1)
            && !self.is_consonant(len - 2)
            && self.is_consonant(len - 3)
            && !matches!(last, b'w' | b'x' | b'y')
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.b.ends_with(suffix.as_bytes())
    }

    /// Length of the word with `suffix` removed (caller checked `ends_with`).
    fn stem_len(&self, suffix: &str) -> usize {
        self.b.len() - suffix.len()
    }

    fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        let len = self.stem_len(suffix);
        self.b.truncate(len);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn step1a(&mut self) {
        if self.ends_with("sses") {
            self.replace_suffix("sses", "ss");
        } else if self.ends_with("ies") {
            self.replace_suffix("ies", "i");
        } else if self.ends_with("ss") {
            // unchanged
        } else if self.ends_with("s") {
            self.replace_suffix("s", "");
        }
    }

    fn step1b(&mut self) {
        if self.ends_with("eed") {
            if self.measure(self.stem_len("eed")) > 0 {
                self.replace_suffix("eed", "ee");
            }
            return;
        }

        let suffix = if self.ends_with("ed") {
            "ed"
        } else if self.ends_with("ing") {
            "ing"
        } else {
            return;
        };
        if !self.has_vowel(self.stem_len(suffix)) {
            return;
        }
        self.replace_suffix(suffix, "");

        if self.ends_with("at") {
            self.replace_suffix("at", "ate");
        } else if self.ends_with("bl") {
            self.replace_suffix("bl", "ble");
        } else if self.ends_with("iz") {
            self.replace_suffix("iz", "ize");
        } else if self.ends_double_consonant(self.b.len()) {
            if !matches!(self.b[self.b.len() - 1], b'l' | b's' | b'z') {
                self.b.pop();
            }
        } else if self.measure(self.b.len()) == 1 && self.ends_cvc(self.b.len()) {
            self.b.push(b'e');
        }
    }

    fn step1c(&mut self) {
        if self.ends_with("y") && self.has_vowel(self.stem_len("y")) {
            let last = self.b.len() - 1;
            self.b[last] = b'i';
        }
    }

    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        if let Some(&(suffix, replacement)) = rules.iter().find(|(s, _)| self.ends_with(s)) {
            if self.measure(self.stem_len(suffix)) > 0 {
                self.replace_suffix(suffix, replacement);
            }
        }
    }

    fn step2(&mut self) {
        self.apply_rules(STEP2);
    }

    fn step3(&mut self) {
        self.apply_rules(STEP3);
    }

    fn step4(&mut self) {
        let Some(&suffix) = STEP4.iter().find(|s| self.ends_with(s)) else {
            return;
        };
        let len = self.stem_len(suffix);
        if suffix == "ion" && (len == 0 || !matches!(self.b[len - 1], b's' | b't')) {
            return;
        }
        if self.measure(len) > 1 {
            self.b.truncate(len);
        }
    }

    fn step5a(&mut self) {
        if !self.ends_with("e") {
            return;
        }
        let len = self.stem_len("e");
        let m = self.measure(len);
        if m > 1 || (m == 1 && !self.ends_cvc(len)) {
            self.b.truncate(len);
        }
    }

    fn step5b(&mut self) {
        let len = self.b.len();
        if self.measure(len) > 1 && self.ends_double_consonant(len) && self.b[len - 1] == b'l' {
            self.b.pop();
        }
    }
}
