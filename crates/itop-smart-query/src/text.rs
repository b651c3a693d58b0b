//! Query text normalisation and word-boundary phrase matching.

/// A query in its original form plus a lower-cased token stream.
///
/// Phrase matching works on whole tokens, so `ci` never matches inside
/// `critical` and `pc` does not match `pcs`.
#[derive(Debug, Clone)]
pub struct QueryText {
    raw: String,
    tokens: Vec<String>,
    originals: Vec<String>,
}

impl QueryText {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.split_whitespace().collect::<Vec<_>>().join(" "),
            tokens: tokenize(raw),
            originals: split_words(raw),
        }
    }

    /// Whitespace-collapsed original text (case preserved).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lower-cased tokens joined by single spaces.
    pub fn normalized(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.find(phrase).is_some()
    }

    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.contains(p))
    }

    /// Index of the first token of the first occurrence of `phrase`.
    pub fn find(&self, phrase: &str) -> Option<usize> {
        self.find_all(phrase).into_iter().next()
    }

    /// Token indices of every occurrence of `phrase`.
    pub fn find_all(&self, phrase: &str) -> Vec<usize> {
        let needle = tokenize(phrase);
        if needle.is_empty() || needle.len() > self.tokens.len() {
            return Vec::new();
        }
        (0..=self.tokens.len() - needle.len())
            .filter(|&i| self.matches_at(i, &needle))
            .collect()
    }

    /// Whether the tokens starting at `index` spell out `needle`.
    pub fn matches_at(&self, index: usize, needle: &[String]) -> bool {
        index + needle.len() <= self.tokens.len()
            && self.tokens[index..index + needle.len()] == *needle
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Token at `index` with its original casing.
    pub fn original(&self, index: usize) -> Option<&str> {
        self.originals.get(index).map(String::as_str)
    }
}

/// Lower-case and split into word tokens.
///
/// Letters, digits, `-`, `_` and `/` stay inside a token (so `v/s` and
/// `web-01` survive); everything else separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    split_words(text)
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect()
}

fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '/')))
        .map(|t| t.trim_matches(|c| matches!(c, '-' | '_' | '/')))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Lower-case, drop punctuation, collapse whitespace.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
