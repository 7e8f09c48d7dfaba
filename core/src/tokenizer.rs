use crate::stopwords::StopwordTable;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"[\s\x{FEFF}]+").expect("valid regex");
}

/// Splits a document on runs of whitespace and lowercases every fragment.
///
/// Punctuation stays attached to its word, so `"dog."` and `"dog"` are distinct tokens.
/// A byte-order mark counts as whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self { Self }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        WHITESPACE
            .split(text)
            .filter(|frag| !frag.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// Drops tokens found in one language's stopword table.
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter {
    table: &'static StopwordTable,
}

impl StopwordFilter {
    pub fn new(table: &'static StopwordTable) -> Self { Self { table } }

    pub fn keep(&self, token: &str) -> bool { !self.table.contains(token) }

    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| self.keep(t)).collect()
    }
}
