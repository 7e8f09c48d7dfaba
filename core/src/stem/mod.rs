//! Suffix-stripping stemmers, one rule set per [`Language`].
//!
//! English is classic Porter, implemented here; Spanish delegates to the
//! Snowball rules in `rust-stemmers`. Both stemmers are total: any string is
//! accepted, and input that no rule recognizes comes back unchanged.

mod english;
mod spanish;

pub use english::PorterStemmer;
pub use spanish::SpanishStemmer;

use crate::Language;

#[derive(Debug, Clone, Copy)]
pub enum Stemmer {
    English(PorterStemmer),
    Spanish(SpanishStemmer),
}

impl Stemmer {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Stemmer::English(PorterStemmer),
            Language::Spanish => Stemmer::Spanish(SpanishStemmer),
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Stemmer::English(_) => Language::English,
            Stemmer::Spanish(_) => Language::Spanish,
        }
    }

    pub fn stem(&self, word: &str) -> String {
        match self {
            Stemmer::English(s) => s.stem(word),
            Stemmer::Spanish(s) => s.stem(word),
        }
    }
}

pub(crate) fn ends_with(word: &[char], suffix: &str) -> bool {
    let n = suffix.chars().count();
    n <= word.len() && word[word.len() - n..].iter().copied().eq(suffix.chars())
}
