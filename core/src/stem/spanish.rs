//! Spanish stemming via the Snowball rules shipped in `rust-stemmers`.

use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref SNOWBALL: Stemmer = Stemmer::create(Algorithm::Spanish);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SpanishStemmer;

impl SpanishStemmer {
    /// NFC first, so decomposed accents hit the accented suffix rules.
    pub fn stem(&self, word: &str) -> String {
        let composed: String = word.nfc().collect();
        SNOWBALL.stem(&composed).into_owned()
    }
}
