use crate::error::GroupError;
use crate::stem::Stemmer;
use crate::stopwords::{StopwordTable, ENGLISH, SPANISH};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Languages the grouping pipeline knows how to stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// The selector string accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }

    pub fn stopwords(self) -> &'static StopwordTable {
        match self {
            Language::English => &*ENGLISH,
            Language::Spanish => &*SPANISH,
        }
    }

    pub fn stemmer(self) -> Stemmer { Stemmer::for_language(self) }
}

impl FromStr for Language {
    type Err = GroupError;

    /// Selectors are case-sensitive: `"English"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            other => Err(GroupError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
