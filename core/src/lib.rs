pub mod error;
pub mod group;
pub mod language;
pub mod persist;
pub mod pipeline;
pub mod stem;
pub mod stopwords;
pub mod tokenizer;

pub use error::{GroupError, Result};
pub use group::*;
pub use language::Language;
pub use pipeline::{group_file, group_text, run};
