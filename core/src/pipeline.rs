//! Wires the stages together: tokenize, drop stopwords, stem, aggregate, rank.

use crate::error::{GroupError, Result};
use crate::persist::write_results;
use crate::tokenizer::{StopwordFilter, Tokenizer};
use crate::{Aggregator, GroupingResult, Language, RankFilter};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Groups every word of `text` by stem. Pure; performs no I/O.
pub fn group_text(text: &str, language: Language, rank: &RankFilter) -> GroupingResult {
    let tokens = Tokenizer::new().tokenize(text);
    let token_count = tokens.len();
    let kept = StopwordFilter::new(language.stopwords()).filter(tokens);
    debug!(%language, tokens = token_count, kept = kept.len(), "tokenized");

    let stemmer = language.stemmer();
    let mut agg = Aggregator::new();
    for word in &kept {
        agg.push(word, &stemmer.stem(word));
    }
    let groups = agg.into_groups();
    debug!(stems = groups.len(), "aggregated");

    let result = rank.apply(groups);
    debug!(ranked = result.len(), min_count = rank.min_count, "ranked");
    result
}

pub fn group_file<P: AsRef<Path>>(
    path: P,
    language: Language,
    rank: &RankFilter,
) -> Result<GroupingResult> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| GroupError::Read { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(group_text(&text, language, rank))
}

/// Reads `input`, groups it, and writes the ranked result to `output`.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    language: Language,
    output: Q,
    rank: &RankFilter,
) -> Result<GroupingResult> {
    let result = group_file(input, language, rank)?;
    write_results(&output, &result)?;
    info!(output = %output.as_ref().display(), groups = result.len(), "results written");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_run_variants_group_together() {
        let rank = RankFilter::default();
        let result = group_text("run running runs ran jump", Language::English, &rank);
        assert_eq!(result.len(), 1);
        let (stem, group) = result.iter().next().unwrap();
        assert_eq!(stem, "run");
        assert_eq!(group.count, 3);
        let words: Vec<(&str, u64)> = group.words.iter().collect();
        assert_eq!(words, vec![("run", 1), ("running", 1), ("runs", 1)]);
    }

    #[test]
    fn stopwords_only_leave_singletons() {
        let result = group_text("the cat and the dog", Language::English, &RankFilter::default());
        assert!(result.is_empty());
        let all = group_text("the cat and the dog", Language::English, &RankFilter::new(1));
        assert_eq!(all.stems(), vec!["cat", "dog"]);
    }

    #[test]
    fn case_is_folded_before_grouping() {
        let result = group_text("Cats CATS cat The THE", Language::English, &RankFilter::default());
        assert_eq!(result.stems(), vec!["cat"]);
        let cat = result.get("cat").unwrap();
        assert_eq!(cat.words.get("cats"), Some(2));
        assert_eq!(cat.words.get("cat"), Some(1));
    }

    #[test]
    fn punctuation_splits_surface_forms() {
        // "dog." keeps its period, so it never joins the "dog" group.
        let result = group_text("dog dog. dogs dog.", Language::English, &RankFilter::default());
        assert_eq!(result.stems(), vec!["dog", "dog."]);
        assert_eq!(result.get("dog").unwrap().count, 2);
        assert_eq!(result.get("dog.").unwrap().words.get("dog."), Some(2));
    }

    #[test]
    fn spanish_document() {
        let text = "El gato y la gata cantaban. Los gatos cantan canciones; \
                    una canción y otra canción";
        let result = group_text(text, Language::Spanish, &RankFilter::default());
        let gat = result.get("gat").unwrap();
        assert_eq!(gat.count, 3);
        let forms: Vec<&str> = gat.words.iter().map(|(w, _)| w).collect();
        assert_eq!(forms, vec!["gato", "gata", "gatos"]);
        let cancion = result.get("cancion").unwrap();
        assert_eq!(cancion.count, 2);
        assert_eq!(cancion.words.get("canción"), Some(2));
        assert_eq!(result.stems(), vec!["gat", "cancion"]);
    }

    #[test]
    fn ranked_output_invariants() {
        let text = "connect connected connecting connection connections connects \
                    generalize generalization generalizations agree agreed \
                    hope hopeful hopefulness hoping relate related relational";
        let rank = RankFilter::default();
        let result = group_text(text, Language::English, &rank);
        assert!(!result.is_empty());
        let counts: Vec<u64> = result.iter().map(|(_, g)| g.count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        for (_, g) in result.iter() {
            assert!(g.count > 1);
            assert_eq!(g.count, g.words.total());
        }
        assert_eq!(result.get("connect").unwrap().count, 6);
    }

    #[test]
    fn missing_input_is_a_read_error() {
        let rank = RankFilter::default();
        let err = group_file("/definitely/not/here.txt", Language::English, &rank).unwrap_err();
        assert!(matches!(err, GroupError::Read { .. }));
    }
}
