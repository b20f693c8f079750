//! Word counting and keyword frequency ranking over plain text.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

/// Keyword table entries are capped at this many words.
const MAX_KEYWORDS: usize = 20;

/// Tokens at or below this length are not keyword candidates.
const MIN_KEYWORD_LEN: usize = 3;

/// A ranked keyword and its occurrence count.
///
/// Serialized as an array entry so the descending-count order survives
/// JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Counts the words in a text.
///
/// A word is a maximal run of word characters (alphanumeric plus
/// underscore, Unicode semantics). Every match counts, repeats included.
pub fn word_count(text: &str) -> usize {
    let word_regex = Regex::new(r"\w+").unwrap();
    word_regex.find_iter(text).count()
}

/// Extracts the top keywords from a text.
///
/// The text is lowercased and split into word-character runs; tokens of
/// three characters or fewer are discarded. Remaining tokens are tallied
/// and sorted by occurrence count descending, ties broken by first
/// appearance, truncated to the top 20.
pub fn top_keywords(text: &str) -> Vec<KeywordCount> {
    let word_regex = Regex::new(r"\w+").unwrap();
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, m) in word_regex.find_iter(&lowered).enumerate() {
        let token = m.as_str();
        if token.chars().count() <= MIN_KEYWORD_LEN {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> =
        counts.into_iter().map(|(word, (count, first))| (word, count, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(MAX_KEYWORDS);

    ranked
        .into_iter()
        .map(|(word, count, _)| KeywordCount { word: word.to_string(), count })
        .collect()
}
