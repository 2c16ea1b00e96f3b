//! Keyword Extractor: most frequent longer tokens

use std::collections::HashMap;
use crate::{MAX_KEYWORDS, MIN_KEYWORD_CHARS};

/// Rank tokens longer than `MIN_KEYWORD_CHARS` by frequency.
///
/// Ties keep first-encountered order. At most `MAX_KEYWORDS` entries.
pub fn extract_keywords(tokens: &[String]) -> Vec<String> {
    rank_by_frequency(
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| t.chars().count() > MIN_KEYWORD_CHARS),
    )
    .into_iter()
    .take(MAX_KEYWORDS)
    .map(|(word, _)| word.to_string())
    .collect()
}

/// Count items and sort by descending count, stable on first appearance
pub fn rank_by_frequency<'a, I>(items: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for item in items {
        match index.get(item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
