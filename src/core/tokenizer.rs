//! Tokenizer: raw text → lower-case alphanumeric tokens

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not a letter, digit or whitespace
    static ref RE_STRIP: Regex = Regex::new(r"[^\p{L}\p{N}\s]+").unwrap();
}

/// Lower-case `text`, drop punctuation and split on whitespace runs.
///
/// Never fails; empty or whitespace-only input gives no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_STRIP
        .replace_all(&lower, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
