//! Text normalization and phrase extraction.
//!
//! A word character is a Unicode letter, a Unicode number or `_`. Combining
//! marks, joiners and other connector punctuation are not word characters.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("BUG: invalid NON_WORD_RE regex literal"));

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("BUG: invalid WORD_RE regex literal"));

/// Lowercases `text`, drops everything that is neither a word character nor
/// whitespace, and trims the result.
///
/// ```rust
/// use densito_core::text::normalize;
///
/// assert_eq!(normalize("  Hello, World!! "), "hello world");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD_RE.replace_all(&lowered, "").trim().to_string()
}

/// Splits text into maximal runs of word characters.
pub fn tokens(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Every contiguous window of `n` tokens, joined by a single space.
///
/// Windows overlap (the window slides by one token). Fewer than `n` tokens,
/// or `n == 0`, yields nothing.
///
/// ```rust
/// use densito_core::text::phrases;
///
/// assert_eq!(phrases("the cat sat", 2), vec!["the cat", "cat sat"]);
/// ```
pub fn phrases(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokens(text).windows(n).map(|window| window.join(" ")).collect()
}
