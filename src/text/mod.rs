use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static ALPHA_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("alpha word pattern is valid"));

/// Reduce a display string to a comparison key.
///
/// Lowercases, strips any run of leading ASCII digits (decklist lines come in
/// as `"4 Lightning Bolt"`), then removes the single space left behind by the
/// digit strip. Nothing else is touched, so prefix matching on the keys stays
/// predictable.
pub fn normalize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let lower = s.to_lowercase();
    let stripped = lower.trim_start_matches(|c: char| c.is_ascii_digit());
    let stripped = stripped.strip_prefix(' ').unwrap_or(stripped);
    stripped.to_string()
}

/// Lowercase alphabetic-only words of a string, as a set.
///
/// Used by the alias heuristic: `"John 'JJ' Smith"` tokenizes to
/// `{john, jj, smith}` regardless of quoting or parentheses.
pub fn alpha_tokens(s: &str) -> HashSet<String> {
    let lower = s.to_lowercase();
    ALPHA_WORDS
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
