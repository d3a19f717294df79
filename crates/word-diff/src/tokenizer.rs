use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace class matching the browser's `\s`.
///
/// Unicode White_Space differs on two code points: NEL (U+0085) is not
/// whitespace here, and the byte order mark (U+FEFF) is.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

/// Whitespace runs, ASCII alphanumeric runs, or a single other character.
///
/// The alphanumeric class is ASCII-only, so every non-ASCII code point
/// (accented letters, CJK, emoji) ends up as its own token.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "[{WHITESPACE}]+|[a-zA-Z0-9]+|[^a-zA-Z0-9{WHITESPACE}]"
    ))
    .expect("token pattern is valid")
});

/// Split text into words, whitespace and punctuation, keeping every character.
///
/// Each character of the input matches exactly one alternative of the pattern,
/// so the returned slices are contiguous and concatenate back to `text`.
/// No normalization is applied; an empty input gives an empty sequence.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| !token.is_empty())
        .collect()
}
