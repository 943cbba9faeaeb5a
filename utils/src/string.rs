//! Text transformations: word capitalization, character filtering, truncation.
//!
//! All lengths are counted in `char`s, never bytes, so multi-byte characters
//! are never split.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use tidy_types::{OpError, OpResult, SpacePolicy};

/// Capitalize every whitespace-separated word and join them with single spaces.
///
/// The first character of each word is uppercased and the rest lowercased.
/// Leading, trailing and repeated whitespace collapses.
///
/// ```
/// use tidy_utils::string::capitalize_words;
///
/// assert_eq!(capitalize_words("hello   wORLD"), "Hello World");
/// ```
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

/// Compiled character-class patterns, one per [`SpacePolicy`].
#[derive(Debug)]
struct SpecialCharPatterns {
    keep_spaces: Regex,
    strip_spaces: Regex,
}

impl SpecialCharPatterns {
    fn new() -> Self {
        Self {
            keep_spaces: Regex::new(r"[^a-zA-Z0-9\s]").expect("valid keep-spaces regex"),
            strip_spaces: Regex::new(r"[^a-zA-Z0-9]").expect("valid strip-spaces regex"),
        }
    }

    fn for_policy(&self, policy: SpacePolicy) -> &Regex {
        match policy {
            SpacePolicy::Keep => &self.keep_spaces,
            SpacePolicy::Strip => &self.strip_spaces,
        }
    }
}

static SPECIAL_CHAR_PATTERNS: OnceLock<SpecialCharPatterns> = OnceLock::new();

fn special_char_patterns() -> &'static SpecialCharPatterns {
    SPECIAL_CHAR_PATTERNS.get_or_init(SpecialCharPatterns::new)
}

/// Delete every character that is not an ASCII letter or digit.
///
/// Whitespace survives under [`SpacePolicy::Keep`]. Returns `Cow::Borrowed`
/// when nothing had to be removed.
#[must_use]
pub fn remove_special_chars(text: &str, spaces: SpacePolicy) -> Cow<'_, str> {
    special_char_patterns()
        .for_policy(spaces)
        .replace_all(text, "")
}

/// Truncate `text` to at most `length` characters, ending with `suffix` when cut.
///
/// The suffix counts toward the budget: a truncated result is exactly `length`
/// characters long. Text that already fits is returned unchanged.
///
/// Fails with [`OpError::InvalidArgument`] when the text must be cut but
/// `length` cannot even hold the suffix.
pub fn truncate_string(text: &str, length: usize, suffix: &str) -> OpResult<String> {
    if text.chars().count() <= length {
        return Ok(text.to_string());
    }
    let suffix_len = suffix.chars().count();
    let Some(take) = length.checked_sub(suffix_len) else {
        return Err(OpError::invalid_argument(
            "truncate_string",
            format!("length {length} is shorter than suffix length {suffix_len}"),
        ));
    };
    tracing::debug!(length, take, "truncating text");
    let head: String = text.chars().take(take).collect();
    Ok(format!("{head}{suffix}"))
}
