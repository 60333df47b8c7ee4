//! Editing commands the word counter offers on its text buffer.
//!
//! Each command maps the current text to a new one; the caller re-runs the
//! analysis on the result.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A text transformation offered next to the word counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    CollapseWhitespace,
    RemoveDuplicateWords,
    Uppercase,
    Lowercase,
    TitleCase,
}

impl TextCommand {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCommand::CollapseWhitespace => collapse_whitespace(text),
            TextCommand::RemoveDuplicateWords => remove_duplicate_words(text),
            TextCommand::Uppercase => text.to_uppercase(),
            TextCommand::Lowercase => text.to_lowercase(),
            TextCommand::TitleCase => to_title_case(text),
        }
    }
}

/// Replace every whitespace run with a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Drop a word when it repeats the previous kept word, ignoring case.
///
/// Kept words are joined by single spaces; line breaks are not preserved.
pub fn remove_duplicate_words(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut last_word = String::new();
    let mut start = 0;

    let gaps = WHITESPACE
        .find_iter(text)
        .map(|gap| (gap.start(), gap.end()))
        .chain(std::iter::once((text.len(), text.len())));

    for (gap_start, gap_end) in gaps {
        let word = &text[start..gap_start];
        let lower = word.to_lowercase();
        if !word.is_empty() && lower != last_word {
            if !cleaned.is_empty() {
                cleaned.push(' ');
            }
            cleaned.push_str(word);
            last_word = lower;
        }
        start = gap_end;
    }

    cleaned
}

/// Lower-case everything, then capitalize the first character after each space
pub fn to_title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
