use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::types::{AnalysisReport, FleschReadingEase, WordCount};
use crate::utils::{round_to, Tally};

const READING_WPM: f64 = 225.0;
const SPEAKING_WPM: f64 = 150.0;
const MAX_LONGEST_WORDS: usize = 5;
const MAX_FREQUENT_WORDS: usize = 5;

// Flesch reading ease without the syllable term: 206.835 - 1.015 * ASL
const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n+").expect("sentence pattern is valid"));
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));
static EXCLUSION_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"));

/// Analyze `text`, leaving out any word listed in `exclusions_raw`.
///
/// Exclusions are comma or whitespace separated and case-insensitive. This
/// never fails: empty input produces the zero report.
pub fn analyze(text: &str, exclusions_raw: &str) -> AnalysisReport {
    analyze_with(text, &parse_exclusions(exclusions_raw))
}

/// Analyze `text` against an already parsed, lower-case exclusion set
pub fn analyze_with(text: &str, exclusions: &HashSet<String>) -> AnalysisReport {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return AnalysisReport {
            characters,
            characters_no_spaces,
            ..AnalysisReport::default()
        };
    }

    let original_words: Vec<&str> = trimmed.split_whitespace().collect();
    let sentences = count_sentences(trimmed);
    let paragraphs = count_paragraphs(trimmed);

    let filtered_words: Vec<&str> = original_words
        .iter()
        .copied()
        .filter(|word| !exclusions.contains(&clean_lowercase(word)))
        .collect();
    let words = filtered_words.len();

    let (reading_seconds, speaking_seconds) = if words > 0 {
        (
            words as f64 / READING_WPM * 60.0,
            words as f64 / SPEAKING_WPM * 60.0,
        )
    } else {
        (0.0, 0.0)
    };

    let avg_word_length = if words > 0 {
        let letters: usize = filtered_words.iter().map(|w| w.chars().count()).sum();
        round_to(letters as f64 / words as f64, 2)
    } else {
        0.0
    };

    AnalysisReport {
        words,
        characters,
        characters_no_spaces,
        sentences,
        paragraphs,
        reading_time: format_duration(reading_seconds),
        speaking_time: format_duration(speaking_seconds),
        avg_word_length,
        longest_words: longest_words(&filtered_words),
        word_frequency: word_frequency(&filtered_words),
        flesch_reading_ease: flesch_reading_ease(original_words.len(), sentences),
    }
}

/// Parse a raw exclusion list into a set of lower-case words
pub fn parse_exclusions(raw: &str) -> HashSet<String> {
    EXCLUSION_SEPARATOR
        .split(&raw.to_lowercase())
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Render a duration as `"<minutes> min <seconds> sec"`
pub fn format_duration(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0).round() as u64;
    format!("{} min {} sec", total / 60, total % 60)
}

fn count_sentences(trimmed: &str) -> usize {
    SENTENCE_BREAK
        .split(trimmed)
        .filter(|s| !s.trim().is_empty())
        .count()
}

fn count_paragraphs(trimmed: &str) -> usize {
    PARAGRAPH_BREAK
        .split(trimmed)
        .filter(|p| !p.trim().is_empty())
        .count()
}

/// Lower-case and keep only ASCII letters, digits, hyphens and apostrophes
fn clean_lowercase(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(*c, '-' | '\''))
        .collect()
}

fn longest_words(words: &[&str]) -> Vec<String> {
    let mut longest_len = 0;
    let mut longest: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for word in words {
        let clean: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if clean.is_empty() {
            continue;
        }

        if clean.len() > longest_len {
            longest_len = clean.len();
            seen.clear();
            seen.insert(clean.to_lowercase());
            longest.clear();
            longest.push(clean);
        } else if clean.len() == longest_len
            && longest.len() < MAX_LONGEST_WORDS
            && seen.insert(clean.to_lowercase())
        {
            longest.push(clean);
        }
    }

    longest
}

fn word_frequency(words: &[&str]) -> Vec<WordCount> {
    let mut tally = Tally::new();
    for word in words {
        let clean = clean_lowercase(word);
        if !clean.is_empty() {
            tally.add(&clean);
        }
    }

    tally
        .top_n(MAX_FREQUENT_WORDS)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

fn flesch_reading_ease(total_words: usize, total_sentences: usize) -> FleschReadingEase {
    if total_words == 0 || total_sentences == 0 {
        return FleschReadingEase::default();
    }

    let avg_sentence_length = total_words as f64 / total_sentences as f64;
    let partial = round_to(FLESCH_BASE - FLESCH_SENTENCE_WEIGHT * avg_sentence_length, 1);

    FleschReadingEase {
        score: format!("{} (Needs Syllables)", partial),
        avg_sentence_length: round_to(avg_sentence_length, 2),
    }
}
