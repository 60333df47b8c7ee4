//! # Common Types
//!
//! This module contains the report records produced by the word counter and
//! the GitHub statistics aggregation, plus the repository records they are
//! computed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder rendered for a duration when nothing has been typed yet.
pub const ZERO_DURATION: &str = "0 min 0 sec";

/// Placeholder score when readability cannot be computed.
pub const SCORE_UNAVAILABLE: &str = "N/A";

/// A word and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Partial Flesch reading ease.
///
/// The syllable term of the formula is not computed, so `score` is either
/// `"N/A"` or a value suffixed with `(Needs Syllables)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleschReadingEase {
    pub score: String,
    pub avg_sentence_length: f64,
}

impl Default for FleschReadingEase {
    fn default() -> Self {
        Self {
            score: SCORE_UNAVAILABLE.to_string(),
            avg_sentence_length: 0.0,
        }
    }
}

/// The result of analyzing a block of text.
///
/// Sentence, paragraph and readability figures come from the unfiltered
/// text. Word count, timings, average length, longest words and frequency
/// come from the token list after exclusions are removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of tokens left after exclusions
    pub words: usize,
    /// Length of the raw input, whitespace included
    pub characters: usize,
    /// Length of the raw input with all whitespace removed
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Estimated silent reading time at 225 words per minute
    pub reading_time: String,
    /// Estimated speaking time at 150 words per minute
    pub speaking_time: String,
    pub avg_word_length: f64,
    /// Up to five distinct tokens sharing the maximum cleaned length
    pub longest_words: Vec<String>,
    /// Top five words by descending count
    pub word_frequency: Vec<WordCount>,
    pub flesch_reading_ease: FleschReadingEase,
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self {
            words: 0,
            characters: 0,
            characters_no_spaces: 0,
            sentences: 0,
            paragraphs: 0,
            reading_time: ZERO_DURATION.to_string(),
            speaking_time: ZERO_DURATION.to_string(),
            avg_word_length: 0.0,
            longest_words: Vec::new(),
            word_frequency: Vec::new(),
            flesch_reading_ease: FleschReadingEase::default(),
        }
    }
}

/// A repository as returned by the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
    pub homepage: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// `null` for repositories that were never pushed to
    pub pushed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "fork")]
    pub is_fork: bool,
}

/// The subset of a GitHub user profile the statistics need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    /// Published repository count, used as the total regardless of how many
    /// repositories were actually fetched
    pub public_repos: u64,
}

/// A language and the number of repositories using it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub name: String,
    pub count: usize,
}

/// Aggregate statistics for a GitHub account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatsReport {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_repos: u64,
    /// Top five languages of non-fork repositories
    pub top_languages: Vec<LanguageCount>,
    pub earliest_repo_date: DateTime<Utc>,
    pub latest_repo_date: DateTime<Utc>,
    /// Heuristic commit estimate, see [`crate::analysis::estimate_commits`]
    pub total_commits_estimate: u64,
}

impl UserStatsReport {
    /// The report shown when statistics could not be fetched.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            total_stars: 0,
            total_forks: 0,
            total_repos: 0,
            top_languages: Vec::new(),
            earliest_repo_date: now,
            latest_repo_date: now,
            total_commits_estimate: 0,
        }
    }
}

/// A key used for caching fetched results per GitHub account.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CacheKey {
    /// The GitHub login the result belongs to
    pub username: String,
}

impl CacheKey {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
