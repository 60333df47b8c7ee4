//! # Portfolio Statistics Library
//!
//! `portfolio_stats` holds the computations behind a personal portfolio
//! site: the word counter's text analysis and the GitHub profile statistics
//! shown on the home page.
//!
//! ## Features
//!
//! - Word, character, sentence and paragraph counts
//! - Reading and speaking time estimates
//! - Word frequency, longest words and a partial Flesch readability score
//! - Exclusion lists that only affect word statistics
//! - Text clean-up commands (whitespace, duplicate words, case)
//! - Paginated GitHub repository fetch with a page cap
//! - Star, fork, language and commit-estimate aggregation
//! - Time-bounded caching of GitHub results per account
//!
//! ## Example
//!
//! ```
//! use portfolio_stats::analysis::analyze;
//!
//! let report = analyze("The quick brown fox. The lazy dog!", "the");
//! assert_eq!(report.words, 5);
//! assert_eq!(report.sentences, 2);
//! assert_eq!(report.longest_words, vec!["quick", "brown"]);
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{aggregate, analyze, TextCommand};
pub use app::WordCounter;
pub use config::Config;
pub use error::{Result, StatsError};
pub use github::{GitHubClient, GitHubStats, RepoSource};
pub use types::{AnalysisReport, CacheKey, RepoRecord, UserProfile, UserStatsReport};
