use thiserror::Error;

/// Errors raised while loading configuration or talking to GitHub.
///
/// Text analysis never fails; these only surface from the fetch side and
/// are swallowed by [`crate::github::GitHubStats`] before reaching a page.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error: {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
