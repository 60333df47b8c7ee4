//! Configuration loaded from `config.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! `GITHUB_TOKEN` in the environment overrides the configured token.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, StatsError};
use crate::github::{default_social_links, github_username, PageLimits, SocialLink};

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub per_page: u32,
    pub max_pages: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            token: None,
            user_agent: format!("portfolio-stats/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            per_page: 100,
            max_pages: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 3600,
            capacity: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub cache: CacheConfig,
    pub socials: Vec<SocialLink>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            cache: CacheConfig::default(),
            socials: default_social_links(),
        }
    }
}

impl Config {
    /// `<config dir>/portfolio-stats/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio-stats").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        Ok(config.with_token_override(std::env::var(TOKEN_ENV).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| StatsError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| StatsError::Config(e.to_string()))
    }

    /// Replace the configured token with `token` when it is set and non-empty
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.github.token = Some(token);
        }
        self
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            per_page: self.github.per_page,
            max_pages: self.github.max_pages,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    /// GitHub login taken from the configured social links
    pub fn github_username(&self) -> String {
        github_username(&self.socials)
    }
}
