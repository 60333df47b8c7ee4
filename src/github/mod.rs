//! Access to GitHub account data.
//!
//! [`RepoSource`] is the seam between the statistics and the network:
//! [`GitHubClient`] implements it over the REST API, tests use in-memory
//! fakes. [`GitHubStats`] puts paging, aggregation and caching together.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RepoRecord, UserProfile};

pub mod client;
pub mod pages;
pub mod service;
pub mod socials;

pub use client::GitHubClient;
pub use pages::{list_repositories, repo_pages, PageLimits};
pub use service::GitHubStats;
pub use socials::{default_social_links, github_username, SocialLink};

/// A provider of repositories and profiles for a GitHub account
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch one page of repositories, most recently updated first.
    ///
    /// Pages are numbered from 1.
    async fn fetch_repo_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepoRecord>>;

    /// Fetch the account's public profile
    async fn get_profile(&self, username: &str) -> Result<UserProfile>;
}
