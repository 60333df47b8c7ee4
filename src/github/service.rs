use chrono::Utc;
use log::error;
use std::time::Duration;

use super::{list_repositories, PageLimits, RepoSource};
use crate::analysis::{aggregate, CacheManager};
use crate::error::Result;
use crate::types::{CacheKey, RepoRecord, UserStatsReport};

/// Cached GitHub statistics for the site.
///
/// Both entry points swallow fetch failures: the failure is logged and a
/// default value is returned. Only successful results are cached.
pub struct GitHubStats<S> {
    source: S,
    limits: PageLimits,
    repos: CacheManager<Vec<RepoRecord>>,
    stats: CacheManager<UserStatsReport>,
}

impl<S: RepoSource> GitHubStats<S> {
    pub fn new(source: S, limits: PageLimits, ttl: Duration, capacity: usize) -> Self {
        Self {
            source,
            limits,
            repos: CacheManager::new(capacity, ttl),
            stats: CacheManager::new(capacity, ttl),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Aggregate statistics for `username`, or the empty report on failure
    pub async fn user_stats(&self, username: &str) -> UserStatsReport {
        if username.is_empty() {
            return UserStatsReport::empty(Utc::now());
        }

        let key = CacheKey::new(username);
        let result = self
            .stats
            .get_or_try_compute(&key, || self.fetch_user_stats(username))
            .await;

        result.unwrap_or_else(|e| {
            error!("Failed to fetch GitHub user statistics for {}: {}", username, e);
            UserStatsReport::empty(Utc::now())
        })
    }

    /// Repositories of `username` that are not forks, or nothing on failure
    pub async fn repositories(&self, username: &str) -> Vec<RepoRecord> {
        if username.is_empty() {
            return Vec::new();
        }

        match self.all_repositories(username).await {
            Ok(repos) => repos.into_iter().filter(|repo| !repo.is_fork).collect(),
            Err(e) => {
                error!("Failed to fetch GitHub repositories for {}: {}", username, e);
                Vec::new()
            }
        }
    }

    /// Warm both caches for `username`, e.g. before a page is rendered.
    ///
    /// The statistics and the repository listing share one fetch of the
    /// repository pages. Failures are logged and nothing is cached for them.
    pub async fn preload(&self, username: &str) {
        tokio::join!(self.user_stats(username), self.repositories(username));
    }

    async fn fetch_user_stats(&self, username: &str) -> Result<UserStatsReport> {
        let profile = self.source.get_profile(username).await?;
        let repos = self.all_repositories(username).await?;
        Ok(aggregate(&profile, &repos))
    }

    async fn all_repositories(&self, username: &str) -> Result<Vec<RepoRecord>> {
        self.repos
            .get_or_try_compute(&CacheKey::new(username), || {
                list_repositories(&self.source, username, self.limits)
            })
            .await
    }
}
