use futures::stream::{self, Stream, TryStreamExt};
use log::{debug, warn};

use super::RepoSource;
use crate::error::{Result, StatsError};
use crate::types::RepoRecord;

/// Bounds on repository pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub per_page: u32,
    /// Hard cap on the number of pages requested
    pub max_pages: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            per_page: 100,
            max_pages: 10,
        }
    }
}

/// Lazily fetch repository pages for `username`.
///
/// Pages are requested one after another. The stream ends after a page
/// shorter than `per_page`, after `max_pages` pages, or after the first
/// error, which it yields.
pub fn repo_pages<'a, S>(
    source: &'a S,
    username: &'a str,
    limits: PageLimits,
) -> impl Stream<Item = Result<Vec<RepoRecord>>> + 'a
where
    S: RepoSource + ?Sized,
{
    let first = Some(1u32).filter(|_| limits.max_pages > 0);

    stream::try_unfold(first, move |next| async move {
        let Some(page) = next else {
            return Ok::<_, StatsError>(None);
        };

        debug!("Fetching GitHub repos page {} for {}", page, username);
        let repos = source.fetch_repo_page(username, page, limits.per_page).await?;

        let next = if repos.len() < limits.per_page as usize {
            None
        } else if page >= limits.max_pages {
            warn!(
                "Reached maximum page count ({}) when fetching GitHub repositories for {}",
                limits.max_pages, username
            );
            None
        } else {
            Some(page + 1)
        };

        Ok(Some((repos, next)))
    })
}

/// Fetch every repository page for `username`, forks included
pub async fn list_repositories<S>(
    source: &S,
    username: &str,
    limits: PageLimits,
) -> Result<Vec<RepoRecord>>
where
    S: RepoSource + ?Sized,
{
    repo_pages(source, username, limits).try_concat().await
}
