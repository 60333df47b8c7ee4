use chrono::{DateTime, Utc};

use crate::types::{LanguageCount, RepoRecord, UserProfile, UserStatsReport};
use crate::utils::Tally;

const TOP_LANGUAGES: usize = 5;
const MILLIS_PER_MONTH: f64 = 30.0 * 24.0 * 60.0 * 60.0 * 1000.0;
const MAX_EXTRA_COMMITS: u64 = 50;
const COMMITS_PER_MONTH: u64 = 2;

/// Aggregate statistics over every fetched repository
pub fn aggregate(profile: &UserProfile, repos: &[RepoRecord]) -> UserStatsReport {
    aggregate_at(profile, repos, Utc::now())
}

/// Same as [`aggregate`], with the "now" used for an empty date range fixed.
///
/// Stars, forks and the commit estimate count every repository, forks
/// included. Languages are only tallied for repositories that are not forks.
/// The repository total is the profile's published count.
pub fn aggregate_at(
    profile: &UserProfile,
    repos: &[RepoRecord],
    now: DateTime<Utc>,
) -> UserStatsReport {
    let mut total_stars = 0;
    let mut total_forks = 0;
    let mut total_commits_estimate = 0;
    let mut earliest = now;
    let mut latest = DateTime::<Utc>::default();
    let mut languages = Tally::new();

    for repo in repos {
        total_stars += repo.stars;
        total_forks += repo.forks;
        total_commits_estimate += estimate_commits(repo.created_at, repo.pushed_at);

        if let Some(created_at) = repo.created_at {
            earliest = earliest.min(created_at);
        }
        if let Some(pushed_at) = repo.pushed_at {
            latest = latest.max(pushed_at);
        }

        if !repo.is_fork {
            if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
                languages.add(language);
            }
        }
    }

    let top_languages = languages
        .top_n(TOP_LANGUAGES)
        .into_iter()
        .map(|(name, count)| LanguageCount { name, count })
        .collect();

    UserStatsReport {
        total_stars,
        total_forks,
        total_repos: profile.public_repos,
        top_languages,
        earliest_repo_date: earliest,
        latest_repo_date: latest,
        total_commits_estimate,
    }
}

/// Rough commit count for one repository.
///
/// One commit, plus two per 30-day month between creation and the last
/// push (at least one month, at most 50 extra) when the repository was
/// pushed after it was created. A missing date counts as no activity.
/// A heuristic, not a measurement.
pub fn estimate_commits(
    created_at: Option<DateTime<Utc>>,
    pushed_at: Option<DateTime<Utc>>,
) -> u64 {
    let (created_at, pushed_at) = match (created_at, pushed_at) {
        (Some(created_at), Some(pushed_at)) if pushed_at > created_at => (created_at, pushed_at),
        _ => return 1,
    };

    let elapsed = (pushed_at - created_at).num_milliseconds() as f64;
    let months = ((elapsed / MILLIS_PER_MONTH).round() as u64).max(1);
    1 + (months * COMMITS_PER_MONTH).min(MAX_EXTRA_COMMITS)
}
