//! GitHub REST API client

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::RepoSource;
use crate::config::GitHubConfig;
use crate::error::{Result, StatsError};
use crate::types::{RepoRecord, UserProfile};

const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// [`RepoSource`] backed by the GitHub REST API
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub API client
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers(config)?)
            .build()?;

        info!("Created GitHub API client for {}", config.api_base_url);

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn repos_url(&self, username: &str, page: u32, per_page: u32) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}&page={}",
            self.base_url, username, per_page, page
        )
    }

    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, username)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("Making GitHub API request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(StatsError::Decode)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn fetch_repo_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepoRecord>> {
        self.get_json(&self.repos_url(username, page, per_page)).await
    }

    async fn get_profile(&self, username: &str) -> Result<UserProfile> {
        self.get_json(&self.profile_url(username)).await
    }
}

fn default_headers(config: &GitHubConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_JSON));
    headers.insert(USER_AGENT, header_value(&config.user_agent, "user agent")?);

    if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("token {}", token), "access token")?,
        );
    }

    Ok(headers)
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| StatsError::Config(format!("invalid {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate;
    use pretty_assertions::assert_eq;

    const REPO_JSON: &str = r#"[
        {
            "id": 1296269,
            "name": "Hello-World",
            "description": "This your first repo!",
            "html_url": "https://github.com/octocat/Hello-World",
            "homepage": null,
            "stargazers_count": 80,
            "forks_count": 9,
            "language": "Rust",
            "topics": ["octocat", "api"],
            "pushed_at": "2011-01-26T19:06:43Z",
            "created_at": "2011-01-26T19:01:12Z",
            "fork": false,
            "watchers_count": 80
        },
        {
            "id": 42,
            "name": "forked",
            "description": null,
            "html_url": "https://github.com/octocat/forked",
            "homepage": "https://example.com",
            "stargazers_count": 0,
            "forks_count": 0,
            "language": null,
            "pushed_at": "2020-05-01T00:00:00Z",
            "created_at": "2020-04-01T00:00:00Z",
            "fork": true
        }
    ]"#;

    fn config() -> GitHubConfig {
        GitHubConfig {
            api_base_url: "https://api.github.com/".to_string(),
            ..GitHubConfig::default()
        }
    }

    #[test]
    fn test_urls() {
        let client = GitHubClient::new(&config()).unwrap();
        assert_eq!(
            client.repos_url("octocat", 2, 100),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=100&page=2"
        );
        assert_eq!(client.profile_url("octocat"), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_headers_include_token() {
        let mut config = config();
        config.token = Some("secret".to_string());
        let headers = default_headers(&config).unwrap();

        assert_eq!(headers[ACCEPT], GITHUB_V3_JSON);
        assert_eq!(headers[AUTHORIZATION], "token secret");
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_headers_without_token() {
        let headers = default_headers(&config()).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_invalid_user_agent_is_a_config_error() {
        let mut config = config();
        config.user_agent = "bad\nagent".to_string();
        assert!(matches!(default_headers(&config), Err(StatsError::Config(_))));
    }

    #[test]
    fn test_repository_json_shape() {
        let repos: Vec<RepoRecord> = serde_json::from_str(REPO_JSON).unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].stars, 80);
        assert_eq!(repos[0].forks, 9);
        assert_eq!(repos[0].url, "https://github.com/octocat/Hello-World");
        assert_eq!(repos[0].topics, vec!["octocat", "api"]);
        assert!(repos[0].pushed_at > repos[0].created_at);
        assert!(repos[0].created_at.is_some());
        assert!(repos[1].is_fork);
        assert!(repos[1].topics.is_empty());
        assert_eq!(repos[1].language, None);
    }

    #[test]
    fn test_repository_without_dates_still_aggregates() {
        let json = r#"[
            {
                "id": 7,
                "name": "placeholder",
                "description": null,
                "html_url": "https://github.com/octocat/placeholder",
                "homepage": null,
                "stargazers_count": 2,
                "forks_count": 1,
                "language": "Go",
                "pushed_at": null,
                "created_at": null,
                "fork": false
            }
        ]"#;
        let mut repos: Vec<RepoRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(repos[0].pushed_at, None);
        assert_eq!(repos[0].created_at, None);

        repos.extend(serde_json::from_str::<Vec<RepoRecord>>(REPO_JSON).unwrap());
        let profile = UserProfile {
            login: "octocat".to_string(),
            public_repos: 3,
        };
        let report = aggregate(&profile, &repos);

        assert_eq!(report.total_stars, 82);
        assert_eq!(report.total_forks, 10);
        assert_eq!(report.total_commits_estimate, 7);
        assert_eq!(report.earliest_repo_date.to_rfc3339(), "2011-01-26T19:01:12+00:00");
        assert_eq!(report.latest_repo_date.to_rfc3339(), "2020-05-01T00:00:00+00:00");
    }

    #[test]
    fn test_profile_json_shape() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"login": "octocat", "public_repos": 8, "followers": 3, "bio": null}"#)
                .unwrap();
        assert_eq!(
            profile,
            UserProfile {
                login: "octocat".to_string(),
                public_repos: 8,
            }
        );
    }
}
