use serde::{Deserialize, Serialize};

/// A social profile linked from the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

impl SocialLink {
    fn new(name: &str, icon: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            url: url.to_string(),
        }
    }
}

/// The links shown in the site's footer
pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("Discord", "/social-icons/icons8-discord-94.png", "#"),
        SocialLink::new(
            "YouTube",
            "/social-icons/youtube.svg",
            "https://www.youtube.com/@wilsonrip",
        ),
        SocialLink::new(
            "GitHub",
            "/social-icons/icons8-github-94.png",
            "https://github.com/wilsonrip",
        ),
        SocialLink::new(
            "Twitch",
            "/social-icons/icons8-twitch-64.png",
            "https://www.twitch.tv/wilsoniirip",
        ),
    ]
}

/// The GitHub login from the link named `GitHub`, or an empty string
pub fn github_username(links: &[SocialLink]) -> String {
    links
        .iter()
        .find(|link| link.name == "GitHub")
        .and_then(|link| link.url.split_once("github.com/"))
        .and_then(|(_, path)| path.split(['/', '?', '#']).next())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github(url: &str) -> Vec<SocialLink> {
        vec![SocialLink::new("GitHub", "", url)]
    }

    #[test]
    fn test_default_links_resolve() {
        assert_eq!(github_username(&default_social_links()), "wilsonrip");
    }

    #[test]
    fn test_missing_link() {
        let links = vec![SocialLink::new("Twitch", "", "https://www.twitch.tv/x")];
        assert_eq!(github_username(&links), "");
        assert_eq!(github_username(&[]), "");
    }

    #[test]
    fn test_url_without_profile_path() {
        assert_eq!(github_username(&github("#")), "");
        assert_eq!(github_username(&github("https://github.com/")), "");
    }

    #[test]
    fn test_only_first_path_segment() {
        assert_eq!(github_username(&github("https://github.com/octocat/Hello-World")), "octocat");
        assert_eq!(github_username(&github("https://github.com/octocat?tab=repos")), "octocat");
    }

    #[test]
    fn test_name_match_is_exact() {
        let links = vec![SocialLink::new("github", "", "https://github.com/octocat")];
        assert_eq!(github_username(&links), "");
    }
}
