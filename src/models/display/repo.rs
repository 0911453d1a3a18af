//! Repository display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Repository;

/// Repository row for `list` output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    #[tabled(rename = "⎇")]
    #[serde(skip)]
    pub fork_marker: String,

    #[tabled(rename = "🔒")]
    #[serde(skip)]
    pub private_marker: String,

    /// Repository name (`owner/name` in flat listings)
    #[tabled(rename = "Name")]
    pub name: String,

    /// Web URL
    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(skip)]
    pub owner: String,

    #[tabled(skip)]
    pub fork: bool,

    #[tabled(skip)]
    pub private: bool,
}

impl RepoDisplay {
    /// Build a row, linking to `web_host` when the API gave no URL
    pub fn new(repo: &Repository, web_host: &str) -> Self {
        let url = repo
            .html_url
            .clone()
            .unwrap_or_else(|| format!("{}/{}", web_host, repo.full_name));

        Self {
            fork_marker: if repo.fork { "⎇" } else { "" }.to_string(),
            private_marker: if repo.private { "🔒" } else { "" }.to_string(),
            name: repo.name.clone(),
            url,
            owner: repo.owner.login.clone(),
            fork: repo.fork,
            private: repo.private,
        }
    }

    /// Same row with the name qualified by its owner
    pub fn qualified(mut self) -> Self {
        self.name = format!("{}/{}", self.owner, self.name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Account;

    fn repo(fork: bool, private: bool, html_url: Option<&str>) -> Repository {
        Repository {
            id: 7,
            name: "widgets".to_string(),
            full_name: "acme/widgets".to_string(),
            owner: Account {
                login: "acme".to_string(),
                ..Default::default()
            },
            private,
            fork,
            html_url: html_url.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_markers() {
        let row = RepoDisplay::new(&repo(true, true, None), "https://github.com");
        assert_eq!(row.fork_marker, "⎇");
        assert_eq!(row.private_marker, "🔒");

        let row = RepoDisplay::new(&repo(false, false, None), "https://github.com");
        assert!(row.fork_marker.is_empty());
        assert!(row.private_marker.is_empty());
    }

    #[test]
    fn test_url_falls_back_to_web_host() {
        let row = RepoDisplay::new(&repo(false, false, None), "https://ghe.example.com");
        assert_eq!(row.url, "https://ghe.example.com/acme/widgets");

        let row = RepoDisplay::new(
            &repo(false, false, Some("https://github.com/acme/widgets")),
            "https://ghe.example.com",
        );
        assert_eq!(row.url, "https://github.com/acme/widgets");
    }

    #[test]
    fn test_json_skips_markers() {
        let row = RepoDisplay::new(&repo(true, false, None), "https://github.com").qualified();
        let value = serde_json::to_value(&row).unwrap();

        assert_eq!(value["name"], "acme/widgets");
        assert_eq!(value["fork"], true);
        assert!(value.get("fork_marker").is_none());
    }
}
