//! Configuration management for octop
//!
//! Settings come from an optional YAML file and are overlaid with the
//! process environment once at start-up. The resulting [`Config`] is passed
//! explicitly to everything that needs it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default GitHub REST API host
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Default GitHub web host (used by `open` and repository URLs)
pub const DEFAULT_WEB_HOST: &str = "https://github.com";

/// Environment variable holding the access token
pub const TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";

/// Environment variable holding the operator's own account name
pub const USERNAME_ENV: &str = "GITHUB_USERNAME";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub personal access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Ambient identity used for unqualified repository names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// REST API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Web base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_host: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".octop").join("config.yaml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing default file yields an empty config; a missing explicit
    /// path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(TOKEN_ENV) {
            self.access_token = Some(token);
        }
        if let Some(username) = non_empty(USERNAME_ENV) {
            self.username = Some(username);
        }
        self.username = self.username.filter(|u| !u.is_empty());
        self
    }

    /// Apply a runtime API host override (e.g. `--api-host`)
    pub fn with_api_host(mut self, api_host: Option<&str>) -> Self {
        if let Some(host) = api_host {
            self.api_host = Some(host.to_string());
        }
        self
    }

    /// Ambient identity, if configured
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// API base URL without a trailing slash
    pub fn api_host(&self) -> &str {
        self.api_host
            .as_deref()
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
    }

    /// Web base URL without a trailing slash
    pub fn web_host(&self) -> &str {
        self.web_host
            .as_deref()
            .unwrap_or(DEFAULT_WEB_HOST)
            .trim_end_matches('/')
    }

    /// Return the access token, failing when it is not configured
    pub fn require_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingToken.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.access_token.is_none());
        assert!(config.username().is_none());
        assert_eq!(config.api_host(), DEFAULT_API_HOST);
        assert_eq!(config.web_host(), DEFAULT_WEB_HOST);
    }

    #[test]
    fn test_env_overlays_file_values() {
        let config = Config {
            access_token: Some("file-token".to_string()),
            username: Some("file-user".to_string()),
            ..Default::default()
        }
        .with_env_from(env(&[(TOKEN_ENV, "env-token"), (USERNAME_ENV, "env-user")]));

        assert_eq!(config.access_token.as_deref(), Some("env-token"));
        assert_eq!(config.username(), Some("env-user"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let config = Config {
            username: Some("file-user".to_string()),
            ..Default::default()
        }
        .with_env_from(env(&[(USERNAME_ENV, ""), (TOKEN_ENV, "  ")]));

        assert_eq!(config.username(), Some("file-user"));
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_empty_username_in_file_is_absent() {
        let config = Config {
            username: Some(String::new()),
            ..Default::default()
        }
        .with_env_from(env(&[]));

        assert!(config.username().is_none());
    }

    #[test]
    fn test_require_token() {
        let config = Config::default();
        assert!(config.require_token().is_err());

        let config = Config {
            access_token: Some("t".to_string()),
            ..Default::default()
        };
        assert_eq!(config.require_token().unwrap(), "t");
    }

    #[test]
    fn test_api_host_override_trims_slash() {
        let config = Config::default().with_api_host(Some("http://127.0.0.1:1234/"));
        assert_eq!(config.api_host(), "http://127.0.0.1:1234");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "access_token: abc\nusername: octocat\nweb_host: https://ghe.example.com/\n",
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.username(), Some("octocat"));
        assert_eq!(config.web_host(), "https://ghe.example.com");
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = Config::load_at(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(path).unwrap(), Config::default());
    }
}
