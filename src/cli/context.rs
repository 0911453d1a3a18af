//! Command execution context
//!
//! Bundles the merged configuration, an authenticated API client and the
//! output format so handlers don't repeat that setup.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;

/// Settings handlers read besides the client
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    /// Ambient identity used to complete bare repository names
    pub username: Option<&'a str>,
    /// Base URL of the web interface
    pub web_host: &'a str,
    pub format: OutputFormat,
}

#[cfg(test)]
impl Settings<'static> {
    /// Pretty output against the public web host
    pub fn pretty(username: Option<&'static str>) -> Self {
        Settings {
            username,
            web_host: crate::config::DEFAULT_WEB_HOST,
            format: OutputFormat::Pretty,
        }
    }
}

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Configuration merged from file, environment and flags
    pub config: Config,
    /// Authenticated API client
    pub client: GitHubClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingToken` when no access token is configured,
    /// or a network error if the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions, config: Config) -> Result<Self> {
        let token = config.require_token()?;
        let client = GitHubClient::new(config.api_host(), token)?;

        Ok(Self {
            client,
            format: opts.format,
            config,
        })
    }

    /// Ambient identity used to complete bare repository names
    pub fn username(&self) -> Option<&str> {
        self.config.username()
    }

    /// Settings passed to handlers
    pub fn settings(&self) -> Settings<'_> {
        Settings {
            username: self.username(),
            web_host: self.config.web_host(),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    fn opts() -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            config: None,
            api_host: None,
            debug: false,
        }
    }

    #[test]
    fn test_context_requires_token() {
        let err = CommandContext::new(&opts(), Config::default())
            .err()
            .expect("missing token must fail");
        assert!(matches!(err, Error::Config(ConfigError::MissingToken)));
    }

    #[test]
    fn test_context_carries_format_and_username() {
        let config = Config {
            access_token: Some("t".to_string()),
            username: Some("octocat".to_string()),
            ..Default::default()
        };

        let ctx = CommandContext::new(&opts(), config).unwrap();
        assert_eq!(ctx.format, OutputFormat::Table);
        assert_eq!(ctx.username(), Some("octocat"));

        let settings = ctx.settings();
        assert_eq!(settings.username, Some("octocat"));
        assert_eq!(settings.web_host, "https://github.com");
    }
}
