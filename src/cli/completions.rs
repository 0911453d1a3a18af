//! Shell completions for the octop CLI
//!
//! Static scripts come from `octop completion <SHELL>`. Dynamic completion
//! (`COMPLETE=<shell> octop`) additionally offers repository names by
//! querying the API at completion time.
//!
//! Shell support:
//! - Fish/Zsh: Full support with descriptions
//! - Bash: Values only (no description display)

use std::io;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::engine::{ArgValueCandidates, CompletionCandidate};
use clap_complete::Shell;

use crate::cli::Cli;
use crate::client::models::Repository;
use crate::client::{GitHubClient, RepoApi};
use crate::config::Config;

/// Timeout for completion API calls
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(5);

/// Write the static completion script for `shell` to stdout
pub fn generate(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "octop", &mut io::stdout());
}

/// Create a blocking runtime for completion API calls.
///
/// Completers are called synchronously by the shell, so we need
/// a runtime to execute async API calls.
fn blocking_runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .ok()
}

/// Load config the way `main` does, from the environment only.
///
/// Returns None if the config file cannot be read.
fn completion_config() -> Option<Config> {
    let config_path = std::env::var("OCTOP_CONFIG").ok();
    let api_host = std::env::var("OCTOP_API_HOST").ok();

    Config::load_at(config_path.as_deref())
        .ok()
        .map(|config| config.with_env().with_api_host(api_host.as_deref()))
}

/// Candidates for a list of repositories.
///
/// Repositories owned by `me` complete to their bare name; all others to
/// `owner/name`. Help shows the description, or the full name when there is
/// none.
pub fn repo_candidates(repos: &[Repository], me: Option<&str>) -> Vec<CompletionCandidate> {
    repos
        .iter()
        .map(|repo| {
            let mine = me.is_some_and(|me| repo.owner.login.eq_ignore_ascii_case(me));
            let value = if mine {
                repo.name.clone()
            } else {
                repo.full_name.clone()
            };
            let help = repo
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| repo.full_name.clone());
            CompletionCandidate::new(value).help(Some(help.into()))
        })
        .collect()
}

/// Complete repository names from the first page of the user's repositories.
///
/// Note: clap_complete handles prefix filtering - we return all candidates.
pub fn complete_repo_names() -> Vec<CompletionCandidate> {
    completion_config()
        .map(|config| fetch_repo_candidates(&config))
        .unwrap_or_default()
}

/// Query the API for candidates; any failure yields no candidates.
///
/// Completions should never break the shell, so every failure is silent.
/// Inside an already running runtime nothing is fetched.
fn fetch_repo_candidates(config: &Config) -> Vec<CompletionCandidate> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return vec![];
    }

    let Ok(token) = config.require_token() else {
        return vec![];
    };
    let Ok(client) = GitHubClient::new(config.api_host(), token) else {
        return vec![];
    };
    let Some(rt) = blocking_runtime() else {
        return vec![];
    };

    let result = rt.block_on(async {
        tokio::time::timeout(COMPLETION_TIMEOUT, client.list_user_repos_page(None)).await
    });

    match result {
        Ok(Ok(page)) => repo_candidates(&page.items, config.username()),
        _ => vec![],
    }
}

/// Create completion candidates for repository names.
pub fn repo_name_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_repo_names)
}
