//! GitHub API client

pub mod api;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::{CollaboratorApi, RepoApi, TeamApi, UserApi};
pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;

/// GitHub API client trait
///
/// Super-trait over every resource trait so handlers can take a single
/// client parameter.
pub trait GitHubApi: RepoApi + CollaboratorApi + TeamApi + UserApi {}

impl<T> GitHubApi for T where T: RepoApi + CollaboratorApi + TeamApi + UserApi {}
