//! API trait definitions split by responsibility
//!
//! This module organizes the GitHub API surface into focused sub-traits:
//! - [`RepoApi`] - Repository create/get/delete and listing
//! - [`CollaboratorApi`] - Direct repository collaborators
//! - [`TeamApi`] - Organization teams, team repositories and memberships
//! - [`UserApi`] - Account lookup and organization membership
//!
//! The [`GitHubApi`](super::GitHubApi) super-trait combines all four.
//! Every listing has a page-level method and a default method that walks
//! all pages with [`collect_all`](super::pagination::collect_all).

mod collaborators;
mod repos;
mod teams;
mod users;

pub use collaborators::CollaboratorApi;
pub use repos::RepoApi;
pub use teams::TeamApi;
pub use users::UserApi;
