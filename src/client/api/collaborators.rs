//! Collaborator API trait

use async_trait::async_trait;

use crate::client::models::Collaborator;
use crate::client::pagination::{Page, PageToken, collect_all};
use crate::error::Result;
use crate::repo::RepoId;

/// Direct collaborator operations for the GitHub API
#[async_trait]
pub trait CollaboratorApi: Send + Sync {
    /// One page of a repository's collaborators
    async fn list_collaborators_page(
        &self,
        repo: &RepoId,
        token: Option<PageToken>,
    ) -> Result<Page<Collaborator>>;

    /// Every collaborator on a repository
    async fn list_collaborators(&self, repo: &RepoId) -> Result<Vec<Collaborator>> {
        collect_all(|token| self.list_collaborators_page(repo, token)).await
    }

    /// Add (or invite) a user with the given permission
    async fn add_collaborator(&self, repo: &RepoId, login: &str, permission: &str) -> Result<()>;

    /// Remove a user's direct access
    async fn remove_collaborator(&self, repo: &RepoId, login: &str) -> Result<()>;
}
