//! Repository API trait

use async_trait::async_trait;

use crate::client::models::{CreateRepoRequest, Repository};
use crate::client::pagination::{Page, PageToken, collect_all};
use crate::error::Result;
use crate::repo::RepoId;

/// Repository operations for the GitHub API
#[async_trait]
pub trait RepoApi: Send + Sync {
    /// Fetch a single repository
    async fn get_repo(&self, repo: &RepoId) -> Result<Repository>;

    /// Create a repository.
    ///
    /// With `org` set the repository is created in that organization,
    /// otherwise under the authenticated user.
    async fn create_repo(&self, org: Option<&str>, request: &CreateRepoRequest)
    -> Result<Repository>;

    /// Delete a repository
    async fn delete_repo(&self, repo: &RepoId) -> Result<()>;

    /// One page of the authenticated user's repositories
    async fn list_user_repos_page(&self, token: Option<PageToken>) -> Result<Page<Repository>>;

    /// Every repository the authenticated user can access
    async fn list_user_repos(&self) -> Result<Vec<Repository>> {
        collect_all(|token| self.list_user_repos_page(token)).await
    }
}
