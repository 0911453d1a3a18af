//! Mock GitHub API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! handlers without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{CollaboratorApi, RepoApi, TeamApi, UserApi};
use super::models::{Account, Collaborator, CreateRepoRequest, Repository, Team};
use super::pagination::{Page, PageToken};
use crate::error::{ApiError, Result};
use crate::repo::RepoId;

/// Prefix of the synthetic page tokens handed out by the mock
const PAGE_TOKEN_PREFIX: &str = "mock-page:";

/// Mock API client for testing.
///
/// Configure accounts, repositories and teams via builder methods, then
/// pass the mock to a handler and inspect the recorded calls.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_accounts(vec![org("acme")])
///     .await
///     .with_page_size(2)
///     .await;
///
/// let teams = mock.list_org_teams("acme").await?;
/// ```
pub struct MockGitHubClient {
    /// Accounts returned from get_user
    accounts: Arc<Mutex<Vec<Account>>>,
    /// Repositories returned from get_repo and list_user_repos
    repos: Arc<Mutex<Vec<Repository>>>,
    /// Collaborators returned for every repository
    collaborators: Arc<Mutex<Vec<Collaborator>>>,
    /// Teams returned from list_org_teams
    org_teams: Arc<Mutex<Vec<Team>>>,
    /// Teams returned from list_repo_teams
    repo_teams: Arc<Mutex<Vec<Team>>>,
    /// Members returned from list_team_members
    team_members: Arc<Mutex<Vec<Account>>>,
    /// Members returned from list_org_members
    org_members: Arc<Mutex<Vec<Account>>>,
    /// Split listings into pages of this size
    page_size: Arc<Mutex<Option<usize>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by the named method - consumed on first use
    fail_on: Arc<Mutex<Option<(&'static str, ApiError)>>>,
    /// Captured calls for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockGitHubClient {
    fn default() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
            repos: Arc::new(Mutex::new(Vec::new())),
            collaborators: Arc::new(Mutex::new(Vec::new())),
            org_teams: Arc::new(Mutex::new(Vec::new())),
            repo_teams: Arc::new(Mutex::new(Vec::new())),
            team_members: Arc::new(Mutex::new(Vec::new())),
            org_members: Arc::new(Mutex::new(Vec::new())),
            page_size: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            fail_on: Arc::new(Mutex::new(None)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// A captured API call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "create_repo", "add_collaborator")
    pub method: &'static str,
    /// Main target of the call (repository, org, or org/team)
    pub target: String,
    /// Secondary argument (login, permission, role), if any
    pub detail: Option<String>,
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure accounts returned from get_user.
    pub async fn with_accounts(self, accounts: Vec<Account>) -> Self {
        *self.accounts.lock().await = accounts;
        self
    }

    /// Configure repositories.
    pub async fn with_repos(self, repos: Vec<Repository>) -> Self {
        *self.repos.lock().await = repos;
        self
    }

    /// Configure direct collaborators.
    pub async fn with_collaborators(self, collaborators: Vec<Collaborator>) -> Self {
        *self.collaborators.lock().await = collaborators;
        self
    }

    /// Configure organization teams.
    pub async fn with_org_teams(self, teams: Vec<Team>) -> Self {
        *self.org_teams.lock().await = teams;
        self
    }

    /// Configure teams with access to the repository.
    pub async fn with_repo_teams(self, teams: Vec<Team>) -> Self {
        *self.repo_teams.lock().await = teams;
        self
    }

    /// Configure team members.
    pub async fn with_team_members(self, members: Vec<Account>) -> Self {
        *self.team_members.lock().await = members;
        self
    }

    /// Configure organization members.
    pub async fn with_org_members(self, members: Vec<Account>) -> Self {
        *self.org_members.lock().await = members;
        self
    }

    /// Split every listing into pages of `size` items.
    pub async fn with_page_size(self, size: usize) -> Self {
        *self.page_size.lock().await = Some(size.max(1));
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure an error for the next call of `method` only.
    pub async fn fail_on(self, method: &'static str, error: ApiError) -> Self {
        *self.fail_on.lock().await = Some((method, error));
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of calls made to `method` (one per page for listings).
    pub async fn call_count(&self, method: &str) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    /// Whether any mutating call was made.
    pub async fn mutated(&self) -> bool {
        const MUTATIONS: [&str; 8] = [
            "create_repo",
            "delete_repo",
            "add_collaborator",
            "remove_collaborator",
            "add_team_repo",
            "remove_team_repo",
            "add_team_membership",
            "remove_team_membership",
        ];
        self.captured_requests
            .lock()
            .await
            .iter()
            .any(|r| MUTATIONS.contains(&r.method))
    }

    /// Record the call, then return any pending error for it.
    async fn record(&self, method: &'static str, target: String, detail: Option<String>) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method,
            target,
            detail,
        });

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        let mut fail_on = self.fail_on.lock().await;
        if fail_on.as_ref().is_some_and(|(m, _)| *m == method) {
            if let Some((_, e)) = fail_on.take() {
                return Err(e.into());
            }
        }

        Ok(())
    }

    /// Slice `items` into the page addressed by `token`.
    async fn page_of<T>(&self, items: Vec<T>, token: Option<PageToken>) -> Page<T> {
        let size = self.page_size.lock().await.unwrap_or(usize::MAX);
        let index: usize = token
            .as_ref()
            .and_then(|t| t.as_url().strip_prefix(PAGE_TOKEN_PREFIX))
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        let start = index.saturating_mul(size);
        let has_more = start.saturating_add(size) < items.len();
        let items: Vec<T> = items.into_iter().skip(start).take(size).collect();
        if has_more {
            Page::new(items, Some(PageToken::new(format!("{}{}", PAGE_TOKEN_PREFIX, index + 1))))
        } else {
            Page::last(items)
        }
    }
}

fn page_detail(token: &Option<PageToken>) -> Option<String> {
    token.as_ref().map(|t| t.as_url().to_string())
}

// ============================================================================
// RepoApi Implementation
// ============================================================================

#[async_trait]
impl RepoApi for MockGitHubClient {
    async fn get_repo(&self, repo: &RepoId) -> Result<Repository> {
        self.record("get_repo", repo.to_string(), None).await?;

        self.repos
            .lock()
            .await
            .iter()
            .find(|r| r.full_name.eq_ignore_ascii_case(&repo.to_string()))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/repos/{}", repo)).into())
    }

    async fn create_repo(
        &self,
        org: Option<&str>,
        request: &CreateRepoRequest,
    ) -> Result<Repository> {
        let owner = org.unwrap_or("me").to_string();
        self.record("create_repo", owner.clone(), Some(request.name.clone()))
            .await?;

        Ok(Repository {
            id: 1,
            name: request.name.clone(),
            full_name: format!("{}/{}", owner, request.name),
            owner: Account {
                login: owner,
                ..Default::default()
            },
            private: request.private,
            fork: false,
            html_url: None,
            description: None,
        })
    }

    async fn delete_repo(&self, repo: &RepoId) -> Result<()> {
        self.record("delete_repo", repo.to_string(), None).await
    }

    async fn list_user_repos_page(&self, token: Option<PageToken>) -> Result<Page<Repository>> {
        self.record("list_user_repos", "user".to_string(), page_detail(&token))
            .await?;
        let repos = self.repos.lock().await.clone();
        Ok(self.page_of(repos, token).await)
    }
}

// ============================================================================
// CollaboratorApi Implementation
// ============================================================================

#[async_trait]
impl CollaboratorApi for MockGitHubClient {
    async fn list_collaborators_page(
        &self,
        repo: &RepoId,
        token: Option<PageToken>,
    ) -> Result<Page<Collaborator>> {
        self.record("list_collaborators", repo.to_string(), page_detail(&token))
            .await?;
        let collaborators = self.collaborators.lock().await.clone();
        Ok(self.page_of(collaborators, token).await)
    }

    async fn add_collaborator(&self, repo: &RepoId, login: &str, permission: &str) -> Result<()> {
        self.record(
            "add_collaborator",
            repo.to_string(),
            Some(format!("{}:{}", login, permission)),
        )
        .await
    }

    async fn remove_collaborator(&self, repo: &RepoId, login: &str) -> Result<()> {
        self.record("remove_collaborator", repo.to_string(), Some(login.to_string()))
            .await
    }
}

// ============================================================================
// TeamApi Implementation
// ============================================================================

#[async_trait]
impl TeamApi for MockGitHubClient {
    async fn list_org_teams_page(
        &self,
        org: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Team>> {
        self.record("list_org_teams", org.to_string(), page_detail(&token))
            .await?;
        let teams = self.org_teams.lock().await.clone();
        Ok(self.page_of(teams, token).await)
    }

    async fn list_repo_teams_page(
        &self,
        repo: &RepoId,
        token: Option<PageToken>,
    ) -> Result<Page<Team>> {
        self.record("list_repo_teams", repo.to_string(), page_detail(&token))
            .await?;
        let teams = self.repo_teams.lock().await.clone();
        Ok(self.page_of(teams, token).await)
    }

    async fn list_team_members_page(
        &self,
        org: &str,
        team_slug: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Account>> {
        self.record(
            "list_team_members",
            format!("{}/{}", org, team_slug),
            page_detail(&token),
        )
        .await?;
        let members = self.team_members.lock().await.clone();
        Ok(self.page_of(members, token).await)
    }

    async fn add_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        repo: &RepoId,
        permission: Option<&str>,
    ) -> Result<()> {
        let detail = match permission {
            Some(p) => format!("{}:{}", repo, p),
            None => repo.to_string(),
        };
        self.record("add_team_repo", format!("{}/{}", org, team_slug), Some(detail))
            .await
    }

    async fn remove_team_repo(&self, org: &str, team_slug: &str, repo: &RepoId) -> Result<()> {
        self.record(
            "remove_team_repo",
            format!("{}/{}", org, team_slug),
            Some(repo.to_string()),
        )
        .await
    }

    async fn add_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        login: &str,
        role: &str,
    ) -> Result<()> {
        self.record(
            "add_team_membership",
            format!("{}/{}", org, team_slug),
            Some(format!("{}:{}", login, role)),
        )
        .await
    }

    async fn remove_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        login: &str,
    ) -> Result<()> {
        self.record(
            "remove_team_membership",
            format!("{}/{}", org, team_slug),
            Some(login.to_string()),
        )
        .await
    }
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockGitHubClient {
    async fn get_user(&self, login: &str) -> Result<Option<Account>> {
        self.record("get_user", login.to_string(), None).await?;

        Ok(self
            .accounts
            .lock()
            .await
            .iter()
            .find(|a| a.login.eq_ignore_ascii_case(login))
            .cloned())
    }

    async fn list_org_members_page(
        &self,
        org: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Account>> {
        self.record("list_org_members", org.to_string(), page_detail(&token))
            .await?;
        let members = self.org_members.lock().await.clone();
        Ok(self.page_of(members, token).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn user(login: &str) -> Account {
        Account {
            login: login.to_string(),
            kind: "User".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockGitHubClient::new();

        assert!(mock.list_user_repos().await.unwrap().is_empty());
        assert!(mock.get_user("nobody").await.unwrap().is_none());
        assert!(!mock.mutated().await);
    }

    #[tokio::test]
    async fn test_mock_client_splits_pages() {
        let members: Vec<Account> = ["a", "b", "c", "d", "e"].into_iter().map(user).collect();
        let mock = MockGitHubClient::new()
            .with_org_members(members)
            .await
            .with_page_size(2)
            .await;

        let logins: Vec<String> = mock
            .list_org_members("acme")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.login)
            .collect();

        assert_eq!(logins, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(mock.call_count("list_org_members").await, 3);
    }

    #[tokio::test]
    async fn test_mock_client_error_consumed_once() {
        let mock = MockGitHubClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        let err = mock.get_user("octocat").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Unauthorized)));
        assert!(mock.get_user("octocat").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_fail_on_method() {
        let members: Vec<Account> = ["a", "b", "c"].into_iter().map(user).collect();
        let mock = MockGitHubClient::new()
            .with_team_members(members)
            .await
            .with_page_size(2)
            .await
            .fail_on("list_team_members", ApiError::Network("reset".to_string()))
            .await;

        assert!(mock.list_team_members("acme", "core").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_records_mutations() {
        let mock = MockGitHubClient::new();
        let repo = RepoId {
            owner: "acme".to_string(),
            name: "widgets".to_string(),
        };

        mock.add_collaborator(&repo, "octocat", "push").await.unwrap();

        let calls = mock.captured_requests().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "add_collaborator");
        assert_eq!(calls[0].target, "acme/widgets");
        assert_eq!(calls[0].detail.as_deref(), Some("octocat:push"));
        assert!(mock.mutated().await);
    }
}
