//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::api::{CollaboratorApi, RepoApi, TeamApi, UserApi};
use super::models::{
    Account, Collaborator, CollaboratorRequest, CreateRepoRequest, Repository, Team,
    TeamMembershipRequest, TeamRepoPermissionRequest,
};
use super::pagination::{PER_PAGE, Page, PageToken, next_page_from_link};
use crate::error::{ApiError, FieldError, Result};
use crate::repo::RepoId;

/// Media type for the GitHub REST API
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned by this client
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by GitHub for failed requests
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

/// GitHub reports sub-errors either as objects or as bare strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorEntry {
    Field(FieldError),
    Text(String),
}

impl From<ErrorEntry> for FieldError {
    fn from(entry: ErrorEntry) -> Self {
        match entry {
            ErrorEntry::Field(field) => field,
            ErrorEntry::Text(message) => FieldError {
                message: Some(message),
                ..Default::default()
            },
        }
    }
}

/// GitHub API client
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new client for `base_url` authenticating with `token`
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("octop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    /// Send a request and turn any non-success status into an [`ApiError`]
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("-> {}", status);

        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await.into())
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .execute(self.request(Method::GET, &self.url(path)))
            .await?;
        parse_json(response).await
    }

    /// Fetch one page of a listing.
    ///
    /// The first page is requested from `path`; later pages follow the
    /// token URL verbatim.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<PageToken>,
    ) -> Result<Page<T>> {
        let request = match token {
            Some(token) => self.request(Method::GET, token.as_url()),
            None => self
                .request(Method::GET, &self.url(path))
                .query(&[("per_page", PER_PAGE)]),
        };

        let response = self.execute(request).await?;
        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_from_link);
        let page = Page::new(parse_json(response).await?, next);

        debug!("Page returned {} items (more: {})", page.items.len(), page.has_next_page());
        Ok(page)
    }

    async fn post_json<B: Serialize + ?Sized + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.request(Method::POST, &self.url(path)).json(body))
            .await?;
        parse_json(response).await
    }

    async fn put_json<B: Serialize + ?Sized + Sync>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.request(Method::PUT, &self.url(path)).json(body))
            .await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, &self.url(path)))
            .await?;
        Ok(())
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let data = response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    Ok(data)
}

/// Map a failed response to a structured API error
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let url = response.url().path().to_string();
    let text = response.text().await.unwrap_or_default();
    let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
    let message = body
        .message
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound(url),
        StatusCode::FORBIDDEN if body.errors.is_empty() => ApiError::Forbidden(message),
        _ => ApiError::Response {
            status: status.as_u16(),
            message,
            errors: body.errors.into_iter().map(FieldError::from).collect(),
        },
    }
}

#[async_trait]
impl RepoApi for GitHubClient {
    async fn get_repo(&self, repo: &RepoId) -> Result<Repository> {
        self.get_json(&format!("/repos/{}/{}", repo.owner, repo.name))
            .await
    }

    async fn create_repo(
        &self,
        org: Option<&str>,
        request: &CreateRepoRequest,
    ) -> Result<Repository> {
        let path = match org {
            Some(org) => format!("/orgs/{}/repos", org),
            None => "/user/repos".to_string(),
        };
        self.post_json(&path, request).await
    }

    async fn delete_repo(&self, repo: &RepoId) -> Result<()> {
        self.delete(&format!("/repos/{}/{}", repo.owner, repo.name))
            .await
    }

    async fn list_user_repos_page(&self, token: Option<PageToken>) -> Result<Page<Repository>> {
        self.get_page("/user/repos", token).await
    }
}

#[async_trait]
impl CollaboratorApi for GitHubClient {
    async fn list_collaborators_page(
        &self,
        repo: &RepoId,
        token: Option<PageToken>,
    ) -> Result<Page<Collaborator>> {
        let path = format!("/repos/{}/{}/collaborators", repo.owner, repo.name);
        self.get_page(&path, token).await
    }

    async fn add_collaborator(&self, repo: &RepoId, login: &str, permission: &str) -> Result<()> {
        let path = format!(
            "/repos/{}/{}/collaborators/{}",
            repo.owner, repo.name, login
        );
        let body = CollaboratorRequest {
            permission: permission.to_string(),
        };
        self.put_json(&path, &body).await
    }

    async fn remove_collaborator(&self, repo: &RepoId, login: &str) -> Result<()> {
        self.delete(&format!(
            "/repos/{}/{}/collaborators/{}",
            repo.owner, repo.name, login
        ))
        .await
    }
}

#[async_trait]
impl TeamApi for GitHubClient {
    async fn list_org_teams_page(
        &self,
        org: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Team>> {
        self.get_page(&format!("/orgs/{}/teams", org), token).await
    }

    async fn list_repo_teams_page(
        &self,
        repo: &RepoId,
        token: Option<PageToken>,
    ) -> Result<Page<Team>> {
        let path = format!("/repos/{}/{}/teams", repo.owner, repo.name);
        self.get_page(&path, token).await
    }

    async fn list_team_members_page(
        &self,
        org: &str,
        team_slug: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Account>> {
        let path = format!("/orgs/{}/teams/{}/members", org, team_slug);
        self.get_page(&path, token).await
    }

    async fn add_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        repo: &RepoId,
        permission: Option<&str>,
    ) -> Result<()> {
        let path = format!(
            "/orgs/{}/teams/{}/repos/{}/{}",
            org, team_slug, repo.owner, repo.name
        );
        let body = TeamRepoPermissionRequest {
            permission: permission.map(str::to_string),
        };
        self.put_json(&path, &body).await
    }

    async fn remove_team_repo(&self, org: &str, team_slug: &str, repo: &RepoId) -> Result<()> {
        self.delete(&format!(
            "/orgs/{}/teams/{}/repos/{}/{}",
            org, team_slug, repo.owner, repo.name
        ))
        .await
    }

    async fn add_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        login: &str,
        role: &str,
    ) -> Result<()> {
        let path = format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, login);
        let body = TeamMembershipRequest {
            role: role.to_string(),
        };
        self.put_json(&path, &body).await
    }

    async fn remove_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        login: &str,
    ) -> Result<()> {
        self.delete(&format!(
            "/orgs/{}/teams/{}/memberships/{}",
            org, team_slug, login
        ))
        .await
    }
}

#[async_trait]
impl UserApi for GitHubClient {
    async fn get_user(&self, login: &str) -> Result<Option<Account>> {
        match self.get_json(&format!("/users/{}", login)).await {
            Ok(account) => Ok(Some(account)),
            Err(crate::error::Error::Api(ApiError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_org_members_page(
        &self,
        org: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Account>> {
        self.get_page(&format!("/orgs/{}/members", org), token)
            .await
    }
}
