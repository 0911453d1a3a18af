//! Team API trait
//!
//! Covers organization team listings, team access to repositories and
//! team membership.

use async_trait::async_trait;

use crate::client::models::{Account, Team};
use crate::client::pagination::{Page, PageToken, collect_all};
use crate::error::Result;
use crate::repo::RepoId;

/// Team operations for the GitHub API
#[async_trait]
pub trait TeamApi: Send + Sync {
    // ========================================================================
    // Listings
    // ========================================================================

    /// One page of an organization's teams
    async fn list_org_teams_page(&self, org: &str, token: Option<PageToken>)
    -> Result<Page<Team>>;

    /// Every team in an organization
    async fn list_org_teams(&self, org: &str) -> Result<Vec<Team>> {
        collect_all(|token| self.list_org_teams_page(org, token)).await
    }

    /// One page of the teams with access to a repository
    async fn list_repo_teams_page(
        &self,
        repo: &RepoId,
        token: Option<PageToken>,
    ) -> Result<Page<Team>>;

    /// Every team with access to a repository
    async fn list_repo_teams(&self, repo: &RepoId) -> Result<Vec<Team>> {
        collect_all(|token| self.list_repo_teams_page(repo, token)).await
    }

    /// One page of a team's members
    async fn list_team_members_page(
        &self,
        org: &str,
        team_slug: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Account>>;

    /// Every member of a team
    async fn list_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<Account>> {
        collect_all(|token| self.list_team_members_page(org, team_slug, token)).await
    }

    // ========================================================================
    // Repository access
    // ========================================================================

    /// Grant a team access to a repository
    async fn add_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        repo: &RepoId,
        permission: Option<&str>,
    ) -> Result<()>;

    /// Revoke a team's access to a repository
    async fn remove_team_repo(&self, org: &str, team_slug: &str, repo: &RepoId) -> Result<()>;

    // ========================================================================
    // Membership
    // ========================================================================

    /// Add or invite a user to a team with `member` or `maintainer` role
    async fn add_team_membership(
        &self,
        org: &str,
        team_slug: &str,
        login: &str,
        role: &str,
    ) -> Result<()>;

    /// Remove a user from a team
    async fn remove_team_membership(&self, org: &str, team_slug: &str, login: &str)
    -> Result<()>;
}
