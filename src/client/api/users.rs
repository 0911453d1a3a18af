//! User API trait

use async_trait::async_trait;

use crate::client::models::Account;
use crate::client::pagination::{Page, PageToken, collect_all};
use crate::error::Result;

/// Account lookup operations for the GitHub API
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Look up a user or organization by login.
    ///
    /// Returns `Ok(None)` when the account does not exist.
    async fn get_user(&self, login: &str) -> Result<Option<Account>>;

    /// One page of an organization's members
    async fn list_org_members_page(
        &self,
        org: &str,
        token: Option<PageToken>,
    ) -> Result<Page<Account>>;

    /// Every member of an organization
    async fn list_org_members(&self, org: &str) -> Result<Vec<Account>> {
        collect_all(|token| self.list_org_members_page(org, token)).await
    }
}
