//! Account and team lookups shared by the collaborator and team commands

use std::collections::HashMap;

use log::debug;

use crate::client::models::{Account, Team};
use crate::client::{TeamApi, UserApi};
use crate::error::{Error, Result};
use crate::output::status;

/// Who a collaborator command acts on
#[derive(Debug, Clone)]
pub enum CollabTarget {
    /// An organization team (organization-owned repositories only)
    Team(Team),
    /// A user account
    User(Account),
}

/// Whether `login` is an organization. Unknown accounts are not.
pub async fn is_org<C: UserApi + ?Sized>(client: &C, login: &str) -> Result<bool> {
    let is_org = client
        .get_user(login)
        .await?
        .is_some_and(|account| account.is_organization());
    debug!("{} is organization: {}", login, is_org);
    Ok(is_org)
}

/// Organization lookups memoized per owner for the lifetime of one command
#[derive(Debug, Default)]
pub struct OrgCache {
    known: HashMap<String, bool>,
}

impl OrgCache {
    pub async fn is_org<C: UserApi + ?Sized>(&mut self, client: &C, login: &str) -> Result<bool> {
        let key = login.to_lowercase();
        if let Some(&known) = self.known.get(&key) {
            return Ok(known);
        }

        let result = is_org(client, login).await?;
        self.known.insert(key, result);
        Ok(result)
    }
}

/// Find a team of `org` by slug or name (case-insensitive)
pub async fn find_team<C: TeamApi + ?Sized>(
    client: &C,
    org: &str,
    identifier: &str,
) -> Result<Option<Team>> {
    let teams = client.list_org_teams(org).await?;
    Ok(teams.into_iter().find(|t| t.matches(identifier)))
}

/// Like [`find_team`], failing with `NotFound` when there is no such team
pub async fn require_team<C: TeamApi + ?Sized>(
    client: &C,
    org: &str,
    identifier: &str,
) -> Result<Team> {
    find_team(client, org, identifier)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No team found under {}/{}", org, identifier)))
}

/// Fetch a user, failing with `NotFound` when the handle is unknown
pub async fn require_user<C: UserApi + ?Sized>(client: &C, login: &str) -> Result<Account> {
    client
        .get_user(login)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No user found with handle @{}. Aborting.", login)))
}

/// Resolve a collaborator target.
///
/// On organization-owned repositories `identifier` is tried as a team first,
/// then as a user.
pub async fn collab_target<C: TeamApi + UserApi + ?Sized>(
    client: &C,
    owner: &str,
    owner_is_org: bool,
    identifier: &str,
) -> Result<CollabTarget> {
    if owner_is_org {
        if let Some(team) = find_team(client, owner, identifier).await? {
            return Ok(CollabTarget::Team(team));
        }
        status::warning(format!(
            "No team found under {}/{}. Looking for users...",
            owner, identifier
        ));
    }

    Ok(CollabTarget::User(require_user(client, identifier).await?))
}

/// Whether `login` appears in `members` (case-insensitive)
pub fn is_member(members: &[Account], login: &str) -> bool {
    members.iter().any(|m| m.login.eq_ignore_ascii_case(login))
}
