//! Access levels typed on the command line
//!
//! `collab add` takes `TARGET[:PERMISSION]` and `teams add` takes
//! `USER[:ROLE]`. Both are parsed and validated here before any API call.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Repository permission granted to a collaborator or team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Pull,
    Push,
    Admin,
}

impl Permission {
    /// Permission given to users when none is requested
    pub const DEFAULT_FOR_USERS: Permission = Permission::Push;

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Push => "push",
            Permission::Admin => "admin",
        }
    }
}

impl FromStr for Permission {
    type Err = Error;

    /// Accepts `pull`, `push`, `admin` and the aliases `read` and `write`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pull" | "read" => Ok(Permission::Pull),
            "push" | "write" => Ok(Permission::Push),
            "admin" => Ok(Permission::Admin),
            other => Err(Error::Validation(format!(
                "incorrect role {}: valid roles are pull/read, push/write and admin",
                other
            ))),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a user within a team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamRole {
    #[default]
    Member,
    Maintainer,
}

impl TeamRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Member => "member",
            TeamRole::Maintainer => "maintainer",
        }
    }
}

impl FromStr for TeamRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(TeamRole::Member),
            "maintainer" => Ok(TeamRole::Maintainer),
            _ => Err(Error::Validation(
                "when defining a role, please specify either 'maintainer' or 'member'"
                    .to_string(),
            )),
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `collab add` target: lower-cased team slug or username plus an
/// optional permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollabSpec {
    pub target: String,
    pub permission: Option<Permission>,
}

impl FromStr for CollabSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match lowered.split_once(':') {
            Some((target, permission)) => Ok(Self {
                target: target.to_string(),
                permission: Some(permission.parse()?),
            }),
            None => Ok(Self {
                target: lowered,
                permission: None,
            }),
        }
    }
}

/// A `teams add` argument: username plus role (default `member`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    pub login: String,
    pub role: TeamRole,
}

impl FromStr for MemberSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((login, role)) => Ok(Self {
                login: login.to_string(),
                role: role.parse()?,
            }),
            None => Ok(Self {
                login: s.to_string(),
                role: TeamRole::default(),
            }),
        }
    }
}
