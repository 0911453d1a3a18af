//! Repository reference parsing and owner resolution

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while resolving a repository reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoRefError {
    #[error(
        "To use short-format repository names, please define your GitHub username using\nthe GITHUB_USERNAME environment variable."
    )]
    MissingOwner,
}

/// A repository reference as typed by the user.
///
/// The owner is `None` until [`RepoRef::resolve`] fills it in from the
/// ambient identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: Option<String>,
    name: String,
}

impl RepoRef {
    /// Parse `owner/name` or a bare `name`.
    ///
    /// Only the first `/` separates owner from name; the remainder is kept
    /// verbatim, even when empty or containing further slashes.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('/') {
            Some((owner, name)) => Self {
                owner: Some(owner.to_string()),
                name: name.to_string(),
            },
            None => Self {
                owner: None,
                name: raw.to_string(),
            },
        }
    }

    /// Fill a missing owner from `ambient_owner`.
    ///
    /// An empty owner segment (`"/name"`) counts as missing, as does an empty
    /// ambient owner, so a resolved owner is never empty.
    pub fn resolve(self, ambient_owner: Option<&str>) -> Result<RepoId, RepoRefError> {
        let owner = match self.owner.filter(|o| !o.is_empty()) {
            Some(owner) => owner,
            None => ambient_owner
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .ok_or(RepoRefError::MissingOwner)?,
        };

        Ok(RepoId {
            owner,
            name: self.name,
        })
    }
}

impl FromStr for RepoRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A fully resolved repository identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Same owner, different name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            owner: self.owner.clone(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse and resolve in one step.
pub fn resolve(raw: &str, ambient_owner: Option<&str>) -> Result<RepoId, RepoRefError> {
    RepoRef::parse(raw).resolve(ambient_owner)
}
