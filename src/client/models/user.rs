//! User and collaborator models

use serde::{Deserialize, Serialize};

use super::Permissions;

/// `type` value GitHub reports for organization accounts
pub const ACCOUNT_TYPE_ORGANIZATION: &str = "Organization";

/// A user or organization account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    /// Account handle
    pub login: String,

    /// `User` or `Organization`
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Public email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Company field from the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Blog/website field from the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
}

impl Account {
    /// Whether this account is an organization
    pub fn is_organization(&self) -> bool {
        self.kind == ACCOUNT_TYPE_ORGANIZATION
    }
}

/// A repository collaborator with its effective permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    /// Account handle
    pub login: String,

    /// Effective permissions on the repository
    #[serde(default)]
    pub permissions: Permissions,
}

/// Body of `PUT /repos/{owner}/{repo}/collaborators/{username}`
#[derive(Debug, Clone, Serialize)]
pub struct CollaboratorRequest {
    pub permission: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_kind() {
        let org: Account =
            serde_json::from_str(r#"{"login": "rust-lang", "type": "Organization"}"#).unwrap();
        assert!(org.is_organization());

        let user: Account = serde_json::from_str(
            r#"{"login": "octocat", "type": "User", "name": "The Octocat", "blog": ""}"#,
        )
        .unwrap();
        assert!(!user.is_organization());
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
    }

    #[test]
    fn test_collaborator_permissions_default() {
        let c: Collaborator = serde_json::from_str(r#"{"login": "octocat"}"#).unwrap();
        assert!(!c.permissions.admin && !c.permissions.push && !c.permissions.pull);
    }
}
