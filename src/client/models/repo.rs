//! Repository models

use serde::{Deserialize, Serialize};

use super::Account;

/// Repository resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID
    pub id: u64,

    /// Repository name
    pub name: String,

    /// `owner/name`
    pub full_name: String,

    /// Owning user or organization
    pub owner: Account,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    /// Whether the repository is a fork
    #[serde(default)]
    pub fork: bool,

    /// Web URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Access flags of a collaborator or team on a repository
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

/// Body of `POST /user/repos` and `POST /orgs/{org}/repos`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRepoRequest {
    pub name: String,
    pub private: bool,
    pub auto_init: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
}
