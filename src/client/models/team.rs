//! Organization team models

use serde::{Deserialize, Serialize};

/// Organization team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// Team name
    pub name: String,

    /// URL-friendly team handle
    pub slug: String,

    /// Team description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `closed` or `secret`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    /// Default permission, or the team's permission on a repository when
    /// listed from `/repos/{owner}/{repo}/teams`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

impl Team {
    /// Whether `identifier` names this team by slug or name (case-insensitive)
    pub fn matches(&self, identifier: &str) -> bool {
        self.slug.eq_ignore_ascii_case(identifier) || self.name.eq_ignore_ascii_case(identifier)
    }
}

/// Body of `PUT /orgs/{org}/teams/{slug}/repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamRepoPermissionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

/// Body of `PUT /orgs/{org}/teams/{slug}/memberships/{username}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamMembershipRequest {
    pub role: String,
}
