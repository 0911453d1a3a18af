//! Collaborator display models

use serde::Serialize;
use tabled::Tabled;

use super::{team_label, yes_no};
use crate::client::models::{Collaborator, Team};

/// Direct collaborator row for `collab list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CollaboratorDisplay {
    #[tabled(rename = "User")]
    pub user: String,

    #[tabled(rename = "Push?")]
    #[serde(skip)]
    pub push_column: String,

    #[tabled(rename = "Pull?")]
    #[serde(skip)]
    pub pull_column: String,

    #[tabled(rename = "Admin?")]
    #[serde(skip)]
    pub admin_column: String,

    #[tabled(skip)]
    pub push: bool,

    #[tabled(skip)]
    pub pull: bool,

    #[tabled(skip)]
    pub admin: bool,
}

impl From<&Collaborator> for CollaboratorDisplay {
    fn from(collab: &Collaborator) -> Self {
        let p = collab.permissions;
        Self {
            user: format!("@{}", collab.login),
            push_column: yes_no(p.push),
            pull_column: yes_no(p.pull),
            admin_column: yes_no(p.admin),
            push: p.push,
            pull: p.pull,
            admin: p.admin,
        }
    }
}

/// Team-with-access row for `collab list` on organization repositories.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoTeamDisplay {
    #[tabled(rename = "Team")]
    pub team: String,

    #[tabled(rename = "Permission")]
    pub permission: String,
}

impl From<&Team> for RepoTeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            team: team_label(&team.name, &team.slug),
            permission: team.permission.clone().unwrap_or_default(),
        }
    }
}
