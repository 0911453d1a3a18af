//! Team display models

use serde::Serialize;
use tabled::Tabled;

use super::team_label;
use crate::client::models::{Account, Team};

/// Team row for `teams list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamDisplay {
    #[tabled(rename = "Team")]
    pub team: String,

    #[tabled(rename = "Description")]
    pub description: String,

    #[tabled(rename = "Privacy")]
    pub privacy: String,

    #[tabled(rename = "Permission")]
    pub permission: String,
}

impl From<&Team> for TeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            team: team_label(&team.name, &team.slug),
            description: team.description.clone().unwrap_or_default(),
            privacy: team.privacy.clone().unwrap_or_default(),
            permission: team.permission.clone().unwrap_or_default(),
        }
    }
}

/// Member row for `teams members`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "Users")]
    pub user: String,
}

impl From<&Account> for MemberDisplay {
    fn from(account: &Account) -> Self {
        Self {
            user: format!("@{}", account.login),
        }
    }
}
