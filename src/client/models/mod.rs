//! GitHub API data models
//!
//! Only the fields octop reads or sends are modelled; everything else in
//! the API payloads is ignored during deserialization.

mod repo;
mod team;
mod user;

pub use repo::{CreateRepoRequest, Permissions, Repository};
pub use team::{Team, TeamMembershipRequest, TeamRepoPermissionRequest};
pub use user::{Account, Collaborator, CollaboratorRequest};

#[cfg(test)]
pub use user::ACCOUNT_TYPE_ORGANIZATION;
