//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization. Marker columns
//! (`⎇`, `Yes`/`No`) are table-only; JSON carries the underlying booleans.

mod collab;
mod repo;
mod team;
mod user;

pub use collab::{CollaboratorDisplay, RepoTeamDisplay};
pub use repo::RepoDisplay;
pub use team::{MemberDisplay, TeamDisplay};
pub use user::UserCard;

/// `Yes`/`No` column value
pub(crate) fn yes_no(flag: bool) -> String {
    let value = if flag { "Yes" } else { "No" };
    value.to_string()
}

/// Team column value: `Name (@slug)`
pub(crate) fn team_label(name: &str, slug: &str) -> String {
    format!("{} (@{})", name, slug)
}
