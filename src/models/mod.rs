//! Display models for CLI output
//!
//! This module converts API response types into rows for table and JSON
//! output.

pub mod display;

pub use display::{
    CollaboratorDisplay, MemberDisplay, RepoDisplay, RepoTeamDisplay, TeamDisplay, UserCard,
};
