//! Repository identifiers and naming policy
//!
//! Parsing and resolution of `owner/name` references, plus normalization of
//! proposed repository names into slugs the platform accepts.

mod ident;
mod name;

pub use ident::{RepoId, RepoRefError, resolve};
pub use name::normalize_name;
