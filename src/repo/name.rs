//! Repository name normalization

use std::sync::LazyLock;

use regex::Regex;

/// Runs of characters GitHub does not accept in repository names
static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]+").expect("valid regex"));

/// One or more trailing `.git` suffixes
static GIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\.git)+$").expect("valid regex"));

/// Normalize a proposed repository name.
///
/// Each run of disallowed characters collapses into a single `-`, then every
/// trailing `.git` is stripped. Returns the new name and whether it differs
/// from the input.
pub fn normalize_name(name: &str) -> (String, bool) {
    let dashed = DISALLOWED_RUN.replace_all(name, "-");
    let normalized = GIT_SUFFIX.replace(&dashed, "").into_owned();
    let changed = normalized != name;
    (normalized, changed)
}
