//! Collaborator commands: `collab add`, `collab rm` and `collab list`
//!
//! A collaborator target is either a team of the owning organization or a
//! user. Targets are resolved once into a [`CollabTarget`] and each command
//! matches on it to pick the endpoint.

use log::debug;

use crate::cli::access::{CollabSpec, Permission};
use crate::cli::open::repo_url;
use crate::cli::prompt::{self, Prompt};
use crate::cli::resolve::{CollabTarget, collab_target, is_member, is_org};
use crate::cli::{CommandContext, OutputFormat, Outcome, Settings};
use crate::client::models::{Account, Collaborator, Team};
use crate::client::{GitHubApi, UserApi};
use crate::error::{Error, Result};
use crate::models::{CollaboratorDisplay, RepoTeamDisplay, UserCard};
use crate::output::status::{self, Spinner};
use crate::output::{self, Formattable};
use crate::repo::{RepoId, resolve};

// ============================================================================
// Add Command
// ============================================================================

/// Run `octop collab add`
pub async fn add(ctx: &CommandContext, repo: &str, target: &str) -> Result<Outcome> {
    let mut prompt = prompt::console();
    add_access(&ctx.client, &mut prompt, ctx.settings(), repo, target).await
}

/// Grant a team or user access to a repository
pub async fn add_access<C: GitHubApi + ?Sized>(
    client: &C,
    prompt: &mut dyn Prompt,
    settings: Settings<'_>,
    raw_repo: &str,
    raw_target: &str,
) -> Result<Outcome> {
    let spec: CollabSpec = raw_target.parse()?;
    let id = resolve(raw_repo, settings.username)?;

    let owner_is_org = is_org(client, &id.owner).await?;
    if !owner_is_org && spec.permission.is_some() {
        return Err(Error::Validation(
            "cannot set permission level on a non-org repository collaborator".to_string(),
        ));
    }

    let url = repo_url(settings.web_host, &id);
    match collab_target(client, &id.owner, owner_is_org, &spec.target).await? {
        CollabTarget::Team(team) => {
            let permission = spec.permission.map(|p| p.as_str());
            debug!("Granting team {} {:?} on {}", team.slug, permission, id);
            client
                .add_team_repo(&id.owner, &team.slug, &id, permission)
                .await?;

            output::report_change(
                settings.format,
                serde_json::json!({
                    "repository": id.to_string(),
                    "team": team.slug,
                    "permission": permission,
                }),
                format!("Added {}/{} to {}", id.owner, team.slug, url),
            )?;
        }
        CollabTarget::User(user) => {
            if owner_is_org && !confirm_outside_user(client, prompt, &id.owner, &user).await? {
                return Ok(Outcome::Aborted);
            }

            let permission = spec.permission.unwrap_or_else(|| {
                status::info(format!(
                    "Defaulting user permission level to '{}'",
                    Permission::DEFAULT_FOR_USERS
                ));
                Permission::DEFAULT_FOR_USERS
            });

            client
                .add_collaborator(&id, &user.login, permission.as_str())
                .await?;

            output::report_change(
                settings.format,
                serde_json::json!({
                    "repository": id.to_string(),
                    "user": user.login,
                    "permission": permission.as_str(),
                }),
                format!("Added {} to {}", user.login, url),
            )?;
        }
    }

    Ok(Outcome::Done)
}

/// Check before adding a user to an organization repository.
///
/// Members of the organization only get a warning. Anyone else is shown
/// their profile and must be confirmed (default no).
async fn confirm_outside_user<C: UserApi + ?Sized>(
    client: &C,
    prompt: &mut dyn Prompt,
    org: &str,
    user: &Account,
) -> Result<bool> {
    let members = client.list_org_members(org).await?;
    if is_member(&members, &user.login) {
        status::warning("Adding org user as an outside collaborator!");
        return Ok(true);
    }

    eprintln!("Hey there! You're about to add an outside user to an org repository.");
    eprintln!(
        "Mind checking out whether this is the @{} you're looking for?",
        user.login
    );
    eprintln!();
    eprintln!("{}", UserCard::from(user));

    prompt.confirm(&format!("Continue adding @{}? y/[n]", user.login), false)
}

// ============================================================================
// Rm Command
// ============================================================================

/// Run `octop collab rm`
pub async fn rm(ctx: &CommandContext, repo: &str, target: &str) -> Result<Outcome> {
    remove_access(&ctx.client, ctx.settings(), repo, target).await
}

/// Revoke a team's or user's access to a repository
pub async fn remove_access<C: GitHubApi + ?Sized>(
    client: &C,
    settings: Settings<'_>,
    raw_repo: &str,
    raw_target: &str,
) -> Result<Outcome> {
    let target = raw_target.to_lowercase();
    let id = resolve(raw_repo, settings.username)?;

    let owner_is_org = is_org(client, &id.owner).await?;
    let url = repo_url(settings.web_host, &id);

    match collab_target(client, &id.owner, owner_is_org, &target).await? {
        CollabTarget::Team(team) => {
            client.remove_team_repo(&id.owner, &team.slug, &id).await?;
            output::report_change(
                settings.format,
                serde_json::json!({ "repository": id.to_string(), "team": team.slug, "removed": true }),
                format!("Removed {}/{} from {}", id.owner, team.slug, url),
            )?;
        }
        CollabTarget::User(user) => {
            client.remove_collaborator(&id, &user.login).await?;
            output::report_change(
                settings.format,
                serde_json::json!({ "repository": id.to_string(), "user": user.login, "removed": true }),
                format!("Removed {} from {}", user.login, url),
            )?;
        }
    }

    Ok(Outcome::Done)
}

// ============================================================================
// List Command
// ============================================================================

/// Who has access to a repository
#[derive(Debug)]
pub enum AccessListing {
    /// Teams with access (organization repositories that define any)
    Teams(Vec<Team>),
    /// Direct collaborators
    Collaborators(Vec<Collaborator>),
}

/// Fetch the teams of an organization repository, falling back to its
/// collaborators when it has none
pub async fn fetch_access<C: GitHubApi + ?Sized>(client: &C, id: &RepoId) -> Result<AccessListing> {
    if is_org(client, &id.owner).await? {
        let teams = client.list_repo_teams(id).await?;
        if !teams.is_empty() {
            return Ok(AccessListing::Teams(teams));
        }
        status::warning(format!(
            "No teams defined for {}. Falling back to collaborators list...",
            id
        ));
    }

    Ok(AccessListing::Collaborators(
        client.list_collaborators(id).await?,
    ))
}

/// Run `octop collab list`
pub async fn list(ctx: &CommandContext, repo: &str) -> Result<()> {
    let settings = ctx.settings();
    let id = resolve(repo, settings.username)?;

    let spinner = Spinner::start(format!("Fetching access for {}...", id));
    let result = list_access(&ctx.client, settings, &id).await;
    spinner.finish();

    println!("{}", result?);
    Ok(())
}

/// Render who has access to a repository, titled with its web URL
pub async fn list_access<C: GitHubApi + ?Sized>(
    client: &C,
    settings: Settings<'_>,
    id: &RepoId,
) -> Result<String> {
    let listing = fetch_access(client, id).await?;
    render_access(&listing, &repo_url(settings.web_host, id), settings.format)
}

fn render_access(listing: &AccessListing, title: &str, format: OutputFormat) -> Result<String> {
    match listing {
        AccessListing::Teams(teams) => {
            let rows: Vec<RepoTeamDisplay> = teams.iter().map(RepoTeamDisplay::from).collect();
            output::render_section(title, &rows, format)
        }
        AccessListing::Collaborators(collaborators) => {
            if collaborators.is_empty() && format != OutputFormat::Json {
                return Ok("No collaborators".to_string());
            }
            let rows: Vec<CollaboratorDisplay> =
                collaborators.iter().map(CollaboratorDisplay::from).collect();
            if format == OutputFormat::Json {
                return rows.format(format);
            }
            output::render_section(title, &rows, format)
        }
    }
}
