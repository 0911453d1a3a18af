//! Team management commands

use log::debug;

use crate::cli::access::MemberSpec;
use crate::cli::prompt::{self, Prompt};
use crate::cli::resolve::{is_member, require_team, require_user};
use crate::cli::{CommandContext, OutputFormat, Outcome};
use crate::client::{GitHubApi, TeamApi};
use crate::error::{Error, Result};
use crate::models::{MemberDisplay, TeamDisplay, UserCard};
use crate::output::status::{self, Spinner};
use crate::output::{self, Formattable};

// ============================================================================
// List Command
// ============================================================================

/// Run `octop teams list`
pub async fn list(ctx: &CommandContext, org: &str) -> Result<()> {
    let spinner = Spinner::start(format!("Fetching teams for {}...", org));
    let result = list_teams(&ctx.client, org, ctx.format).await;
    spinner.finish();

    println!("{}", result?);
    Ok(())
}

/// Render the teams of `org` sorted by name
pub async fn list_teams<C: TeamApi + ?Sized>(
    client: &C,
    org: &str,
    format: OutputFormat,
) -> Result<String> {
    let mut teams = client.list_org_teams(org).await?;
    if teams.is_empty() && format != OutputFormat::Json {
        return Ok("No teams found".to_string());
    }

    teams.sort_by_key(|t| t.name.to_lowercase());

    let rows: Vec<TeamDisplay> = teams.iter().map(TeamDisplay::from).collect();
    output::render_section(org, &rows, format)
}

// ============================================================================
// Members Command
// ============================================================================

/// Run `octop teams members`
pub async fn members(ctx: &CommandContext, org: &str, team: &str) -> Result<()> {
    let spinner = Spinner::start(format!("Fetching members of {}/{}...", org, team));
    let result = list_members(&ctx.client, org, team, ctx.format).await;
    spinner.finish();

    println!("{}", result?);
    Ok(())
}

/// Render the members of a team found by slug or name
pub async fn list_members<C: TeamApi + ?Sized>(
    client: &C,
    org: &str,
    team: &str,
    format: OutputFormat,
) -> Result<String> {
    let team = require_team(client, org, team).await?;
    let members = client.list_team_members(org, &team.slug).await?;

    let rows: Vec<MemberDisplay> = members.iter().map(MemberDisplay::from).collect();
    if format == OutputFormat::Json {
        return rows.format(format);
    }
    output::render_section(&format!("{}/{}", org, team.slug), &rows, format)
}

// ============================================================================
// Member Management Commands
// ============================================================================

/// Run `octop teams add`
pub async fn add(ctx: &CommandContext, user: &str, org: &str, team: &str) -> Result<Outcome> {
    let mut prompt = prompt::console();
    add_member(&ctx.client, &mut prompt, user, org, team, ctx.format).await
}

/// Add (or invite) a user to a team after showing who they are
pub async fn add_member<C: GitHubApi + ?Sized>(
    client: &C,
    prompt: &mut dyn Prompt,
    raw_user: &str,
    org: &str,
    team: &str,
    format: OutputFormat,
) -> Result<Outcome> {
    let spec: MemberSpec = raw_user.parse()?;

    let team = require_team(client, org, team).await?;
    let members = client.list_team_members(org, &team.slug).await?;
    let user = require_user(client, &spec.login).await?;

    eprintln!();
    eprintln!("Hey there! You're about to add a new user to a team.");
    eprintln!(
        "Mind checking out whether this is the @{} you're looking for?",
        user.login
    );
    eprintln!();
    eprintln!("{}", UserCard::from(&user));

    if !is_member(&members, &user.login) {
        status::warning(format!(
            "WARNING! Continuing will invite @{} to the {} organization!",
            user.login, org
        ));
        eprintln!();
    }

    if !prompt.confirm(&format!("Continue adding @{}? [y]/n", user.login), true)? {
        return Ok(Outcome::Aborted);
    }

    debug!("Adding {} to {}/{} as {}", user.login, org, team.slug, spec.role);
    client
        .add_team_membership(org, &team.slug, &user.login, spec.role.as_str())
        .await?;

    output::report_change(
        format,
        serde_json::json!({
            "team": format!("{}/{}", org, team.slug),
            "user": user.login,
            "role": spec.role.as_str(),
        }),
        format!("Added @{} to {}/{}", user.login, org, team.slug),
    )?;
    Ok(Outcome::Done)
}

/// Run `octop teams rm`
pub async fn rm(ctx: &CommandContext, user: &str, org: &str, team: &str) -> Result<Outcome> {
    let mut prompt = prompt::console();
    remove_member(&ctx.client, &mut prompt, user, org, team, ctx.format).await
}

/// Remove a member from a team
pub async fn remove_member<C: GitHubApi + ?Sized>(
    client: &C,
    prompt: &mut dyn Prompt,
    login: &str,
    org: &str,
    team: &str,
    format: OutputFormat,
) -> Result<Outcome> {
    let team = require_team(client, org, team).await?;
    let members = client.list_team_members(org, &team.slug).await?;
    let user = require_user(client, login).await?;

    if !is_member(&members, &user.login) {
        return Err(Error::NotFound(format!(
            "@{} does not belong to {}/{}",
            user.login, org, team.slug
        )));
    }

    eprintln!();
    eprintln!("Hey there! You're about to remove a user from a team.");
    let question = format!(
        "Continue removing @{} from {}/{}? y/[n]",
        user.login, org, team.slug
    );
    if !prompt.confirm(&question, false)? {
        return Ok(Outcome::Aborted);
    }

    client
        .remove_team_membership(org, &team.slug, &user.login)
        .await?;

    output::report_change(
        format,
        serde_json::json!({
            "team": format!("{}/{}", org, team.slug),
            "user": user.login,
            "removed": true,
        }),
        format!("Removed @{} from {}/{}", user.login, org, team.slug),
    )?;
    Ok(Outcome::Done)
}
