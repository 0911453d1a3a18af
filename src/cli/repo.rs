//! Repository commands: `new`, `rm` and `list`

use std::collections::BTreeMap;

use log::debug;

use crate::cli::prompt::{self, Prompt};
use crate::cli::resolve::OrgCache;
use crate::cli::{CommandContext, NewArgs, OutputFormat, Outcome, Settings};
use crate::client::models::{CreateRepoRequest, Repository};
use crate::client::{GitHubApi, RepoApi};
use crate::error::{Error, Result};
use crate::models::RepoDisplay;
use crate::output::status::{self, Spinner};
use crate::output::{self, Formattable, table};
use crate::repo::{RepoId, normalize_name, resolve};

// ============================================================================
// New Command
// ============================================================================

/// Run `octop new`
pub async fn new(ctx: &CommandContext, args: &NewArgs) -> Result<Outcome> {
    let mut prompt = prompt::console();
    create_repos(&ctx.client, &mut prompt, ctx.settings(), args).await
}

/// Resolve every name, confirming normalized ones, before creating anything.
///
/// Returns `None` when the user rejects a normalized name.
pub fn plan_repos(
    names: &[String],
    ambient_owner: Option<&str>,
    prompt: &mut dyn Prompt,
) -> Result<Option<Vec<RepoId>>> {
    let mut planned = Vec::with_capacity(names.len());

    for raw in names {
        let id = resolve(raw, ambient_owner)?;
        let (normalized, changed) = normalize_name(&id.name);
        if normalized.is_empty() {
            return Err(Error::Validation(format!(
                "'{}' is not a valid repository name",
                raw
            )));
        }

        if changed {
            eprintln!("Your repository will be created as {}/{}", id.owner, normalized);
            if !prompt.confirm("Seems okay? [y]/n", true)? {
                return Ok(None);
            }
        }
        planned.push(id.with_name(normalized));
    }

    Ok(Some(planned))
}

/// Create the repositories named in `args`
pub async fn create_repos<C: GitHubApi + ?Sized>(
    client: &C,
    prompt: &mut dyn Prompt,
    settings: Settings<'_>,
    args: &NewArgs,
) -> Result<Outcome> {
    let Some(planned) = plan_repos(&args.names, settings.username, prompt)? else {
        return Ok(Outcome::Aborted);
    };

    let mut orgs = OrgCache::default();
    let mut created = Vec::with_capacity(planned.len());

    for id in &planned {
        let org = if args.org || orgs.is_org(client, &id.owner).await? {
            Some(id.owner.as_str())
        } else {
            None
        };

        let request = CreateRepoRequest {
            name: id.name.clone(),
            private: args.private,
            auto_init: args.init,
            license_template: args.license.clone(),
            gitignore_template: args.gitignore.clone(),
        };

        debug!("Creating {} (organization: {})", id, org.is_some());
        let repo = client.create_repo(org, &request).await?;
        status::success(format!("Created: {}", repo.full_name));
        created.push(repo);
    }

    if settings.format == OutputFormat::Json {
        let rows: Vec<RepoDisplay> = created
            .iter()
            .map(|r| RepoDisplay::new(r, settings.web_host).qualified())
            .collect();
        rows.print(settings.format)?;
    }

    Ok(Outcome::Done)
}

// ============================================================================
// Rm Command
// ============================================================================

/// Run `octop rm`
pub async fn rm(ctx: &CommandContext, raw: &str) -> Result<Outcome> {
    let mut prompt = prompt::console();
    delete_repo(&ctx.client, &mut prompt, ctx.settings(), raw).await
}

/// Delete a repository after the user types its name again
pub async fn delete_repo<C: RepoApi + ?Sized>(
    client: &C,
    prompt: &mut dyn Prompt,
    settings: Settings<'_>,
    raw: &str,
) -> Result<Outcome> {
    let id = resolve(raw, settings.username)?;
    let repo = client.get_repo(&id).await?;

    status::warning("Hey! You're about to perform a really dangerous action.");
    eprintln!(
        "To confirm you really want to delete {}, please enter its name again:",
        repo.full_name
    );
    let answer = prompt.input("What is its name again?")?;

    if answer.to_lowercase() != repo.name.to_lowercase() {
        eprintln!("Nope. That's not its name. Aborting.");
        return Ok(Outcome::Aborted);
    }

    status::info(format!("Removing {}...", repo.full_name));
    client.delete_repo(&id).await?;

    output::report_change(
        settings.format,
        serde_json::json!({ "deleted": true, "repository": repo.full_name }),
        format!("Removed {}", repo.full_name),
    )?;
    Ok(Outcome::Done)
}

// ============================================================================
// List Command
// ============================================================================

/// Repositories of one owner, as shown under a heading
#[derive(Debug)]
pub struct RepoGroup<'a> {
    pub title: String,
    pub repos: Vec<&'a Repository>,
}

/// Group repositories by owner.
///
/// The ambient owner's group comes first, titled `You`; the others follow
/// alphabetically. Repositories within a group are sorted by name. All
/// comparisons ignore case.
pub fn group_by_owner<'a>(repos: &'a [Repository], me: Option<&str>) -> Vec<RepoGroup<'a>> {
    let mut by_owner: BTreeMap<String, (String, Vec<&Repository>)> = BTreeMap::new();
    for repo in repos {
        let login = &repo.owner.login;
        by_owner
            .entry(login.to_lowercase())
            .or_insert_with(|| (login.clone(), Vec::new()))
            .1
            .push(repo);
    }

    let mine = me.and_then(|me| by_owner.remove(&me.to_lowercase()));

    let mut groups: Vec<RepoGroup> = mine
        .map(|(_, repos)| RepoGroup {
            title: "You".to_string(),
            repos,
        })
        .into_iter()
        .chain(by_owner.into_values().map(|(title, repos)| RepoGroup { title, repos }))
        .collect();

    for group in &mut groups {
        group.repos.sort_by_key(|r| r.name.to_lowercase());
    }
    groups
}

/// Run `octop list`
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let spinner = Spinner::start("Fetching repositories...");
    let result = ctx.client.list_user_repos().await;
    spinner.finish();
    let repos = result?;

    print_repos(&repos, ctx.settings())
}

fn print_repos(repos: &[Repository], settings: Settings<'_>) -> Result<()> {
    let web_host = settings.web_host;
    if settings.format != OutputFormat::Pretty {
        let mut sorted: Vec<&Repository> = repos.iter().collect();
        sorted.sort_by_key(|r| r.full_name.to_lowercase());
        let rows: Vec<RepoDisplay> = sorted
            .into_iter()
            .map(|r| RepoDisplay::new(r, web_host).qualified())
            .collect();
        return rows.print(settings.format);
    }

    if repos.is_empty() {
        status::info("No repositories found");
        return Ok(());
    }

    for group in group_by_owner(repos, settings.username) {
        let rows: Vec<RepoDisplay> = group
            .repos
            .iter()
            .map(|r| RepoDisplay::new(r, web_host))
            .collect();
        println!();
        status::heading(&group.title);
        println!("{}", table::format_table(&rows));
    }
    Ok(())
}
