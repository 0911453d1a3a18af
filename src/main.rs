//! octop CLI - command-line companion for GitHub repositories, collaborators and teams

use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod repo;

use cli::{Cli, CollabCommands, CommandContext, Commands, GlobalOptions, Outcome, TeamsCommands};
use config::Config;
use error::{Error, Result};
use output::status;

fn main() {
    // Completers build their own runtime, so this must run before ours exists
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);
    init_logging(opts.debug);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
        .and_then(|rt| rt.block_on(run(cli, &opts)));

    match result {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Aborted) => eprintln!("Aborted."),
        Err(Error::NotFound(msg)) => {
            status::warning(msg);
            std::process::exit(1);
        }
        Err(err) => {
            status::error(err);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    if debug {
        env_logger::Builder::new()
            .filter_module("octop", LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}

async fn run(cli: Cli, opts: &GlobalOptions) -> Result<Outcome> {
    let config = Config::load_at(opts.config_ref())?
        .with_env()
        .with_api_host(opts.api_host_ref());
    debug!("Using API host {}", config.api_host());

    // Commands that never call the API
    match &cli.command {
        Commands::Open { repo, print } => {
            cli::open::run(repo, config.username(), config.web_host(), *print)?;
            return Ok(Outcome::Done);
        }
        Commands::Completion { shell } => {
            cli::completions::generate(*shell);
            return Ok(Outcome::Done);
        }
        _ => {}
    }

    let ctx = CommandContext::new(opts, config)?;

    match cli.command {
        Commands::New(args) => cli::repo::new(&ctx, &args).await,
        Commands::Rm { repo } => cli::repo::rm(&ctx, &repo).await,
        Commands::List => cli::repo::list(&ctx).await.map(|_| Outcome::Done),
        Commands::Collab(cmd) => match cmd {
            CollabCommands::Add { repo, target } => cli::collab::add(&ctx, &repo, &target).await,
            CollabCommands::Rm { repo, target } => cli::collab::rm(&ctx, &repo, &target).await,
            CollabCommands::List { repo } => {
                cli::collab::list(&ctx, &repo).await.map(|_| Outcome::Done)
            }
        },
        Commands::Teams(cmd) => match cmd {
            TeamsCommands::List { org } => cli::team::list(&ctx, &org).await.map(|_| Outcome::Done),
            TeamsCommands::Members { org, team } => {
                cli::team::members(&ctx, &org, &team).await.map(|_| Outcome::Done)
            }
            TeamsCommands::Add { user, org, team } => cli::team::add(&ctx, &user, &org, &team).await,
            TeamsCommands::Rm { user, org, team } => cli::team::rm(&ctx, &user, &org, &team).await,
        },
        Commands::Open { .. } | Commands::Completion { .. } => Ok(Outcome::Done),
    }
}
