//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use completions::repo_name_candidates;

pub mod access;
pub mod args;
pub mod collab;
pub mod completions;
pub mod context;
pub mod open;
pub mod prompt;
pub mod repo;
pub mod resolve;
pub mod team;

pub use args::{GlobalOptions, OutputFormat};
pub use context::{CommandContext, Settings};

/// How a command finished when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested change was made
    Done,
    /// The user declined a confirmation; nothing (more) was changed
    Aborted,
}

/// octop - command-line companion for GitHub repositories, collaborators and teams
#[derive(Parser, Debug)]
#[command(name = "octop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "OCTOP_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "OCTOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the GitHub API host (e.g. a GitHub Enterprise instance)
    #[arg(long, global = true, env = "OCTOP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "OCTOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create one or more repositories
    New(NewArgs),

    /// Delete a repository
    Rm {
        /// Repository as owner/name, or name under GITHUB_USERNAME
        #[arg(add = repo_name_candidates())]
        repo: String,
    },

    /// List your repositories, grouped by owner
    #[command(visible_aliases = ["l", "ls"])]
    List,

    /// Manage repository collaborators and teams
    #[command(subcommand, visible_alias = "c")]
    Collab(CollabCommands),

    /// Manage organization teams
    #[command(subcommand, visible_alias = "t")]
    Teams(TeamsCommands),

    /// Open a repository in the browser
    #[command(visible_alias = "o")]
    Open {
        /// Repository as owner/name, or name under GITHUB_USERNAME
        #[arg(add = repo_name_candidates())]
        repo: String,

        /// Print the URL instead of launching a browser
        #[arg(long)]
        print: bool,
    },

    /// Generate shell completions (static)
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   octop completion bash > /etc/bash_completion.d/octop
  zsh:    octop completion zsh > \"${fpath[1]}/_octop\"
  fish:   octop completion fish > ~/.config/fish/completions/octop.fish

Dynamic completions (includes your repository names via API):
  bash:   echo 'source <(COMPLETE=bash octop)' >> ~/.bashrc
  zsh:    echo 'source <(COMPLETE=zsh octop)' >> ~/.zshrc
  fish:   echo 'COMPLETE=fish octop | source' >> ~/.config/fish/config.fish")]
    Completion {
        /// Shell to generate completions for (static only)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `octop new`
#[derive(Debug, Clone, Args, Default)]
pub struct NewArgs {
    /// Repository names, as owner/name or name under GITHUB_USERNAME
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Create private repositories
    #[arg(long)]
    pub private: bool,

    /// Treat every owner as an organization without looking it up
    #[arg(long)]
    pub org: bool,

    /// Initialize with a commit and an empty README
    #[arg(long)]
    pub init: bool,

    /// License template to apply (e.g. mit, mpl-2.0)
    #[arg(long, value_name = "TEMPLATE")]
    pub license: Option<String>,

    /// Gitignore template to apply (e.g. Rust, Haskell)
    #[arg(long, value_name = "TEMPLATE")]
    pub gitignore: Option<String>,
}

/// Collaborator subcommands
#[derive(Subcommand, Debug)]
pub enum CollabCommands {
    /// Grant a user or team access to a repository
    #[command(after_help = "\
TARGET is a team slug (organization repositories) or a username, optionally
followed by :PERMISSION where PERMISSION is pull/read, push/write or admin.
Users default to push.")]
    Add {
        /// Repository as owner/name, or name under GITHUB_USERNAME
        #[arg(add = repo_name_candidates())]
        repo: String,

        /// Team slug or username, with optional :permission
        #[arg(value_name = "TARGET[:PERMISSION]")]
        target: String,
    },

    /// Revoke a user's or team's access to a repository
    Rm {
        /// Repository as owner/name, or name under GITHUB_USERNAME
        #[arg(add = repo_name_candidates())]
        repo: String,

        /// Team slug or username
        target: String,
    },

    /// List teams and/or collaborators on a repository
    #[command(visible_alias = "ls")]
    List {
        /// Repository as owner/name, or name under GITHUB_USERNAME
        #[arg(add = repo_name_candidates())]
        repo: String,
    },
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamsCommands {
    /// List the teams of an organization
    #[command(visible_alias = "ls")]
    List {
        /// Organization login
        org: String,
    },

    /// List the members of a team
    Members {
        /// Organization login
        org: String,

        /// Team slug or name
        team: String,
    },

    /// Add a user to a team
    Add {
        /// Username, with optional :member or :maintainer role
        #[arg(value_name = "USER[:ROLE]")]
        user: String,

        /// Organization login
        org: String,

        /// Team slug or name
        team: String,
    },

    /// Remove a user from a team
    Rm {
        /// Username
        user: String,

        /// Organization login
        org: String,

        /// Team slug or name
        team: String,
    },
}
