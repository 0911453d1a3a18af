//! `octop open`: show a repository in the browser

use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};
use crate::repo::{RepoId, resolve};

/// Web URL of a repository
pub fn repo_url(web_host: &str, repo: &RepoId) -> String {
    format!("{}/{}/{}", web_host.trim_end_matches('/'), repo.owner, repo.name)
}

/// Program and leading arguments that open a URL on `os`
///
/// `os` takes the values of [`std::env::consts::OS`].
pub fn browser_command(os: &str) -> Option<(&'static str, &'static [&'static str])> {
    match os {
        "linux" => Some(("xdg-open", &[])),
        "macos" => Some(("open", &[])),
        "windows" => Some((
            r"C:\Windows\System32\rundll32.exe",
            &["url.dll,FileProtocolHandler"],
        )),
        _ => None,
    }
}

/// Run `octop open`
pub fn run(raw: &str, username: Option<&str>, web_host: &str, print: bool) -> Result<()> {
    let id = resolve(raw, username)?;
    let url = repo_url(web_host, &id);

    if print {
        println!("{}", url);
        return Ok(());
    }

    launch(&url, std::env::consts::OS)
}

fn launch(url: &str, os: &str) -> Result<()> {
    let (program, args) = browser_command(os)
        .ok_or_else(|| Error::Other(format!("unsupported platform '{}'", os)))?;

    debug!("Opening {} with {}", url, program);
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
