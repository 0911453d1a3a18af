//! Profile card shown before granting access to a user

use std::fmt;

use colored::Colorize;

use crate::client::models::Account;

/// Name, email, organization and URL of an account, for confirmation prompts
#[derive(Debug, Clone)]
pub struct UserCard {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
}

impl From<&Account> for UserCard {
    fn from(account: &Account) -> Self {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        Self {
            login: account.login.clone(),
            name: non_empty(&account.name),
            email: non_empty(&account.email),
            company: non_empty(&account.company),
            blog: non_empty(&account.blog),
        }
    }
}

impl fmt::Display for UserCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format!("@{}", self.login).bold())?;

        let rows = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Organization", &self.company),
            ("URL", &self.blog),
        ];
        for (label, value) in rows {
            if let Some(value) = value {
                writeln!(f, "  {:<13} {}", format!("{}:", label).dimmed(), value)?;
            }
        }
        Ok(())
    }
}
