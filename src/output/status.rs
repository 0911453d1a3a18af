//! Colored status lines and progress spinners on stderr

use std::fmt::Display;
use std::io::IsTerminal;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

pub fn success(msg: impl Display) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn warning(msg: impl Display) {
    eprintln!("{} {}", "⚠".yellow(), msg);
}

pub fn info(msg: impl Display) {
    eprintln!("{} {}", "ℹ".blue(), msg);
}

pub fn error(msg: impl Display) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Bold, underlined section heading on stdout
pub fn heading(title: &str) {
    println!("{}", heading_text(title));
}

pub fn heading_text(title: &str) -> String {
    title.bold().underline().to_string()
}

/// Spinner shown while a request is in flight.
///
/// Hidden when stderr is not a terminal so piped output stays clean.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let bar = if std::io::stderr().is_terminal() {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"))
            {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(message.into());

        Self { bar }
    }

    /// Remove the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
