//! Interactive confirmations
//!
//! Yes/no questions are answered on a single line. The answer drives a small
//! state machine:
//!
//! ```text
//! Asking ──"y"/"yes"──▶ Accepted
//!    │  ──"n"/"no"───▶ Rejected
//!    │  ──"" or EOF──▶ Accepted | Rejected (the question's default)
//!    └──anything else─▶ Invalid ──▶ Asking
//! ```

use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use dialoguer::Input;

use crate::error::Result;

/// Printed before re-asking after an unrecognized answer
const INVALID_ANSWER: &str = "Hm. Please enter y or n.";

/// Source of user answers for handlers
pub trait Prompt {
    /// Ask a yes/no question; an empty answer selects `default`
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Ask for a line of free text (trimmed)
    fn input(&mut self, question: &str) -> Result<String>;
}

/// State of a yes/no confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Asking,
    Accepted,
    Rejected,
    Invalid,
}

impl ConfirmState {
    /// Transition out of `Asking` for one answer line (`None` = end of input)
    pub fn answer(line: Option<&str>, default: bool) -> Self {
        let Some(line) = line else {
            return Self::from_bool(default);
        };

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => ConfirmState::Accepted,
            "n" | "no" => ConfirmState::Rejected,
            "" => Self::from_bool(default),
            _ => ConfirmState::Invalid,
        }
    }

    fn from_bool(accepted: bool) -> Self {
        if accepted {
            ConfirmState::Accepted
        } else {
            ConfirmState::Rejected
        }
    }
}

/// Line-based prompt over any reader/writer pair
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    /// Use a dialoguer text field for free-text input
    rich_input: bool,
}

/// Prompt on the process terminal: questions on stderr, answers from stdin
pub fn console() -> LinePrompt<BufReader<io::Stdin>, io::Stderr> {
    let rich_input = io::stdin().is_terminal() && io::stderr().is_terminal();
    LinePrompt {
        reader: BufReader::new(io::stdin()),
        writer: io::stderr(),
        rich_input,
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    #[cfg(test)]
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            rich_input: false,
        }
    }

    /// Read one line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let mut state = ConfirmState::Asking;
        loop {
            state = match state {
                ConfirmState::Asking => {
                    write!(self.writer, "{} ", question)?;
                    self.writer.flush()?;
                    let line = self.read_line()?;
                    if line.is_none() {
                        writeln!(self.writer)?;
                    }
                    ConfirmState::answer(line.as_deref(), default)
                }
                ConfirmState::Invalid => {
                    writeln!(self.writer, "\n{}", INVALID_ANSWER)?;
                    ConfirmState::Asking
                }
                ConfirmState::Accepted => return Ok(true),
                ConfirmState::Rejected => return Ok(false),
            };
        }
    }

    fn input(&mut self, question: &str) -> Result<String> {
        if self.rich_input {
            let answer: String = Input::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer.trim().to_string());
        }

        write!(self.writer, "{} ", question)?;
        self.writer.flush()?;
        let line = self.read_line()?.unwrap_or_default();
        Ok(line.trim().to_string())
    }
}

/// Prompt fed from canned answers, for handler tests
#[cfg(test)]
pub fn scripted(answers: &[&str]) -> LinePrompt<io::Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = answers.join("\n");
    if !answers.is_empty() {
        input.push('\n');
    }
    LinePrompt::new(io::Cursor::new(input.into_bytes()), Vec::new())
}

#[cfg(test)]
impl LinePrompt<io::Cursor<Vec<u8>>, Vec<u8>> {
    /// Everything written to the user so far
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}
