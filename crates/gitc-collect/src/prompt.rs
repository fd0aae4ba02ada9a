//! Line-based prompts.
//!
//! [`Prompter`] is the seam between the collector and the terminal. The
//! [`TerminalPrompter`] reads answers line by line from any [`BufRead`] and
//! writes its prompts to any [`Write`], which keeps it usable in tests.

use colored::*;
use std::fmt;
use std::io::{self, BufRead, Stderr, StdinLock, Write};

/// Validates an answer, returning a message to show before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Why a prompt could not produce an answer.
#[derive(Debug)]
pub enum PromptError {
    /// The input stream ended or the user cancelled.
    Aborted,
    /// Reading the answer or writing the prompt failed.
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Aborted => write!(f, "prompt aborted"),
            PromptError::Io(e) => write!(f, "prompt failed: {}", e),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Aborted => None,
            PromptError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        PromptError::Io(err)
    }
}

/// Asks the user for single values.
pub trait Prompter {
    /// Lets the user pick one of `items`.
    fn select(&mut self, label: &str, items: &[&str]) -> Result<String, PromptError>;

    /// Asks for free text, offering `default` and re-asking until `validate`
    /// accepts the answer.
    fn text(
        &mut self,
        label: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, label: &str, items: &[&str]) -> Result<String, PromptError> {
        (**self).select(label, items)
    }

    fn text(
        &mut self,
        label: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError> {
        (**self).text(label, default, validate)
    }
}

/// Answer that clears a prefilled default.
pub const CLEAR_DEFAULT: &str = "-";

/// Prompts on a terminal, one answer per line.
///
/// - `select` lists the items numbered; the answer is a number or an item.
/// - `text` shows the default in brackets. An empty answer takes the
///   default, [`CLEAR_DEFAULT`] discards it.
/// - End of input aborts the prompt.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stderr> {
    /// Reads from stdin and prompts on stderr, leaving stdout to the caller.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the output it wrote to.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Aborted);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn reject(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{} {}", "✗".red().bold(), message.red())?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&mut self, label: &str, items: &[&str]) -> Result<String, PromptError> {
        if items.is_empty() {
            return Err(PromptError::Aborted);
        }

        writeln!(self.output, "{} {}", "?".cyan().bold(), label.bold())?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.output, "  {} {}", format!("{})", index + 1).cyan(), item)?;
        }

        loop {
            write!(self.output, "{} ", ">".cyan().bold())?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            let answer = answer.trim();

            if let Ok(number) = answer.parse::<usize>()
                && (1..=items.len()).contains(&number)
            {
                return Ok(items[number - 1].to_string());
            }
            if let Some(item) = items.iter().find(|item| **item == answer) {
                return Ok(item.to_string());
            }

            self.reject(&format!(
                "choose a number between 1 and {} or one of the listed names",
                items.len()
            ))?;
        }
    }

    fn text(
        &mut self,
        label: &str,
        default: Option<&str>,
        validate: Validator<'_>,
    ) -> Result<String, PromptError> {
        let default = default.filter(|value| !value.is_empty());

        loop {
            match default {
                Some(value) => write!(
                    self.output,
                    "{} {} {}: ",
                    "?".cyan().bold(),
                    label.bold(),
                    format!("[{}]", value).dimmed()
                )?,
                None => write!(self.output, "{} {}: ", "?".cyan().bold(), label.bold())?,
            }
            self.output.flush()?;

            let answer = self.read_answer()?;
            let value = match default {
                Some(value) if answer.is_empty() => value.to_string(),
                Some(_) if answer == CLEAR_DEFAULT => String::new(),
                _ => answer,
            };

            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => self.reject(&message)?,
            }
        }
    }
}
