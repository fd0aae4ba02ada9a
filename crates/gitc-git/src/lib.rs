//! # gitc Git Operations
//!
//! Thin process runner around the system `git` binary.
//!
//! ## Overview
//!
//! - **Capture**: run git and return its trimmed stdout ([`git_capture`])
//! - **Run**: run git attached to the terminal ([`git_run`])
//! - **Branch Information**: the current branch name, used to prefill a scope
//! - **Commit Workflow**: stage, commit and push
//! - **Message Files**: read the file handed to the `commit-msg` hook
//!
//! Every failing git invocation is reported as a [`ProcessFailed`] inside the
//! returned [`anyhow::Error`], so callers can recover git's exit code:
//!
//! ```rust,no_run
//! use gitc_git::{ProcessFailed, commit};
//!
//! if let Err(err) = commit("feat: add linter") {
//!     let code = err
//!         .downcast_ref::<ProcessFailed>()
//!         .and_then(|failed| failed.code)
//!         .unwrap_or(1);
//!     std::process::exit(code);
//! }
//! ```

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// A git invocation that could not be started or exited unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFailed {
    /// Arguments passed to `git`.
    pub args: Vec<String>,
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured stderr, empty when stderr was inherited.
    pub stderr: String,
}

impl ProcessFailed {
    fn new(args: &[&str], status: ExitStatus, stderr: impl Into<String>) -> Self {
        Self {
            args: args.iter().map(|arg| arg.to_string()).collect(),
            code: status.code(),
            stderr: stderr.into(),
        }
    }
}

impl fmt::Display for ProcessFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {} failed", self.args.join(" "))?;
        match self.code {
            Some(code) => write!(f, " with exit code {}", code)?,
            None => write!(f, " (terminated by signal)")?,
        }
        if !self.stderr.trim().is_empty() {
            write!(f, ": {}", self.stderr.trim())?;
        }
        Ok(())
    }
}

impl std::error::Error for ProcessFailed {}

/// Execute a Git command and capture its output.
///
/// Returns stdout with surrounding whitespace removed. A non-zero exit code
/// is reported as [`ProcessFailed`] carrying git's stderr.
///
/// # Example
///
/// ```rust,no_run
/// use gitc_git::git_capture;
///
/// let branch = git_capture(&["branch", "--show-current"]).unwrap();
/// println!("Current branch: {}", branch);
/// ```
pub fn git_capture(args: &[&str]) -> Result<String> {
    debug!(?args, "capturing git output");

    let output = Command::new("git")
        .args(args)
        .output()
        .with_context(|| format!("could not start git {}", args.join(" ")))?;

    if !output.status.success() {
        return Err(ProcessFailed::new(
            args,
            output.status,
            String::from_utf8_lossy(&output.stderr),
        )
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Execute a Git command attached to the current terminal.
///
/// stdin, stdout and stderr are inherited, so interactive commands such as
/// `git add --patch` work as usual.
pub fn git_run(args: &[&str]) -> Result<()> {
    debug!(?args, "running git");

    let status = Command::new("git")
        .args(args)
        .status()
        .with_context(|| format!("could not start git {}", args.join(" ")))?;

    if !status.success() {
        return Err(ProcessFailed::new(args, status, String::new()).into());
    }

    Ok(())
}

/// Name of the currently checked out branch.
///
/// Empty when HEAD is detached.
///
/// ```rust,no_run
/// use gitc_git::current_branch;
///
/// let branch = current_branch().unwrap();
/// println!("Current branch: {}", branch);
/// ```
pub fn current_branch() -> Result<String> {
    git_capture(&["branch", "--show-current"])
}

/// Stage every change in the work tree (`git add --all :/`).
pub fn stage_all() -> Result<()> {
    git_run(&["add", "--all", ":/"])
}

/// Interactively stage hunks (`git add --patch`).
pub fn stage_patch() -> Result<()> {
    git_run(&["add", "--patch"])
}

/// Commit the staged changes with `message`.
pub fn commit(message: &str) -> Result<()> {
    git_run(&["commit", "-m", message])
}

/// Push the current branch to its upstream.
pub fn push() -> Result<()> {
    git_run(&["push"])
}

/// Read a commit message file as handed to the `commit-msg` hook.
///
/// Everything from the scissors line on (the diff shown by `git commit -v`)
/// is cut off and lines starting with `#` are dropped, the same way git's
/// default cleanup removes its own instructions from the editor template.
pub fn read_message_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read commit message file {}", path.display()))?;

    Ok(strip_comments(&content))
}

/// Marks the start of the diff appended to the template by `git commit -v`.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

fn strip_comments(content: &str) -> String {
    content
        .split('\n')
        .take_while(|line| !line.starts_with(SCISSORS))
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
