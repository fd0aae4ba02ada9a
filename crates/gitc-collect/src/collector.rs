//! Interactive collection of a commit message.
//!
//! The collector asks for each part of the message in grammar order and
//! validates every answer with the same rules the linter applies, so that
//! the rendered [`CommitMessage`] always passes [`gitc_syntax::lint()`].

use crate::error::CollectError;
use crate::prompt::Prompter;
use gitc_syntax::grammar::{self, line_length};
use gitc_syntax::{CommitMessage, CommitType, LintConfig};
use regex::Regex;
use tracing::info;

/// Name of the capture group holding the scope in the prefill pattern.
pub const SCOPE_GROUP: &str = "scope";

/// Options for a collection session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Length limits, shared with the linter.
    pub limits: LintConfig,
    /// Pattern with a `scope` capture group matched against the branch name.
    pub prefill_scope_regex: Option<String>,
    /// Prepended to a scope found in the branch name.
    pub issue_prefix: String,
    /// Log branch detection details.
    pub verbose: bool,
}

impl CollectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: LintConfig) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_prefill_scope_regex(mut self, pattern: impl Into<String>) -> Self {
        self.prefill_scope_regex = Some(pattern.into());
        self
    }

    pub fn with_issue_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.issue_prefix = prefix.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Provides the name of the current branch.
pub trait BranchSource {
    fn current_branch(&self) -> anyhow::Result<String>;
}

impl<F> BranchSource for F
where
    F: Fn() -> anyhow::Result<String>,
{
    fn current_branch(&self) -> anyhow::Result<String> {
        self()
    }
}

/// Rejects scopes the subject grammar cannot carry.
pub fn validate_scope(input: &str) -> Result<(), String> {
    if input.contains(')') {
        return Err("scope must not contain ')'".to_string());
    }
    Ok(())
}

/// The subject message must be present and fit into `max` characters.
pub fn validate_subject(input: &str, max: usize) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("message must be provided".to_string());
    }
    if line_length(input) > max {
        return Err(format!("message must not be longer than {} characters", max));
    }
    Ok(())
}

/// A body line must fit into `max` characters and must not read as a trailer.
///
/// An empty line is accepted; it ends the body.
pub fn validate_body_line(input: &str, max: usize) -> Result<(), String> {
    if line_length(input) > max {
        return Err(format!("no line must be longer than {} characters", max));
    }
    if grammar::is_trailer(input) {
        return Err("add co-authors in the Co-Authored-By step, not in the body".to_string());
    }
    Ok(())
}

/// A co-author must look like `name <email>`, optionally with the keyword.
///
/// An empty line is accepted; it ends the co-author list.
pub fn validate_co_author(input: &str) -> Result<(), String> {
    if input.is_empty() || grammar::is_co_author(grammar::strip_trailer_keyword(input)) {
        return Ok(());
    }
    Err("please use the format [another-name <another-name@example.com>]".to_string())
}

/// Asks for the parts of a commit message, one prompt at a time.
pub struct Collector<P, B> {
    config: CollectorConfig,
    scope_pattern: Option<Regex>,
    prompter: P,
    branches: B,
}

impl<P: Prompter, B: BranchSource> Collector<P, B> {
    /// Creates a collector, compiling the scope prefill pattern if one is set.
    pub fn new(config: CollectorConfig, prompter: P, branches: B) -> Result<Self, CollectError> {
        let scope_pattern = config
            .prefill_scope_regex
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(Regex::new)
            .transpose()
            .map_err(CollectError::InvalidScopePattern)?;

        Ok(Self {
            config,
            scope_pattern,
            prompter,
            branches,
        })
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Runs the prompts and returns the structured message.
    pub fn collect(&mut self) -> Result<CommitMessage, CollectError> {
        let kind = self.select_type()?;
        let scope_default = self.scope_default()?;
        let scope = self.prompt_scope(scope_default.as_deref())?;
        let subject = self.prompt_subject()?;

        let mut message = CommitMessage::new(kind, subject).with_scope(scope);
        message.body = self.prompt_body()?;
        message.co_authors = self.prompt_co_authors()?;

        if self.config.verbose {
            info!(commit = %message, "collected commit message");
        }

        Ok(message)
    }

    fn select_type(&mut self) -> Result<CommitType, CollectError> {
        let answer = self
            .prompter
            .select("Type of change", &CommitType::names())
            .map_err(CollectError::prompt("type"))?;

        answer.trim().parse().map_err(CollectError::InvalidType)
    }

    fn scope_default(&self) -> Result<Option<String>, CollectError> {
        let Some(pattern) = &self.scope_pattern else {
            return Ok(None);
        };

        let branch = self
            .branches
            .current_branch()
            .map_err(CollectError::BranchLookup)?;
        let branch = branch.trim();
        if self.config.verbose {
            info!(branch, "found branch");
        }

        match pattern.captures(branch).and_then(|c| c.name(SCOPE_GROUP)) {
            Some(scope) => Ok(Some(format!(
                "{}{}",
                self.config.issue_prefix,
                scope.as_str()
            ))),
            None => {
                if self.config.verbose {
                    info!(pattern = pattern.as_str(), "regular expression does not match");
                }
                Ok(None)
            }
        }
    }

    fn prompt_scope(&mut self, default: Option<&str>) -> Result<String, CollectError> {
        self.prompter
            .text("Issue (scope)", default, &validate_scope)
            .map_err(CollectError::prompt("scope"))
    }

    fn prompt_subject(&mut self) -> Result<String, CollectError> {
        let max = self.config.limits.subject_line_length;
        self.prompter
            .text("Message", None, &|input: &str| validate_subject(input, max))
            .map_err(CollectError::prompt("message"))
    }

    fn prompt_body(&mut self) -> Result<Vec<String>, CollectError> {
        let max = self.config.limits.body_line_length;
        let mut body = Vec::new();
        loop {
            let line = self
                .prompter
                .text("Body, empty to end (repeated)", None, &|input: &str| {
                    validate_body_line(input, max)
                })
                .map_err(CollectError::prompt("body"))?;
            if line.is_empty() {
                return Ok(body);
            }
            body.push(line);
        }
    }

    fn prompt_co_authors(&mut self) -> Result<Vec<String>, CollectError> {
        let mut co_authors = Vec::new();
        loop {
            let line = self
                .prompter
                .text(
                    "Co-Authored-By, empty to end (repeated)",
                    None,
                    &validate_co_author,
                )
                .map_err(CollectError::prompt("co-authors"))?;
            if line.is_empty() {
                return Ok(co_authors);
            }
            co_authors.push(grammar::strip_trailer_keyword(&line).to_string());
        }
    }
}
