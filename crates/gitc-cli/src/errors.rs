use colored::*;
use gitc_collect::CollectError;
use gitc_git::ProcessFailed;
use gitc_syntax::{CommitType, LintError};
use std::fmt;

/// Error report with the offending message line and suggestions
pub struct EnhancedError {
    pub message: String,
    /// 1-based line of the commit message the error points at.
    pub line: Option<usize>,
    pub file: Option<String>,
    pub source: Option<String>,
    pub suggestion: Option<String>,
    pub help: Option<String>,
}

impl EnhancedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            file: None,
            source: None,
            suggestion: None,
            help: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Display the error with colored output and context
    pub fn display(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.message.bold());

        match (&self.file, self.line) {
            (Some(file), Some(line)) => eprintln!("  {} {}:{}", "-->".blue().bold(), file, line),
            (Some(file), None) => eprintln!("  {} {}", "-->".blue().bold(), file),
            _ => {}
        }

        if let (Some(source), Some(line)) = (&self.source, self.line) {
            eprintln!();
            for row in source_excerpt(source, line) {
                eprintln!("{}", row);
            }
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!();
            eprintln!("{} {}", "suggestion:".green().bold(), suggestion);
        }

        if let Some(help) = &self.help {
            eprintln!();
            eprintln!("{} {}", "help:".cyan().bold(), help);
        }
    }
}

/// Renders `line` of `source` with two lines of context on each side and
/// carets under the whole offending line.
///
/// A line past the end of the source (a trailing blank line that was cut
/// off) yields no rows.
fn source_excerpt(source: &str, line: usize) -> Vec<String> {
    let lines: Vec<&str> = source.split('\n').collect();
    let line_idx = line.saturating_sub(1);

    if line_idx >= lines.len() {
        return Vec::new();
    }

    let start = line_idx.saturating_sub(2);
    let end = (line_idx + 3).min(lines.len());
    let width = end.to_string().len();
    let mut rows = Vec::new();

    for (i, text) in lines.iter().enumerate().take(end).skip(start) {
        let text = text.strip_suffix('\r').unwrap_or(text);
        let number = (i + 1).to_string();

        if i == line_idx {
            rows.push(format!(
                "{:>width$} {} {}",
                number.blue().bold(),
                "|".blue().bold(),
                text,
                width = width
            ));
            let carets = "^".repeat(text.chars().count().max(1));
            rows.push(format!(
                "{:>width$} {} {}",
                "",
                "|".blue().bold(),
                carets.red().bold(),
                width = width
            ));
        } else {
            rows.push(format!(
                "{:>width$} {} {}",
                number.dimmed(),
                "|".blue().bold(),
                text,
                width = width
            ));
        }
    }

    rows
}

impl fmt::Display for EnhancedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for EnhancedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnhancedError: {}", self.message)
    }
}

impl std::error::Error for EnhancedError {}

/// Builds the report for a commit message that failed validation.
pub fn lint_diagnostic(err: &LintError, file: &str, source: &str) -> EnhancedError {
    let mut enhanced = EnhancedError::new(format!("Invalid commit message: {}", err))
        .with_file(file)
        .with_source(source);

    if let Some(line) = err.line() {
        enhanced = enhanced.with_line(line);
    }

    match err {
        LintError::NoMessage => enhanced
            .with_suggestion("Write a subject line such as 'feat: add login form'"),
        LintError::EmptySubjectLine => enhanced
            .with_suggestion("Start the message with the subject line, not with an empty line"),
        LintError::SubjectFormatWrong => enhanced
            .with_suggestion("Use 'type: message' or 'type(scope): message'")
            .with_help(format!("Allowed types: {}", CommitType::names().join(", "))),
        LintError::SubjectTooLong { max, .. } => enhanced
            .with_suggestion(format!(
                "Shorten the message to {} characters and move details into the body",
                max
            )),
        LintError::MissingBody => enhanced
            .with_suggestion("Add body text after the empty line, or remove the second line")
            .with_help("The subject is separated from the body by exactly one empty line"),
        LintError::BodyLineTooLong { max, .. } => {
            enhanced.with_suggestion(format!("Wrap the body at {} characters", max))
        }
        LintError::CoAuthorFormatWrong { .. } => enhanced
            .with_suggestion("Use 'Co-authored-by: name <name@example.com>'")
            .with_help("Once the first co-author line appears, only co-author lines may follow"),
        LintError::NoContentAfterCoAuthored { .. } => enhanced
            .with_suggestion("Remove the empty line, co-authors must be the last lines"),
    }
}

/// Convert anyhow::Error to EnhancedError with suggestions
pub fn enhance_error(err: &anyhow::Error) -> EnhancedError {
    let mut enhanced = EnhancedError::new(err.to_string());

    if let Some(failed) = err.downcast_ref::<ProcessFailed>() {
        enhanced = enhanced.with_help(format!(
            "Run 'git {}' manually to see the details",
            failed.args.join(" ")
        ));
    } else if let Some(collect) = err.downcast_ref::<CollectError>() {
        enhanced = match collect {
            CollectError::PromptAborted { .. } => {
                enhanced.with_help("Nothing was committed, run gitc again to start over")
            }
            CollectError::InvalidScopePattern(_) => enhanced
                .with_suggestion("Check --prefill-scope-regex, GITC_PREFILL_SCOPE_REGEX or .gitcrc")
                .with_help("The pattern needs a named group, e.g. '^feature/(?P<scope>[0-9]+)'"),
            CollectError::BranchLookup(_) => enhanced
                .with_suggestion("Run gitc inside a git repository with a checked out branch"),
            CollectError::InvalidInput { .. } | CollectError::InvalidType(_) => enhanced,
        };
    }

    enhanced
}

/// Exit code for a failed run: git's own code for a failing git command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ProcessFailed>()
        .and_then(|failed| failed.code)
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_points_at_line() {
        colored::control::set_override(false);
        let source = "feat: a\n\nbody\nCo-authored-by: x\nlast";
        let rows = source_excerpt(source, 4);

        assert_eq!(
            rows,
            vec![
                "2 | ",
                "3 | body",
                "4 | Co-authored-by: x",
                "  | ^^^^^^^^^^^^^^^^^",
                "5 | last",
            ]
        );
    }

    #[test]
    fn test_excerpt_blank_line_gets_single_caret() {
        colored::control::set_override(false);
        let rows = source_excerpt("feat: a\n\n", 2);
        assert_eq!(rows[1], "2 | ");
        assert_eq!(rows[2], "  | ^");
    }

    #[test]
    fn test_excerpt_out_of_range() {
        assert!(source_excerpt("feat: a", 3).is_empty());
    }

    #[test]
    fn test_lint_diagnostic() {
        let err = LintError::BodyLineTooLong {
            line: 3,
            length: 80,
            max: 72,
        };
        let enhanced = lint_diagnostic(&err, ".git/COMMIT_EDITMSG", "feat: a\n\nlong");

        assert_eq!(enhanced.line, Some(3));
        assert_eq!(enhanced.file.as_deref(), Some(".git/COMMIT_EDITMSG"));
        assert_eq!(enhanced.suggestion.as_deref(), Some("Wrap the body at 72 characters"));
    }

    #[test]
    fn test_lint_diagnostic_lists_types() {
        let enhanced = lint_diagnostic(&LintError::SubjectFormatWrong, "msg", "feature: a");
        assert_eq!(enhanced.line, Some(1));
        assert!(enhanced.help.unwrap().contains("feat, fix, doc"));
    }

    #[test]
    fn test_exit_code_from_git() {
        let err = anyhow::Error::new(ProcessFailed {
            args: vec!["commit".to_string()],
            code: Some(128),
            stderr: String::new(),
        });
        assert_eq!(exit_code(&err), 128);

        let killed = anyhow::Error::new(ProcessFailed {
            args: vec!["push".to_string()],
            code: None,
            stderr: String::new(),
        });
        assert_eq!(exit_code(&killed), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }

    #[test]
    fn test_enhance_collect_error() {
        let err = anyhow::Error::new(CollectError::PromptAborted { step: "message" });
        let enhanced = enhance_error(&err);
        assert_eq!(enhanced.message, "aborted while asking for message");
        assert!(enhanced.help.is_some());
    }
}
