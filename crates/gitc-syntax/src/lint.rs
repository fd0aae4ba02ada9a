//! Single-pass linter for commit messages.
//!
//! The subject line is matched against the grammar, then the remaining lines
//! are fed through a two-state machine:
//!
//! ```text
//!            blank line / trailer
//!   Body ─────────────────────────▶ Trailer ──┐ trailer
//!    │ ▲                                ▲     │
//!    └─┘ body line                      └─────┘
//! ```
//!
//! There is no way back from `Trailer` to `Body`; a blank line or any
//! non-trailer content inside the trailer block is an error.

use crate::error::LintError;
use crate::grammar::{self, line_length};

/// Default maximum length of the subject message (without type and scope).
pub const DEFAULT_SUBJECT_LINE_LENGTH: usize = 50;
/// Default maximum length of a single body line.
pub const DEFAULT_BODY_LINE_LENGTH: usize = 72;

/// Limits and normalization applied while linting.
///
/// | Setting | Default |
/// |---------|---------|
/// | `subject_line_length` | 50 |
/// | `body_line_length` | 72 |
/// | `trim_whitespace` | `false` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintConfig {
    /// Maximum characters of the subject message.
    pub subject_line_length: usize,
    /// Maximum characters of a body line.
    pub body_line_length: usize,
    /// Strip surrounding whitespace (e.g. the trailing newline of a message
    /// file) before linting.
    pub trim_whitespace: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            subject_line_length: DEFAULT_SUBJECT_LINE_LENGTH,
            body_line_length: DEFAULT_BODY_LINE_LENGTH,
            trim_whitespace: false,
        }
    }
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the subject message limit.
    pub fn with_subject_line_length(mut self, length: usize) -> Self {
        self.subject_line_length = length;
        self
    }

    /// Builder: set the body line limit.
    pub fn with_body_line_length(mut self, length: usize) -> Self {
        self.body_line_length = length;
        self
    }

    /// Builder: trim surrounding whitespace before linting.
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Body,
    Trailer,
}

impl Section {
    fn advance(self, line: &str, number: usize, max: usize) -> Result<Section, LintError> {
        match self {
            Section::Trailer if line.is_empty() => {
                Err(LintError::NoContentAfterCoAuthored { line: number })
            }
            Section::Trailer if !grammar::is_trailer(line) => {
                Err(LintError::CoAuthorFormatWrong { line: number })
            }
            Section::Trailer => Ok(Section::Trailer),
            Section::Body if line.is_empty() || grammar::is_trailer(line) => Ok(Section::Trailer),
            Section::Body => {
                let length = line_length(line);
                if length > max {
                    return Err(LintError::BodyLineTooLong {
                        line: number,
                        length,
                        max,
                    });
                }
                Ok(Section::Body)
            }
        }
    }
}

/// Checks commit messages against the grammar with a fixed [`LintConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lints `message`, returning the first violation found.
    pub fn lint(&self, message: &str) -> Result<(), LintError> {
        let message = if self.config.trim_whitespace {
            message.trim()
        } else {
            message
        };

        if message.is_empty() {
            return Err(LintError::NoMessage);
        }

        let lines: Vec<&str> = message
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let Some((subject, rest)) = lines.split_first() else {
            return Err(LintError::NoMessage);
        };

        self.subject_line(subject)?;

        match rest.len() {
            0 => return Ok(()),
            1 => return Err(LintError::MissingBody),
            _ => {}
        }

        let max = self.config.body_line_length;
        lines
            .iter()
            .enumerate()
            .skip(2)
            .try_fold(Section::Body, |section, (index, line)| {
                section.advance(line, index + 1, max)
            })?;

        Ok(())
    }

    fn subject_line(&self, line: &str) -> Result<(), LintError> {
        if line.is_empty() {
            return Err(LintError::EmptySubjectLine);
        }

        let subject = grammar::parse_subject(line).ok_or(LintError::SubjectFormatWrong)?;

        let length = line_length(subject.message);
        let max = self.config.subject_line_length;
        if length > max {
            return Err(LintError::SubjectTooLong { length, max });
        }

        Ok(())
    }
}

/// Lints `message` with the given limits.
pub fn lint(message: &str, config: &LintConfig) -> Result<(), LintError> {
    Linter::new(*config).lint(message)
}
