use std::fmt;

/// The first grammar violation found in a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    NoMessage,
    EmptySubjectLine,
    SubjectFormatWrong,
    SubjectTooLong { length: usize, max: usize },
    MissingBody,
    BodyLineTooLong { line: usize, length: usize, max: usize },
    CoAuthorFormatWrong { line: usize },
    NoContentAfterCoAuthored { line: usize },
}

impl LintError {
    /// 1-based line number the violation was found on, if it belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LintError::NoMessage => None,
            LintError::EmptySubjectLine => Some(1),
            LintError::SubjectFormatWrong => Some(1),
            LintError::SubjectTooLong { .. } => Some(1),
            LintError::MissingBody => Some(2),
            LintError::BodyLineTooLong { line, .. } => Some(*line),
            LintError::CoAuthorFormatWrong { line } => Some(*line),
            LintError::NoContentAfterCoAuthored { line } => Some(*line),
        }
    }
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintError::NoMessage => write!(f, "no commit message provided"),
            LintError::EmptySubjectLine => write!(f, "no subject line given"),
            LintError::SubjectFormatWrong => write!(
                f,
                "subject line does not adhere to required format (type: message or type(issue): message)"
            ),
            LintError::SubjectTooLong { length, max } => write!(
                f,
                "subject line should not be longer than {} characters (without type and issue), found {}",
                max, length
            ),
            LintError::MissingBody => write!(f, "body is missing (subject + empty line)"),
            LintError::BodyLineTooLong { line, length, max } => write!(
                f,
                "body line {} is too long ({} characters, max {})",
                line, length, max
            ),
            LintError::CoAuthorFormatWrong { line } => write!(
                f,
                "co-authored line {} has the wrong format (Co-authored-by: name <email>)",
                line
            ),
            LintError::NoContentAfterCoAuthored { line } => write!(
                f,
                "no content after co-authored-by lines allowed (line {})",
                line
            ),
        }
    }
}

impl std::error::Error for LintError {}
