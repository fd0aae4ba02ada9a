use crate::prompt::PromptError;
use gitc_syntax::UnknownCommitType;
use std::fmt;
use std::io;

/// Why collecting a commit message stopped.
///
/// Collection is all or nothing: no partial message accompanies an error.
#[derive(Debug)]
pub enum CollectError {
    /// The user cancelled or the input ended while answering `step`.
    PromptAborted { step: &'static str },
    /// Reading or writing the terminal failed while answering `step`.
    InvalidInput {
        step: &'static str,
        source: io::Error,
    },
    /// The selected commit type is not part of the grammar.
    InvalidType(UnknownCommitType),
    /// The configured scope prefill pattern does not compile.
    InvalidScopePattern(regex::Error),
    /// The current branch could not be read.
    BranchLookup(anyhow::Error),
}

impl CollectError {
    pub(crate) fn prompt(step: &'static str) -> impl FnOnce(PromptError) -> CollectError {
        move |err| match err {
            PromptError::Aborted => CollectError::PromptAborted { step },
            PromptError::Io(source) => CollectError::InvalidInput { step, source },
        }
    }
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::PromptAborted { step } => {
                write!(f, "aborted while asking for {}", step)
            }
            CollectError::InvalidInput { step, source } => {
                write!(f, "could not read {}: {}", step, source)
            }
            CollectError::InvalidType(e) => write!(f, "{}", e),
            CollectError::InvalidScopePattern(e) => {
                write!(f, "could not parse regex for scope prefill: {}", e)
            }
            CollectError::BranchLookup(e) => write!(f, "could not read current branch: {}", e),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::PromptAborted { .. } => None,
            CollectError::InvalidInput { source, .. } => Some(source),
            CollectError::InvalidType(e) => Some(e),
            CollectError::InvalidScopePattern(e) => Some(e),
            CollectError::BranchLookup(e) => Some(&**e),
        }
    }
}
