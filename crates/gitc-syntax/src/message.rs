use crate::grammar::{self, CommitType};
use std::fmt;

/// A commit message split into its structured parts.
///
/// The [`Display`](fmt::Display) implementation renders the canonical form
/// accepted by [`lint`](crate::lint()):
///
/// ```text
/// type(scope): subject
///
/// body line 1
/// body line 2
///
/// Co-authored-by: name <mail@example.com>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub kind: CommitType,
    pub scope: Option<String>,
    pub subject: String,
    pub body: Vec<String>,
    /// `name <email>` values, rendered with the `Co-authored-by` keyword.
    pub co_authors: Vec<String>,
}

impl CommitMessage {
    pub fn new(kind: CommitType, subject: impl Into<String>) -> Self {
        Self {
            kind,
            scope: None,
            subject: subject.into(),
            body: Vec::new(),
            co_authors: Vec::new(),
        }
    }

    /// Builder: set the scope; an empty scope is dropped.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        self.scope = (!scope.is_empty()).then_some(scope);
        self
    }

    pub fn with_body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn with_co_author(mut self, co_author: impl Into<String>) -> Self {
        self.co_authors.push(co_author.into());
        self
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(scope) = &self.scope {
            write!(f, "({})", scope)?;
        }
        write!(f, ": {}", self.subject)?;

        if !self.body.is_empty() {
            write!(f, "\n\n{}", self.body.join("\n"))?;
        }

        if !self.co_authors.is_empty() {
            let trailers: Vec<String> = self
                .co_authors
                .iter()
                .map(|co_author| grammar::trailer(co_author))
                .collect();
            write!(f, "\n\n{}", trailers.join("\n"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_only() {
        let msg = CommitMessage::new(CommitType::Feat, "abc");
        assert_eq!(msg.to_string(), "feat: abc");
    }

    #[test]
    fn test_subject_with_scope() {
        let msg = CommitMessage::new(CommitType::Fix, "abc").with_scope("#1");
        assert_eq!(msg.to_string(), "fix(#1): abc");
    }

    #[test]
    fn test_empty_scope_is_dropped() {
        let msg = CommitMessage::new(CommitType::Fix, "abc").with_scope("");
        assert_eq!(msg.scope, None);
        assert_eq!(msg.to_string(), "fix: abc");
    }

    #[test]
    fn test_full_message() {
        let msg = CommitMessage::new(CommitType::Doc, "describe linter")
            .with_scope("GITC-7")
            .with_body_line("first line")
            .with_body_line("second line")
            .with_co_author("name <mail@test.de>")
            .with_co_author("other <other@test.de>");

        assert_eq!(
            msg.to_string(),
            "doc(GITC-7): describe linter\n\nfirst line\nsecond line\n\n\
             Co-authored-by: name <mail@test.de>\n\
             Co-authored-by: other <other@test.de>"
        );
    }

    #[test]
    fn test_co_authors_without_body() {
        let msg = CommitMessage::new(CommitType::Chore, "abc").with_co_author("name <mail@test.de>");
        assert_eq!(
            msg.to_string(),
            "chore: abc\n\nCo-authored-by: name <mail@test.de>"
        );
    }
}
