//! The commit message grammar shared by the linter and the collector.
//!
//! ```text
//! <subject>  ::= <type> ["(" <scope> ")"] ": " <message>
//! <type>     ::= "feat" | "fix" | "doc" | "chore" | "refactor"
//!              | "test" | "style" | "perf" | "other"
//! <scope>    ::= <any text except ")">+
//! <trailer>  ::= "Co-authored-by: " <name> " <" <mailbox> ">"
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Keyword starting every co-author trailer line.
pub const CO_AUTHORED_BY: &str = "Co-authored-by";

const MAILBOX: &str = r"[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

/// Category of a commit, the closed set allowed in front of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Doc,
    Chore,
    Refactor,
    Test,
    Style,
    Perf,
    Other,
}

impl CommitType {
    /// All commit types in prompt order.
    pub const ALL: [CommitType; 9] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Doc,
        CommitType::Chore,
        CommitType::Refactor,
        CommitType::Test,
        CommitType::Style,
        CommitType::Perf,
        CommitType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Doc => "doc",
            CommitType::Chore => "chore",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Style => "style",
            CommitType::Perf => "perf",
            CommitType::Other => "other",
        }
    }

    /// Names of all commit types, in the same order as [`CommitType::ALL`].
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(CommitType::as_str).collect()
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known commit types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommitType(pub String);

impl fmt::Display for UnknownCommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown commit type '{}' (expected one of: {})",
            self.0,
            CommitType::names().join(", ")
        )
    }
}

impl std::error::Error for UnknownCommitType {}

impl FromStr for CommitType {
    type Err = UnknownCommitType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownCommitType(s.to_string()))
    }
}

/// The parts of a subject line that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject<'a> {
    pub kind: CommitType,
    pub scope: Option<&'a str>,
    pub message: &'a str,
}

fn subject_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN.get_or_init(|| {
        let types = CommitType::names().join("|");
        Regex::new(&format!(
            r"^(?P<type>{types})(?:\((?P<scope>[^)]+)\))?: (?P<message>.+)$"
        ))
        .expect("Valid regex pattern for subject lines")
    })
}

fn co_author_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^(?P<name>.*) <(?P<mail>{MAILBOX})>$"))
            .expect("Valid regex pattern for co-authors")
    })
}

fn trailer_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"^{CO_AUTHORED_BY}: (?P<name>.*) <(?P<mail>{MAILBOX})>$"
        ))
        .expect("Valid regex pattern for co-author trailers")
    })
}

/// Splits a subject line into type, scope and message.
///
/// Returns `None` if the line does not follow `<type>[(<scope>)]: <message>`.
pub fn parse_subject(line: &str) -> Option<Subject<'_>> {
    let captures = subject_regex().captures(line)?;
    let kind = captures.name("type")?.as_str().parse().ok()?;

    Some(Subject {
        kind,
        scope: captures.name("scope").map(|m| m.as_str()),
        message: captures.name("message")?.as_str(),
    })
}

/// Whether `line` is a complete `Co-authored-by: name <email>` trailer.
pub fn is_trailer(line: &str) -> bool {
    trailer_regex().is_match(line)
}

/// Whether `value` has the `name <email>` shape of a co-author.
pub fn is_co_author(value: &str) -> bool {
    co_author_regex().is_match(value)
}

/// Renders a co-author value as a trailer line.
pub fn trailer(co_author: &str) -> String {
    format!("{}: {}", CO_AUTHORED_BY, co_author)
}

fn keyword_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i)^{}:\s*", regex::escape(CO_AUTHORED_BY)))
            .expect("Valid regex pattern for the trailer keyword")
    })
}

/// Strips a leading `Co-authored-by:` keyword in any letter case, if present.
pub fn strip_trailer_keyword(value: &str) -> &str {
    match keyword_regex().find(value) {
        Some(keyword) => &value[keyword.end()..],
        None => value,
    }
}

/// Number of characters counted against a line length limit.
pub fn line_length(line: &str) -> usize {
    line.chars().count()
}
