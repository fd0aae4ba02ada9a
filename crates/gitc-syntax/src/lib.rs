//! # gitc Syntax
//!
//! Commit message grammar and linter for gitc.
//!
//! ## Overview
//!
//! - **Grammar**: commit types, subject and co-author trailer patterns
//! - **Message**: [`CommitMessage`], the structured form and its canonical rendering
//! - **Linter**: single forward pass over the lines of a message
//! - **Errors**: [`LintError`], the first violation found, with its line number
//!
//! ## Message Format
//!
//! ```text
//! <type>[(<scope>)]: <message>      subject, message <= 50 characters
//! <empty line>
//! <body line>*                      each <= 72 characters
//! <empty line>
//! Co-authored-by: <name> <<email>>  trailer block, nothing after it
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gitc_syntax::{CommitMessage, CommitType, LintConfig, LintError, lint};
//!
//! let message = CommitMessage::new(CommitType::Feat, "add linter")
//!     .with_scope("#42")
//!     .with_body_line("Checks the subject, body and trailers.")
//!     .with_co_author("Jane Doe <jane@example.com>");
//!
//! let config = LintConfig::default();
//! assert!(lint(&message.to_string(), &config).is_ok());
//! assert_eq!(lint("abc: test", &config), Err(LintError::SubjectFormatWrong));
//! ```

pub mod error;
pub mod grammar;
pub mod lint;
pub mod message;

pub use error::LintError;
pub use grammar::{CO_AUTHORED_BY, CommitType, Subject, UnknownCommitType, parse_subject};
pub use lint::{
    DEFAULT_BODY_LINE_LENGTH, DEFAULT_SUBJECT_LINE_LENGTH, LintConfig, Linter, lint,
};
pub use message::CommitMessage;
