//! # gitc Collect
//!
//! Interactive construction of commit messages.
//!
//! ## Overview
//!
//! - **Collector**: asks for type, scope, message, body and co-authors
//! - **Prompter**: the input seam, with a line-based terminal implementation
//! - **BranchSource**: the branch name used to prefill the scope
//!
//! The answers are validated with the grammar from `gitc-syntax`, so the
//! collected message always lints clean.
//!
//! ## Example
//!
//! ```rust
//! use gitc_collect::{Collector, CollectorConfig, TerminalPrompter};
//! use gitc_syntax::{LintConfig, lint};
//! use std::io::Cursor;
//!
//! let answers = "fix\n#7\nhandle empty input\n\n\n";
//! let prompter = TerminalPrompter::new(Cursor::new(answers), Vec::new());
//! let branch = || -> anyhow::Result<String> { Ok("main".to_string()) };
//!
//! let mut collector = Collector::new(CollectorConfig::default(), prompter, branch).unwrap();
//! let message = collector.collect().unwrap().to_string();
//!
//! assert_eq!(message, "fix(#7): handle empty input");
//! assert!(lint(&message, &LintConfig::default()).is_ok());
//! ```

pub mod collector;
pub mod error;
pub mod prompt;

pub use collector::{BranchSource, Collector, CollectorConfig};
pub use error::CollectError;
pub use prompt::{PromptError, Prompter, TerminalPrompter};
