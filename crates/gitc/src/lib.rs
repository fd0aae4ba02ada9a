pub use gitc_collect::{Collector, CollectorConfig, CollectError, Prompter, TerminalPrompter};
pub use gitc_syntax::{CommitMessage, CommitType, LintConfig, LintError, Linter, lint};
pub use gitc_git;

pub mod prelude {
    pub use crate::{Collector, CollectorConfig, TerminalPrompter, lint};
    pub use crate::{CommitMessage, CommitType, LintConfig, LintError, Linter};
}
