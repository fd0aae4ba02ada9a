//! Settings for `gitc`.
//!
//! Values are merged from several sources, the first one that sets a value
//! wins:
//!
//! 1. command-line flags
//! 2. `GITC_*` environment variables (resolved by clap)
//! 3. local `.gitcrc` (or `.config/gitcrc`), searched upwards from the cwd
//! 4. global `~/.gitcrc`
//! 5. built-in defaults
//!
//! ```toml
//! # .gitcrc example
//! subject_line_length = 50
//! body_line_length = 72
//! prefill_scope_regex = "^feature/(?P<scope>[0-9]+)-"
//! issue_prefix = "GITC-"
//! verbose = false
//! ```
//!
//! A line length of `0` means "use the default".

use anyhow::{Context, Result};
use gitc_collect::CollectorConfig;
use gitc_syntax::{DEFAULT_BODY_LINE_LENGTH, DEFAULT_SUBJECT_LINE_LENGTH, LintConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// TOML-friendly intermediate representation (all fields optional).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    subject_line_length: Option<usize>,
    body_line_length: Option<usize>,
    prefill_scope_regex: Option<String>,
    issue_prefix: Option<String>,
    verbose: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum characters of the subject message.
    pub subject_line_length: usize,
    /// Maximum characters of a body line.
    pub body_line_length: usize,
    /// Pattern extracting the scope from the branch name.
    pub prefill_scope_regex: Option<String>,
    /// Prepended to a scope found in the branch name.
    pub issue_prefix: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_line_length: DEFAULT_SUBJECT_LINE_LENGTH,
            body_line_length: DEFAULT_BODY_LINE_LENGTH,
            prefill_scope_regex: None,
            issue_prefix: String::new(),
            verbose: false,
        }
    }
}

impl Config {
    /// Loads configuration by merging global and local `.gitcrc` files.
    ///
    /// Returns `Config::default()` if no config files are found.
    pub fn load(start_dir: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::find_global_config() {
            config.merge(Self::read_file(&global_path)?);
        }

        if let Some(local_path) = Self::find_local_config(start_dir) {
            config.merge(Self::read_file(&local_path)?);
        }

        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(toml_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml_str).context("Failed to parse config")?;
        let mut config = Self::default();
        config.merge(file);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn merge(&mut self, file: ConfigFile) {
        if let Some(length) = file.subject_line_length.filter(|length| *length > 0) {
            self.subject_line_length = length;
        }
        if let Some(length) = file.body_line_length.filter(|length| *length > 0) {
            self.body_line_length = length;
        }
        if file.prefill_scope_regex.is_some() {
            self.prefill_scope_regex = file.prefill_scope_regex;
        }
        if let Some(prefix) = file.issue_prefix {
            self.issue_prefix = prefix;
        }
        if let Some(verbose) = file.verbose {
            self.verbose = verbose;
        }
    }

    fn find_global_config() -> Option<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".gitcrc"))
            .filter(|p| p.is_file())
    }

    /// Walks up from `start_dir` looking for `.gitcrc` or `.config/gitcrc`.
    fn find_local_config(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
        let mut dir = start_dir.as_ref().to_path_buf();

        if let Ok(abs) = dir.canonicalize() {
            dir = abs;
        }

        let global = Self::find_global_config();

        loop {
            for candidate in [dir.join(".gitcrc"), dir.join(".config").join("gitcrc")] {
                if candidate.is_file() && Some(&candidate) != global.as_ref() {
                    return Some(candidate);
                }
            }

            if !dir.pop() {
                return None;
            }
        }
    }

    /// Merge CLI arguments (and their environment fallbacks) into config.
    pub fn merge_cli_args(
        &mut self,
        subject_line_length: Option<usize>,
        body_line_length: Option<usize>,
        prefill_scope_regex: Option<String>,
        issue_prefix: Option<String>,
        verbose: bool,
    ) {
        self.merge(ConfigFile {
            subject_line_length,
            body_line_length,
            prefill_scope_regex,
            issue_prefix,
            verbose: verbose.then_some(true),
        });
    }

    /// Limits for linting a message file.
    pub fn lint_config(&self) -> LintConfig {
        LintConfig::new()
            .with_subject_line_length(self.subject_line_length)
            .with_body_line_length(self.body_line_length)
            .with_trim_whitespace(true)
    }

    pub fn collector_config(&self) -> CollectorConfig {
        let mut config = CollectorConfig::new()
            .with_limits(self.lint_config())
            .with_issue_prefix(self.issue_prefix.clone())
            .with_verbose(self.verbose);
        config.prefill_scope_regex = self.prefill_scope_regex.clone();
        config
    }
}
