//! # gitc-cli
//!
//! Command-line interface for writing conventional commit messages.
//!
//! Without arguments it asks for the parts of a commit message and commits
//! it. Installed as (or linked to) `.git/hooks/commit-msg`, or called with
//! `--lint <file>`, it validates a message file instead.

mod config;
mod errors;

use anyhow::{Result, bail};
use clap::Parser;
use colored::*;
use gitc_collect::{Collector, TerminalPrompter};
use gitc_syntax::Linter;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{Level, info};

use config::Config;
use errors::{enhance_error, exit_code, lint_diagnostic};

/// Name fragment of the executable that selects hook mode.
const HOOK_NAME: &str = "commit-msg";
/// Runs before the editor opens, when the file holds only the template.
const PREPARE_HOOK_NAME: &str = "prepare-commit-msg";

const EXIT_INVALID: i32 = 1;
const EXIT_UNREADABLE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "gitc")]
#[command(about = "Compose, commit and lint conventional commit messages", long_about = None)]
#[command(version)]
struct Cli {
    /// Stage all changes before committing
    #[arg(long, env = "GITC_ADD")]
    add: bool,

    /// Push after committing
    #[arg(long, env = "GITC_PUSH")]
    push: bool,

    /// Stage changes interactively with git add --patch
    #[arg(long, env = "GITC_PATCH")]
    patch: bool,

    /// Print the message instead of committing
    #[arg(long, env = "GITC_PRINT")]
    print: bool,

    /// Log branch detection and the collected message
    #[arg(short, long, env = "GITC_VERBOSE")]
    verbose: bool,

    /// Validate a commit message file and exit
    #[arg(long, value_name = "FILE")]
    lint: Option<PathBuf>,

    /// Maximum characters of the subject message (0 for the default)
    #[arg(long, value_name = "N", env = "GITC_SUBJECT_LINE_LENGTH")]
    subject_line_length: Option<usize>,

    /// Maximum characters of a body line (0 for the default)
    #[arg(long, value_name = "N", env = "GITC_BODY_LINE_LENGTH")]
    body_line_length: Option<usize>,

    /// Regex with a named group `scope` applied to the branch name
    #[arg(long, value_name = "REGEX", env = "GITC_PREFILL_SCOPE_REGEX")]
    prefill_scope_regex: Option<String>,

    /// Prefix for a scope taken from the branch name
    #[arg(long, value_name = "PREFIX", env = "GITC_ISSUE_PREFIX")]
    issue_prefix: Option<String>,

    /// Commit message file, passed by git to the commit-msg hook
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Lint(PathBuf),
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load(".").unwrap_or_else(|e| {
        eprintln!("{} Failed to load config: {:#}", "⚠".yellow().bold(), e);
        Config::default()
    });
    config.merge_cli_args(
        cli.subject_line_length,
        cli.body_line_length,
        cli.prefill_scope_regex.clone(),
        cli.issue_prefix.clone(),
        cli.verbose,
    );

    init_tracing(config.verbose);

    let program = std::env::args_os().next();
    let code = match determine_mode(&cli, is_hook_invocation(program.as_deref())) {
        Ok(Mode::Lint(path)) => lint_file(&path, &config),
        Ok(Mode::Interactive) => match run_interactive(&cli, &config) {
            Ok(()) => 0,
            Err(e) => {
                enhance_error(&e).display();
                exit_code(&e)
            }
        },
        Err(e) => {
            enhance_error(&e).display();
            EXIT_INVALID
        }
    };

    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// True when gitc runs under a hook name such as `.git/hooks/commit-msg`.
///
/// `prepare-commit-msg` does not count.
///
/// `argv[0]` is checked first since `current_exe` resolves the symlink a
/// linked hook is usually installed as.
fn is_hook_invocation(program: Option<&OsStr>) -> bool {
    let named_hook = |path: &Path| {
        path.file_name().is_some_and(|name| {
            let name = name.to_string_lossy();
            name.contains(HOOK_NAME) && !name.contains(PREPARE_HOOK_NAME)
        })
    };

    if program.is_some_and(|program| named_hook(Path::new(program))) {
        return true;
    }

    std::env::current_exe().is_ok_and(|exe| named_hook(&exe))
}

fn determine_mode(cli: &Cli, hook: bool) -> Result<Mode> {
    if let Some(path) = &cli.lint {
        return Ok(Mode::Lint(path.clone()));
    }

    match (&cli.file, hook) {
        (Some(file), true) => Ok(Mode::Lint(file.clone())),
        (None, true) => bail!("{} hook expects the commit message file as argument", HOOK_NAME),
        (Some(file), false) => bail!(
            "Unexpected argument '{}', use --lint <FILE> to check a message file",
            file.display()
        ),
        (None, false) => Ok(Mode::Interactive),
    }
}

/// Validates a message file, returning the process exit code.
fn lint_file(path: &Path, config: &Config) -> i32 {
    let message = match gitc_git::read_message_file(path) {
        Ok(message) => message,
        Err(e) => {
            enhance_error(&e)
                .with_help("git passes the message file as the first argument to commit-msg")
                .display();
            return EXIT_UNREADABLE;
        }
    };

    let message = message.trim();
    match Linter::new(config.lint_config()).lint(message) {
        Ok(()) => {
            info!(file = %path.display(), "commit message is valid");
            0
        }
        Err(err) => {
            lint_diagnostic(&err, &path.display().to_string(), message).display();
            EXIT_INVALID
        }
    }
}

fn run_interactive(cli: &Cli, config: &Config) -> Result<()> {
    let message = {
        let mut collector = Collector::new(
            config.collector_config(),
            TerminalPrompter::stdio(),
            gitc_git::current_branch,
        )?;
        collector.collect()?.to_string()
    };

    if cli.print {
        println!("{}", message);
        return Ok(());
    }

    if cli.add {
        gitc_git::stage_all()?;
    }
    if cli.patch {
        gitc_git::stage_patch()?;
    }

    gitc_git::commit(&message)?;
    println!("{} {}", "✓".green().bold(), "Committed".green().bold());

    if cli.push {
        gitc_git::push()?;
        println!("{} {}", "✓".green().bold(), "Pushed".green().bold());
    }

    Ok(())
}
