use anyhow::Result;
use gitc_git::{ProcessFailed, git_capture, read_message_file};
use gitc_syntax::{LintConfig, lint};
use std::fs;

#[test]
fn test_read_message_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(
        &path,
        "feat(#3): read files\n\nbody line\n# Lines starting with '#' will be ignored\n",
    )?;

    let message = read_message_file(&path)?;
    assert_eq!(message, "feat(#3): read files\n\nbody line\n");
    Ok(())
}

#[test]
fn test_read_verbose_message_file_drops_diff() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("COMMIT_EDITMSG");
    let diff_line = format!("+{}", "x".repeat(100));
    fs::write(
        &path,
        format!(
            "feat: a\n\nCo-authored-by: x <x@y.de>\n\n\
             # Please enter the commit message for your changes.\n\
             # ------------------------ >8 ------------------------\n\
             # Do not modify or remove the line above.\n\
             diff --git a/f b/f\n\
             index 0000000..1111111 100644\n\
             {}\n",
            diff_line
        ),
    )?;

    let message = read_message_file(&path)?;
    assert_eq!(message, "feat: a\n\nCo-authored-by: x <x@y.de>\n");

    let config = LintConfig::new().with_trim_whitespace(true);
    assert_eq!(lint(&message, &config), Ok(()));
    Ok(())
}

#[test]
fn test_read_missing_message_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");

    let err = read_message_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read commit message file"));
    assert!(err.downcast_ref::<ProcessFailed>().is_none());
}

#[test]
fn test_failing_git_command_reports_exit_code() {
    // An unknown subcommand makes git exit non-zero; skip when git is absent.
    match git_capture(&["gitc-no-such-subcommand"]) {
        Ok(_) => panic!("unknown subcommand should fail"),
        Err(err) => {
            if let Some(failed) = err.downcast_ref::<ProcessFailed>() {
                assert_eq!(failed.args, vec!["gitc-no-such-subcommand".to_string()]);
                assert!(matches!(failed.code, Some(code) if code != 0));
            }
        }
    }
}
