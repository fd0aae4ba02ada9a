use gitc_syntax::{CommitMessage, CommitType, LintConfig, LintError, Linter, lint};

fn lint_default(message: &str) -> Result<(), LintError> {
    lint(message, &LintConfig::default())
}

#[test]
fn test_empty_message() {
    assert_eq!(lint_default(""), Err(LintError::NoMessage));
}

#[test]
fn test_whitespace_only_message_when_trimming() {
    let config = LintConfig::default().with_trim_whitespace(true);
    assert_eq!(lint(" \n\t\n", &config), Err(LintError::NoMessage));
}

#[test]
fn test_subject_line_without_issue() {
    assert_eq!(lint_default("feat: test"), Ok(()));
}

#[test]
fn test_subject_line_with_issue() {
    assert_eq!(lint_default("feat(#1): test"), Ok(()));
}

#[test]
fn test_every_commit_type_is_accepted() {
    for kind in CommitType::ALL {
        let message = format!("{}: test", kind);
        assert_eq!(lint_default(&message), Ok(()), "type {}", kind);
    }
}

#[test]
fn test_subject_line_with_wrong_type() {
    assert_eq!(lint_default("abc: test"), Err(LintError::SubjectFormatWrong));
}

#[test]
fn test_empty_subject_line() {
    assert_eq!(lint_default("\n\nbody"), Err(LintError::EmptySubjectLine));
}

#[test]
fn test_subject_line_too_long() {
    let err = lint_default("feat: 012345678901234567890123456789012345678901234567891").unwrap_err();
    assert_eq!(err, LintError::SubjectTooLong { length: 51, max: 50 });
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_subject_line_length_boundary() {
    let at_limit = format!("fix(scope-is-not-counted): {}", "a".repeat(50));
    assert_eq!(lint_default(&at_limit), Ok(()));

    let over_limit = format!("fix: {}", "a".repeat(51));
    assert_eq!(
        lint_default(&over_limit),
        Err(LintError::SubjectTooLong { length: 51, max: 50 })
    );
}

#[test]
fn test_custom_subject_line_length() {
    let config = LintConfig::default().with_subject_line_length(10);
    assert_eq!(lint("feat: 0123456789", &config), Ok(()));
    assert_eq!(
        lint("feat: 01234567890", &config),
        Err(LintError::SubjectTooLong { length: 11, max: 10 })
    );
}

#[test]
fn test_subject_length_counts_characters_not_bytes() {
    let message = format!("feat: {}", "ü".repeat(50));
    assert_eq!(lint_default(&message), Ok(()));
}

#[test]
fn test_missing_body() {
    let err = lint_default("feat: a\n").unwrap_err();
    assert_eq!(err, LintError::MissingBody);
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_trailing_newline_is_trimmed_when_configured() {
    let config = LintConfig::default().with_trim_whitespace(true);
    assert_eq!(lint("feat: bla\n", &config), Ok(()));
    assert_eq!(lint("feat: bla\n\nbody text\n\n", &config), Ok(()));
}

#[test]
fn test_body() {
    assert_eq!(lint_default("feat: a\n\nsome body\nmore body"), Ok(()));
}

#[test]
fn test_body_line_too_long_one_liner() {
    let message = format!("feat: a\n\n{}", "0123456789".repeat(8));
    assert_eq!(
        lint_default(&message),
        Err(LintError::BodyLineTooLong {
            line: 3,
            length: 80,
            max: 72
        })
    );
}

#[test]
fn test_body_line_too_long_reports_offending_line() {
    let message = format!("feat: a\n\n{}\n{}", "a".repeat(72), "b".repeat(80));
    let err = lint_default(&message).unwrap_err();
    assert_eq!(
        err,
        LintError::BodyLineTooLong {
            line: 4,
            length: 80,
            max: 72
        }
    );
    assert_eq!(err.line(), Some(4));
}

#[test]
fn test_custom_body_line_length() {
    let config = LintConfig::default().with_body_line_length(100);
    let message = format!("feat: a\n\n{}", "a".repeat(100));
    assert_eq!(lint(&message, &config), Ok(()));
}

#[test]
fn test_co_authored_by_wrong_after_body() {
    let message = format!("feat: a\n\n0123456789\n\n{}", "0123456789".repeat(8));
    assert_eq!(
        lint_default(&message),
        Err(LintError::CoAuthorFormatWrong { line: 5 })
    );
}

#[test]
fn test_co_authored_by_after_body() {
    assert_eq!(
        lint_default("feat: a\n\n0123456789\n\nCo-authored-by: name <mail@test.de>"),
        Ok(())
    );
}

#[test]
fn test_co_authored_by_without_body() {
    assert_eq!(
        lint_default("feat: a\n\nCo-authored-by: name <mail@test.de>"),
        Ok(())
    );
}

#[test]
fn test_co_authored_format_wrong() {
    assert_eq!(
        lint_default("feat: a\n\nCo-authored-by: name <mail@test.de>\nabcd"),
        Err(LintError::CoAuthorFormatWrong { line: 4 })
    );
}

#[test]
fn test_multiple_co_authors() {
    assert_eq!(
        lint_default(
            "feat: a\n\nCo-authored-by: name <mail@test.de>\nCo-authored-by: name 2 <second@test.de>"
        ),
        Ok(())
    );
}

#[test]
fn test_no_line_after_co_authored() {
    assert_eq!(
        lint_default("feat: a\n\nCo-authored-by: name <mail@test.de>\n\nabcd"),
        Err(LintError::NoContentAfterCoAuthored { line: 4 })
    );
}

#[test]
fn test_co_author_without_keyword() {
    assert_eq!(
        lint_default("feat: abc\n\nabc\n\nname <email@test.de>"),
        Err(LintError::CoAuthorFormatWrong { line: 5 })
    );
}

#[test]
fn test_body_line_matching_trailer_opens_trailer_section() {
    assert_eq!(
        lint_default("feat: a\n\nintro\nCo-authored-by: name <mail@test.de>"),
        Ok(())
    );
    assert_eq!(
        lint_default("feat: a\n\nintro\nCo-authored-by: name <mail@test.de>\nmore body"),
        Err(LintError::CoAuthorFormatWrong { line: 5 })
    );
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        lint_default("feat: a\r\n\r\nbody\r\n\r\nCo-authored-by: name <mail@test.de>"),
        Ok(())
    );
}

#[test]
fn test_lint_is_idempotent() {
    let linter = Linter::default();
    let messages = [
        "feat: a",
        "feat: a\n",
        "feat: a\n\nCo-authored-by: name <mail@test.de>\nabcd",
    ];
    for message in messages {
        assert_eq!(linter.lint(message), linter.lint(message));
    }
}

#[test]
fn test_rendered_messages_pass_lint() {
    let messages = [
        CommitMessage::new(CommitType::Feat, "abc"),
        CommitMessage::new(CommitType::Feat, "abc").with_scope("#1"),
        CommitMessage::new(CommitType::Feat, "abc").with_body_line("abc"),
        CommitMessage::new(CommitType::Feat, "abc")
            .with_body_line("abc")
            .with_co_author("name <email@test.de>"),
        CommitMessage::new(CommitType::Other, "abc").with_co_author("name <email@test.de>"),
    ];
    for message in messages {
        assert_eq!(lint_default(&message.to_string()), Ok(()), "{}", message);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(LintError::NoMessage.to_string(), "no commit message provided");
    assert_eq!(
        LintError::BodyLineTooLong {
            line: 4,
            length: 80,
            max: 72
        }
        .to_string(),
        "body line 4 is too long (80 characters, max 72)"
    );
    assert_eq!(LintError::NoMessage.line(), None);
}
