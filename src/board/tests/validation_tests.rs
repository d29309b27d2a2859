//! Unit tests for form-input validation rules.

use crate::board::validation::{
    Constraint, ProjectDraft, ValidationError, check_number, check_text,
};
use rstest::rstest;

#[rstest]
#[case("something", true)]
#[case("  padded  ", true)]
#[case("", false)]
#[case("   ", false)]
fn required_accepts_non_blank_text(#[case] value: &str, #[case] expected: bool) {
    let result = check_text("field", value, &[Constraint::Required]);
    assert_eq!(result.is_ok(), expected);
}

#[rstest]
#[case("hello", 5, true)]
#[case("hell", 5, false)]
#[case("  hello  ", 5, true)]
fn min_length_counts_trimmed_characters(
    #[case] value: &str,
    #[case] min: usize,
    #[case] expected: bool,
) {
    let result = check_text("field", value, &[Constraint::MinLength(min)]);
    assert_eq!(result.is_ok(), expected);
}

#[rstest]
#[case("short", 10, true)]
#[case("far too long here", 10, false)]
fn max_length_rejects_oversized_text(#[case] value: &str, #[case] max: usize, #[case] expected: bool) {
    let result = check_text("field", value, &[Constraint::MaxLength(max)]);
    assert_eq!(result.is_ok(), expected);
}

#[rstest]
#[case(1, true)]
#[case(0, false)]
#[case(5, true)]
#[case(6, false)]
fn people_range_is_one_to_five(#[case] value: u64, #[case] expected: bool) {
    let result = check_number("people", value, &[Constraint::Min(1), Constraint::Max(5)]);
    assert_eq!(result.is_ok(), expected);
}

#[rstest]
fn range_constraints_are_ignored_for_text() {
    let result = check_text("field", "text", &[Constraint::Min(1), Constraint::Max(5)]);
    assert!(result.is_ok());
}

#[rstest]
fn length_constraints_are_ignored_for_numbers() {
    let result = check_number("field", 3, &[Constraint::MinLength(5)]);
    assert!(result.is_ok());
}

#[rstest]
fn blank_value_fails_required_and_min_length_together() {
    let result = check_text(
        "description",
        "",
        &[Constraint::Required, Constraint::MinLength(5)],
    );

    match result {
        Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected combined failure, got {other:?}"),
    }
}

#[rstest]
fn valid_draft_passes() {
    let draft = ProjectDraft::new("Board rework", "Split the backlog column", 3);
    assert!(draft.validate().is_ok());
}

#[rstest]
fn draft_collects_failures_across_fields() {
    let draft = ProjectDraft::new("", "tiny", 0);

    let error = draft.validate().expect_err("draft must be rejected");
    assert!(error.is_multiple());
    match error {
        ValidationError::Multiple(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected three field failures, got {other:?}"),
    }
}

#[rstest]
fn single_field_failure_is_not_wrapped() {
    let draft = ProjectDraft::new("Fine title", "Long enough description", 9);

    let error = draft.validate().expect_err("people count must be rejected");
    assert_eq!(
        error,
        ValidationError::AboveMaximum {
            field: "people",
            max: 5,
            actual: 9,
        }
    );
}

#[rstest]
fn draft_into_parts_preserves_fields() {
    let draft = ProjectDraft::new("Title", "Description text", 4);

    let (title, description, people) = draft.into_parts();
    assert_eq!(title, "Title");
    assert_eq!(description, "Description text");
    assert_eq!(people, 4);
}
