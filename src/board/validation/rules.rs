//! Constraint evaluation over candidate form input.
//!
//! Rules are pure functions: they take a field name, a candidate value,
//! and the constraints recognized for that value's shape, and collect
//! every failure instead of stopping at the first one.

use super::error::ValidationError;

/// A single recognized validation constraint.
///
/// Length constraints apply to text values and counts are in characters,
/// not bytes. Range constraints apply to numeric values. Constraints that
/// do not fit the value's shape are ignored, so one constraint set can
/// describe a whole form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must be present and non-blank.
    Required,
    /// Minimum character count for text values.
    MinLength(usize),
    /// Maximum character count for text values.
    MaxLength(usize),
    /// Minimum for numeric values.
    Min(u64),
    /// Maximum for numeric values.
    Max(u64),
}

/// Evaluates all applicable constraints against a text value.
///
/// # Errors
///
/// Returns every failed constraint, combined with
/// [`ValidationError::multiple`] when more than one fails.
pub fn check_text(
    field: &'static str,
    value: &str,
    constraints: &[Constraint],
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();
    let mut errors = Vec::new();

    for constraint in constraints {
        match *constraint {
            Constraint::Required if trimmed.is_empty() => {
                errors.push(ValidationError::MissingValue { field });
            }
            Constraint::MinLength(min) if length < min => {
                errors.push(ValidationError::TooShort {
                    field,
                    min,
                    actual: length,
                });
            }
            Constraint::MaxLength(max) if length > max => {
                errors.push(ValidationError::TooLong {
                    field,
                    max,
                    actual: length,
                });
            }
            _ => {}
        }
    }

    collect(errors)
}

/// Evaluates all applicable constraints against a numeric value.
///
/// # Errors
///
/// Returns every failed constraint, combined with
/// [`ValidationError::multiple`] when more than one fails.
pub fn check_number(
    field: &'static str,
    value: u64,
    constraints: &[Constraint],
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    for constraint in constraints {
        match *constraint {
            Constraint::Min(min) if value < min => {
                errors.push(ValidationError::BelowMinimum {
                    field,
                    min,
                    actual: value,
                });
            }
            Constraint::Max(max) if value > max => {
                errors.push(ValidationError::AboveMaximum {
                    field,
                    max,
                    actual: value,
                });
            }
            _ => {}
        }
    }

    collect(errors)
}

fn collect(errors: Vec<ValidationError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::multiple(errors))
    }
}
