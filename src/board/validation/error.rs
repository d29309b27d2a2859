//! Error types for form-input validation.

use thiserror::Error;

/// Errors that can occur while validating candidate project input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("{field} is required")]
    MissingValue {
        /// The field the failure applies to.
        field: &'static str,
    },

    /// A text field is shorter than its minimum length.
    #[error("{field} must be at least {min} characters, got {actual}")]
    TooShort {
        /// The field the failure applies to.
        field: &'static str,
        /// The minimum accepted character count.
        min: usize,
        /// The actual character count.
        actual: usize,
    },

    /// A text field exceeds its maximum length.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        /// The field the failure applies to.
        field: &'static str,
        /// The maximum accepted character count.
        max: usize,
        /// The actual character count.
        actual: usize,
    },

    /// A numeric field is below its minimum value.
    #[error("{field} must be at least {min}, got {actual}")]
    BelowMinimum {
        /// The field the failure applies to.
        field: &'static str,
        /// The minimum accepted value.
        min: u64,
        /// The actual value.
        actual: u64,
    },

    /// A numeric field is above its maximum value.
    #[error("{field} must be at most {max}, got {actual}")]
    AboveMaximum {
        /// The field the failure applies to.
        field: &'static str,
        /// The maximum accepted value.
        max: u64,
        /// The actual value.
        actual: u64,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines validation errors into a single error.
    ///
    /// A single error is returned directly rather than wrapped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when called with an empty vector, as that
    /// indicates a logic error in the caller. Release builds fall back to
    /// a generic missing-value error.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::MissingValue { field: "input" }
            }
            1 => errors
                .into_iter()
                .next()
                .unwrap_or(Self::MissingValue { field: "input" }),
            _ => Self::Multiple(errors),
        }
    }

    /// Returns `true` if this error bundles multiple failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }
}
