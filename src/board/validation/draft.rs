//! Candidate project input and the board's field rules.

use super::error::ValidationError;
use super::rules::{Constraint, check_number, check_text};

/// Constraints applied to the project title.
pub const TITLE_RULES: &[Constraint] = &[Constraint::Required];

/// Constraints applied to the project description.
pub const DESCRIPTION_RULES: &[Constraint] = &[Constraint::Required, Constraint::MinLength(5)];

/// Constraints applied to the assigned-people count.
pub const PEOPLE_RULES: &[Constraint] = &[Constraint::Min(1), Constraint::Max(5)];

/// Unvalidated project input as captured from a form.
///
/// The store trusts its callers, so this type is the gate: hosts build a
/// draft from raw form fields, call [`ProjectDraft::validate`], and only
/// feed the parts to [`crate::board::store::ProjectStore::add_project`]
/// on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    title: String,
    description: String,
    people: u32,
}

impl ProjectDraft {
    /// Creates a draft from raw form values.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    /// Checks every board field rule, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying every failed constraint
    /// across all fields, not just the first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for result in [
            check_text("title", &self.title, TITLE_RULES),
            check_text("description", &self.description, DESCRIPTION_RULES),
            check_number("people", u64::from(self.people), PEOPLE_RULES),
        ] {
            if let Err(error) = result {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    /// Splits the draft into the arguments `add_project` expects.
    #[must_use]
    pub fn into_parts(self) -> (String, String, u32) {
        (self.title, self.description, self.people)
    }
}
