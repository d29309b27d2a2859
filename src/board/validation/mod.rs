//! Form-input validation for new projects.
//!
//! The store itself never validates; these rules run at the form
//! boundary, before anything reaches
//! [`crate::board::store::ProjectStore`]. Rules collect all failures
//! rather than failing fast so a form can surface every problem at once.

mod draft;
mod error;
pub mod rules;

pub use draft::{DESCRIPTION_RULES, PEOPLE_RULES, ProjectDraft, TITLE_RULES};
pub use error::ValidationError;
pub use rules::{Constraint, check_number, check_text};
