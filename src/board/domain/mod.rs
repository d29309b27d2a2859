//! Domain model for the project board.
//!
//! The board domain models project identity, the two-bucket status
//! lifecycle, and the parse boundaries for values that cross the
//! drag-and-drop transfer channel as text.

mod error;
mod ids;
mod project;

pub use error::{ParseProjectIdError, ParseStatusError};
pub use ids::ProjectId;
pub use project::{Project, ProjectStatus};
