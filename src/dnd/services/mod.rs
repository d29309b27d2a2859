//! Concrete drag-and-drop bindings for board components.

mod card;
mod list;

pub use card::ProjectCard;
pub use list::StatusList;
