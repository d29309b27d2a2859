//! Drag-source binding for a single project card.

use crate::board::domain::ProjectId;
use crate::dnd::ports::{DataKind, DragEffect, DragSource, TransferChannel};
use log::debug;

/// Drag source for one rendered project item.
///
/// The card carries only the project identifier; everything else about
/// the project is re-derived from the store by whoever handles the drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    project_id: ProjectId,
}

impl ProjectCard {
    /// Creates a drag source for the given project.
    #[must_use]
    pub const fn new(project_id: ProjectId) -> Self {
        Self { project_id }
    }

    /// Returns the project this card represents.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }
}

impl DragSource for ProjectCard {
    fn on_drag_start(&self, channel: &mut dyn TransferChannel) {
        channel.set_data(DataKind::PlainText, &self.project_id.to_string());
        channel.set_allowed_effect(DragEffect::Move);
        debug!("drag started for project {}", self.project_id);
    }
}
