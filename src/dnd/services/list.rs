//! Drop-target binding for one status list.

use crate::board::domain::{ProjectId, ProjectStatus};
use crate::board::store::ProjectStore;
use crate::dnd::ports::{DataKind, DragOverVerdict, DropAffordance, DropTarget, TransferChannel};
use log::debug;
use mockable::{Clock, DefaultClock};

/// Drop target for the list rendering one status bucket.
///
/// Each list is bound to a fixed status at construction; a drop onto it
/// always means "move the dragged project into this bucket". The store
/// handle is a clone of the board's single authoritative store, and the
/// affordance is the view hook for the droppable highlight.
pub struct StatusList<A, C = DefaultClock>
where
    A: DropAffordance,
    C: Clock + Send + Sync,
{
    status: ProjectStatus,
    store: ProjectStore<C>,
    affordance: A,
}

impl<A, C> StatusList<A, C>
where
    A: DropAffordance,
    C: Clock + Send + Sync,
{
    /// Creates a drop target that moves dropped projects into `status`.
    #[must_use]
    pub const fn new(status: ProjectStatus, store: ProjectStore<C>, affordance: A) -> Self {
        Self {
            status,
            store,
            affordance,
        }
    }

    /// Returns the status bucket this list represents.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }
}

impl<A, C> DropTarget for StatusList<A, C>
where
    A: DropAffordance,
    C: Clock + Send + Sync,
{
    fn on_drag_over(&mut self, channel: &dyn TransferChannel) -> DragOverVerdict {
        if channel.first_kind() == Some(DataKind::PlainText) {
            self.affordance.set_droppable(true);
            DragOverVerdict::Accept
        } else {
            debug!(
                "{} list ignoring drag-over of foreign kind",
                self.status.as_str()
            );
            DragOverVerdict::Ignore
        }
    }

    fn on_drop(&mut self, channel: &dyn TransferChannel) {
        // The affordance is cleared on every path; a stale or forged
        // payload must not leave the list highlighted.
        if let Some(payload) = channel.data(DataKind::PlainText) {
            match payload.parse::<ProjectId>() {
                Ok(id) => self.store.move_project(id, self.status),
                Err(error) => debug!("discarding drop payload: {error}"),
            }
        }
        self.affordance.set_droppable(false);
    }

    fn on_drag_leave(&mut self) {
        self.affordance.set_droppable(false);
    }
}
