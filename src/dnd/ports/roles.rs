//! Capability ports for drag sources and drop targets.
//!
//! Visual components gain drag-and-drop behaviour by implementing these
//! traits; dispatch is through the trait object a host registers with its
//! event plumbing, never through a concrete view type.

use super::transfer::TransferChannel;

/// Verdict a drop target returns from a drag-over probe.
///
/// `Accept` tells the host to suppress the platform's default
/// reject-drop behaviour; `Ignore` leaves the default in place, which is
/// the silent-rejection path for foreign payload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverVerdict {
    /// The target can take this drag; suppress the platform default.
    Accept,
    /// Not a payload this target understands; do nothing.
    Ignore,
}

/// Capability of a visual item that can begin a drag gesture.
pub trait DragSource {
    /// Publishes the dragged entity's payload into the channel and
    /// declares the allowed operation. Must not mutate board state; the
    /// state change happens only on a successful drop at the target.
    fn on_drag_start(&self, channel: &mut dyn TransferChannel);

    /// Cleanup hook fired when the gesture ends, dropped or abandoned.
    /// No board mutation belongs here.
    fn on_drag_end(&self, channel: &dyn TransferChannel) {
        let _ = channel;
    }
}

/// Capability of a visual list that can accept a drag.
pub trait DropTarget {
    /// Inspects the channel's advertised kind and decides whether this
    /// drag is acceptable, lighting the droppable affordance when it is.
    fn on_drag_over(&mut self, channel: &dyn TransferChannel) -> DragOverVerdict;

    /// Translates a completed drop into a board mutation and clears the
    /// droppable affordance whether or not anything actually moved.
    fn on_drop(&mut self, channel: &dyn TransferChannel);

    /// Clears the droppable affordance; fired when the gesture leaves
    /// the target without dropping.
    fn on_drag_leave(&mut self);
}

/// View hook through which a drop target shows that it can take the
/// current drag. The rendering itself stays outside the crate.
pub trait DropAffordance {
    /// Turns the droppable visual on or off.
    fn set_droppable(&mut self, droppable: bool);
}
