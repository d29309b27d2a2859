//! Port contracts for the drag-and-drop protocol.

mod roles;
mod transfer;

pub use roles::{DragOverVerdict, DragSource, DropAffordance, DropTarget};
pub use transfer::{DataKind, DragEffect, ParseDataKindError, TransferChannel};
