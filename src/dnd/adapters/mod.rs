//! Adapter implementations of the drag-and-drop ports.

mod memory;

pub use memory::InMemoryTransfer;
