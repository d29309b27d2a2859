//! Drag-and-drop coordination protocol.
//!
//! Draggable items and droppable lists agree on what moved where through
//! a narrow transfer channel carrying the project identifier as plain
//! text. The module follows hexagonal architecture:
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Board-facing bindings in [`services`]
//!
//! A drop onto a status list is the sole place a drag gesture becomes a
//! store mutation; abandoned gestures leave board state untouched.

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
