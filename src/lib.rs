//! Corkboard: a reactive project-board core.
//!
//! This crate provides the state engine behind a two-list task board:
//! projects are created into an active bucket and dragged between the
//! active and finished lists, with every subscribed view receiving a
//! fresh snapshot after each change.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and status rules with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the platform drag/drop
//!   primitive and the view hooks
//! - **Adapters**: Concrete implementations of ports (in-memory transfer
//!   channel)
//!
//! # Modules
//!
//! - [`board`]: Project store, status transitions, and input validation
//! - [`dnd`]: Drag-and-drop coordination protocol
//! - [`logging`]: Log bootstrap for host applications

pub mod board;
pub mod dnd;
pub mod logging;
