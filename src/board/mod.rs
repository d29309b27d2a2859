//! Project-board state management.
//!
//! This module owns the reactive project store: the single source of
//! truth for board state, subscriber notification with snapshot
//! isolation, and the two-bucket status transition rules. Form-input
//! validation lives alongside it as the gate callers run before handing
//! values to the store.
//!
//! - Domain types in [`domain`]
//! - Stores in [`store`]
//! - Input validation in [`validation`]

pub mod domain;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;
