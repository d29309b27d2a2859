//! Unit tests for board state management.

mod validation_tests;
