//! Unit tests for the drag-and-drop protocol.

mod list_tests;
