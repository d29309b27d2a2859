//! Error types for board domain parsing.

use thiserror::Error;

/// Error returned while parsing project statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing project identifiers from text.
///
/// Drag payloads arrive as plain text from an untrusted transfer channel,
/// so malformed identifier text is an expected input, not a fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed project identifier: {0}")]
pub struct ParseProjectIdError(pub String);
