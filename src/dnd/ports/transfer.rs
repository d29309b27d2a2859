//! Transfer-channel port: the platform drag/drop primitive.

use thiserror::Error;

/// Content kind a transfer channel can advertise for its payload.
///
/// Only the plain-text kind carries board payloads; the others exist so
/// targets can recognize and silently reject foreign drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// `text/plain` — the only kind the board protocol uses.
    PlainText,
    /// `text/uri-list`.
    UriList,
    /// `text/html`.
    Html,
}

impl DataKind {
    /// Returns the MIME representation used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::UriList => "text/uri-list",
            Self::Html => "text/html",
        }
    }
}

impl TryFrom<&str> for DataKind {
    type Error = ParseDataKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "text/plain" => Ok(Self::PlainText),
            "text/uri-list" => Ok(Self::UriList),
            "text/html" => Ok(Self::Html),
            _ => Err(ParseDataKindError(value.to_owned())),
        }
    }
}

/// Error returned while mapping a platform content kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized transfer content kind: {0}")]
pub struct ParseDataKindError(pub String);

/// Operation a drag source declares as allowed for the gesture.
///
/// The board always declares `Move`; targets surface it so the platform
/// can show the matching cursor affordance instead of a copy or link one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// The payload moves from source to target.
    Move,
    /// The payload is duplicated at the target.
    Copy,
    /// The target receives a reference to the payload.
    Link,
}

/// String-keyed payload channel between a drag source and a drop target.
///
/// This is the narrow slice of the platform primitive the board needs:
/// writing and reading one value per content kind, probing the first
/// advertised kind, and carrying the allowed-operation flag. Hosts adapt
/// their platform's drag-data object to this trait.
pub trait TransferChannel {
    /// Stores `value` under `kind`, replacing any previous value of that
    /// kind while keeping its advertised position.
    fn set_data(&mut self, kind: DataKind, value: &str);

    /// Returns the value stored under `kind`, if any.
    fn data(&self, kind: DataKind) -> Option<String>;

    /// Returns the first advertised content kind, if any.
    ///
    /// Targets probe this during drag-over to decide whether the drag is
    /// one of ours before touching the payload.
    fn first_kind(&self) -> Option<DataKind>;

    /// Declares the operation the source allows for this gesture.
    fn set_allowed_effect(&mut self, effect: DragEffect);

    /// Returns the declared allowed operation, if one was set.
    fn allowed_effect(&self) -> Option<DragEffect>;
}
