//! In-memory transfer channel for tests and headless hosts.

use crate::dnd::ports::{DataKind, DragEffect, TransferChannel};

/// Transfer channel backed by a plain in-process map.
///
/// Entries keep the order they were first set in, so `first_kind`
/// mirrors the platform behaviour of probing `types[0]`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransfer {
    entries: Vec<(DataKind, String)>,
    allowed_effect: Option<DragEffect>,
}

impl InMemoryTransfer {
    /// Creates an empty channel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            allowed_effect: None,
        }
    }

    /// Creates a channel already carrying one value, as a platform would
    /// present it to a drop handler.
    #[must_use]
    pub fn with_data(kind: DataKind, value: impl Into<String>) -> Self {
        let mut channel = Self::new();
        channel.set_data(kind, &value.into());
        channel
    }
}

impl TransferChannel for InMemoryTransfer {
    fn set_data(&mut self, kind: DataKind, value: &str) {
        for entry in &mut self.entries {
            if entry.0 == kind {
                entry.1 = value.to_owned();
                return;
            }
        }
        self.entries.push((kind, value.to_owned()));
    }

    fn data(&self, kind: DataKind) -> Option<String> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, value)| value.clone())
    }

    fn first_kind(&self) -> Option<DataKind> {
        self.entries.first().map(|(kind, _)| *kind)
    }

    fn set_allowed_effect(&mut self, effect: DragEffect) {
        self.allowed_effect = Some(effect);
    }

    fn allowed_effect(&self) -> Option<DragEffect> {
        self.allowed_effect
    }
}
