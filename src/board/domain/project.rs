//! Project aggregate and its status bucket.

use super::{ParseStatusError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Status bucket a project currently belongs to.
///
/// Transitions are freely bidirectional: a finished project can be
/// dragged back to the active list. The only excluded transition is the
/// identity one, which the store treats as a notification-free no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Work is complete.
    Finished,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

/// A unit of planned work tracked by the board.
///
/// Field validation (non-empty text, bounded headcount) happens in
/// [`crate::board::validation`] before construction; the aggregate itself
/// only guards its identity and status invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project in the [`ProjectStatus::Active`] bucket.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people(&self) -> u32 {
        self.people
    }

    /// Returns the status bucket the project currently belongs to.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the project into another status bucket.
    ///
    /// Returns `true` when the status actually changed and `false` for
    /// the idempotent same-status case, so callers can skip redundant
    /// notifications.
    pub const fn move_to(&mut self, status: ProjectStatus) -> bool {
        if matches!(
            (self.status, status),
            (ProjectStatus::Active, ProjectStatus::Active)
                | (ProjectStatus::Finished, ProjectStatus::Finished)
        ) {
            return false;
        }
        self.status = status;
        true
    }
}
