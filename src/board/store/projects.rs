//! The authoritative project store.

use crate::board::domain::{Project, ProjectId, ProjectStatus};
use crate::board::store::SubscribableStore;
use log::debug;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// Single source of truth for all project state on one board.
///
/// A host constructs exactly one store per board and hands cloned handles
/// to every view component; clones share the same underlying collection
/// and subscriber list. All mutation routes through this type so every
/// subscriber observes one serialized sequence of snapshots.
///
/// The store performs no input validation. Callers gate new-project input
/// through [`crate::board::validation::ProjectDraft`] first; by the time
/// `add_project` runs, its preconditions hold.
pub struct ProjectStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<SubscribableStore<Project>>,
    clock: Arc<C>,
}

impl<C> Clone for ProjectStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> ProjectStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store using the given clock for creation
    /// timestamps.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(SubscribableStore::new()),
            clock,
        }
    }

    /// Registers a subscriber for board snapshots.
    ///
    /// Subscribers fire synchronously, in registration order, within
    /// every mutating call that changes state.
    pub fn subscribe(&self, subscriber: impl Fn(Vec<Project>) + Send + Sync + 'static) {
        self.state.subscribe(subscriber);
    }

    /// Returns an owned copy of the current project collection, in
    /// insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.state.snapshot()
    }

    /// Returns the number of projects on the board.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.state.snapshot().len()
    }

    /// Adds a new project in the active bucket and notifies subscribers.
    ///
    /// Generates a fresh identifier, stamps the creation time, and
    /// appends at the end of the collection; insertion order is the
    /// board's display order and is never reshuffled afterwards. Returns
    /// the created project so the caller can render it without waiting
    /// for its own subscription to fire.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let project = Project::new(title, description, people, &*self.clock);
        let created = project.clone();
        self.state.update(move |items| {
            items.push(project);
            true
        });
        debug!("created project {}", created.id());
        created
    }

    /// Moves a project to another status bucket and notifies subscribers.
    ///
    /// Two inputs are swallowed as notification-free no-ops rather than
    /// errors: an unknown identifier (a forged or stale drag payload) and
    /// a move to the status the project is already in.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) {
        self.state.update(|items| {
            items.iter_mut().find(|p| p.id() == id).map_or_else(
                || {
                    debug!("ignoring move of unknown project {id}");
                    false
                },
                |project| {
                    let changed = project.move_to(new_status);
                    if changed {
                        debug!("moved project {id} to {}", new_status.as_str());
                    } else {
                        debug!("project {id} already {}; skipping", new_status.as_str());
                    }
                    changed
                },
            )
        });
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}
