//! Unit tests for the status-list drop target.

use crate::board::domain::{Project, ProjectId, ProjectStatus};
use crate::board::store::ProjectStore;
use crate::dnd::adapters::InMemoryTransfer;
use crate::dnd::ports::{DataKind, DragOverVerdict, DropAffordance, DropTarget};
use crate::dnd::services::StatusList;
use mockall::mock;
use rstest::{fixture, rstest};
use std::sync::{Arc, Mutex};

mock! {
    Affordance {}

    impl DropAffordance for Affordance {
        fn set_droppable(&mut self, droppable: bool);
    }
}

/// Affordance fake recording every toggle it receives.
#[derive(Debug, Clone, Default)]
struct RecordingAffordance {
    toggles: Arc<Mutex<Vec<bool>>>,
}

impl RecordingAffordance {
    fn toggles(&self) -> Vec<bool> {
        self.toggles.lock().expect("toggle lock").clone()
    }
}

impl DropAffordance for RecordingAffordance {
    fn set_droppable(&mut self, droppable: bool) {
        self.toggles.lock().expect("toggle lock").push(droppable);
    }
}

#[fixture]
fn store() -> ProjectStore {
    ProjectStore::default()
}

fn finished_list(
    store: &ProjectStore,
) -> (StatusList<RecordingAffordance>, RecordingAffordance) {
    let affordance = RecordingAffordance::default();
    let list = StatusList::new(ProjectStatus::Finished, store.clone(), affordance.clone());
    (list, affordance)
}

#[rstest]
fn drag_over_with_plain_text_accepts_and_highlights(store: ProjectStore) {
    let (mut list, affordance) = finished_list(&store);
    let channel = InMemoryTransfer::with_data(DataKind::PlainText, "anything");

    let verdict = list.on_drag_over(&channel);

    assert_eq!(verdict, DragOverVerdict::Accept);
    assert_eq!(affordance.toggles(), vec![true]);
}

#[rstest]
fn drag_over_with_foreign_kind_is_ignored(store: ProjectStore) {
    store.add_project("Untouched", "Must not move on foreign drags", 1);
    let affordance = MockAffordance::new();
    let mut list = StatusList::new(ProjectStatus::Finished, store.clone(), affordance);
    let channel = InMemoryTransfer::with_data(DataKind::UriList, "https://example.org/");

    // MockAffordance has no expectations, so any highlight call panics.
    let verdict = list.on_drag_over(&channel);

    assert_eq!(verdict, DragOverVerdict::Ignore);
    assert_eq!(
        store.snapshot().first().map(Project::status),
        Some(ProjectStatus::Active)
    );
}

#[rstest]
fn drop_moves_the_dragged_project(store: ProjectStore) {
    let created = store.add_project("Dragged", "Heads to finished", 2);
    let (mut list, affordance) = finished_list(&store);
    let channel = InMemoryTransfer::with_data(DataKind::PlainText, created.id().to_string());

    list.on_drag_over(&channel);
    list.on_drop(&channel);

    assert_eq!(
        store.snapshot().first().map(Project::status),
        Some(ProjectStatus::Finished)
    );
    // Highlight goes on during drag-over and off again on drop.
    assert_eq!(affordance.toggles(), vec![true, false]);
}

#[rstest]
fn drop_of_stale_id_clears_highlight_without_moving_anything(store: ProjectStore) {
    store.add_project("Resident", "Unrelated to the stale drop", 1);
    let (mut list, affordance) = finished_list(&store);
    let channel = InMemoryTransfer::with_data(DataKind::PlainText, ProjectId::new().to_string());

    list.on_drop(&channel);

    assert_eq!(store.project_count(), 1);
    assert_eq!(
        store.snapshot().first().map(Project::status),
        Some(ProjectStatus::Active)
    );
    assert_eq!(affordance.toggles(), vec![false]);
}

#[rstest]
fn drop_of_unparseable_payload_clears_highlight(store: ProjectStore) {
    let (mut list, affordance) = finished_list(&store);
    let channel = InMemoryTransfer::with_data(DataKind::PlainText, "not-a-project-id");

    list.on_drop(&channel);

    assert_eq!(store.project_count(), 0);
    assert_eq!(affordance.toggles(), vec![false]);
}

#[rstest]
fn drop_with_empty_channel_still_clears_highlight(store: ProjectStore) {
    let (mut list, affordance) = finished_list(&store);
    let channel = InMemoryTransfer::new();

    list.on_drop(&channel);

    assert_eq!(affordance.toggles(), vec![false]);
}

#[rstest]
fn drag_leave_clears_highlight_without_mutation(store: ProjectStore) {
    let created = store.add_project("Hovered", "Gesture leaves again", 1);
    let (mut list, affordance) = finished_list(&store);
    let channel = InMemoryTransfer::with_data(DataKind::PlainText, created.id().to_string());

    list.on_drag_over(&channel);
    list.on_drag_leave();

    assert_eq!(affordance.toggles(), vec![true, false]);
    assert_eq!(
        store.snapshot().first().map(Project::status),
        Some(ProjectStatus::Active)
    );
}

#[rstest]
fn list_reports_its_bound_status(store: ProjectStore) {
    let (list, _) = finished_list(&store);
    assert_eq!(list.status(), ProjectStatus::Finished);
}
