//! Reactive stores: a generic subscribable collection and its
//! project-board specialization.

mod projects;
mod subscribable;

pub use projects::ProjectStore;
pub use subscribable::{SubscribableStore, Subscriber};
