//! # Project State
//!
//! [`ProjectState`] is the single owner of every [`Project`] on the board.
//! Views never hold live projects: they subscribe with
//! [`ProjectState::add_listener`] and receive a [`Snapshot`] after each
//! state-changing operation.
//!
//! ## Notification Contract
//!
//! - Every successful mutation ends with one broadcast.
//! - Listeners run synchronously, in registration order, before the mutating
//!   call returns.
//! - All listeners of one broadcast receive the same snapshot.
//! - Operations that change nothing do not broadcast.
//!
//! Listeners receive `&Snapshot` while the store is mutably borrowed, so a
//! listener cannot call back into the store. Reentrant mutation is rejected
//! by the borrow checker rather than guarded at runtime.
//!
//! ## Ownership
//!
//! There is no global instance. The composition root ([`crate::api::BoardApi`])
//! builds one `ProjectState` and lends it to whoever needs it.

use crate::model::{Project, ProjectId, ProjectStatus};
use std::fmt;
use std::rc::Rc;

/// Handle returned by a listener registration, used to deregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub type Listener<T> = Box<dyn FnMut(&T)>;

/// An ordered registry of callbacks for values of type `T`.
pub struct Listeners<T> {
    next_id: u64,
    entries: Vec<(Subscription, Listener<T>)>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((subscription, Box::new(listener)));
        subscription
    }

    /// Returns false if the subscription was never registered or already removed.
    pub fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| *s != subscription);
        self.entries.len() != before
    }

    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.entries.iter_mut() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// Immutable, insertion-ordered copy of the board's projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    projects: Rc<[Project]>,
}

impl Snapshot {
    fn new(projects: &[Project]) -> Self {
        Self {
            projects: Rc::from(projects),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn by_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.status == status)
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The project store.
#[derive(Debug, Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Listeners<Snapshot>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active project and broadcasts. Inputs are not validated here.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title.into(), description.into(), people);
        let id = project.id.clone();
        tracing::info!(id = %id, title = %project.title, "project added");
        self.projects.push(project);
        self.update_listeners();
        id
    }

    /// Moves a project to `new_status`. Unknown ids and unchanged statuses are
    /// no-ops without a broadcast. Returns whether the project changed.
    pub fn change_project_status(&mut self, id: &ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(id = %id, "status change for unknown project ignored");
            return false;
        };
        if project.status == new_status {
            return false;
        }

        tracing::info!(id = %id, from = %project.status, to = %new_status, "project status changed");
        project.status = new_status;
        self.update_listeners();
        true
    }

    pub fn add_listener<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, subscription: Subscription) -> bool {
        self.listeners.remove(subscription)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.projects)
    }

    pub fn project(&self, id: &ProjectId) -> Option<Project> {
        self.projects.iter().find(|p| &p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn update_listeners(&mut self) {
        let snapshot = self.snapshot();
        tracing::debug!(
            projects = snapshot.len(),
            listeners = self.listeners.len(),
            "broadcasting snapshot"
        );
        self.listeners.notify(&snapshot);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::RefCell;

    /// Records every snapshot a listener receives.
    pub type Recorded = Rc<RefCell<Vec<Snapshot>>>;

    pub struct StateFixture {
        pub state: ProjectState,
    }

    impl Default for StateFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StateFixture {
        pub fn new() -> Self {
            Self {
                state: ProjectState::new(),
            }
        }

        pub fn with_projects(mut self, count: usize) -> Self {
            for i in 0..count {
                self.state.add_project(
                    format!("Project {}", i + 1),
                    format!("Description for project {}", i + 1),
                    (i % 5) as u32 + 1,
                );
            }
            self
        }

        pub fn with_finished_project(mut self, title: &str) -> Self {
            let id = self.state.add_project(title, "Already done", 1);
            self.state.change_project_status(&id, ProjectStatus::Finished);
            self
        }

        /// Registers a listener that records snapshots and returns the log.
        pub fn record(&mut self) -> (Subscription, Recorded) {
            let log: Recorded = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&log);
            let sub = self
                .state
                .add_listener(move |snap| sink.borrow_mut().push(snap.clone()));
            (sub, log)
        }

        pub fn ids(&self) -> Vec<ProjectId> {
            self.state.snapshot().iter().map(|p| p.id.clone()).collect()
        }
    }
}
