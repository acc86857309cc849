use super::{Component, ProjectItem, LINE_WIDTH};
use crate::commands::{self, CmdResult};
use crate::drag_drop::{DragPayload, DragTarget};
use crate::error::Result;
use crate::model::{Project, ProjectId, ProjectStatus};
use crate::state::{ProjectState, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The list of projects in one status. Subscribes to the store and keeps
/// only the projects whose status matches its own.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    element_id: String,
    assigned: Rc<RefCell<Vec<Project>>>,
    rerendered: Rc<Cell<bool>>,
    droppable: bool,
    subscription: Option<Subscription>,
}

impl ProjectList {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            element_id: format!("{}-projects", status),
            assigned: Rc::new(RefCell::new(Vec::new())),
            rerendered: Rc::new(Cell::new(false)),
            droppable: false,
            subscription: None,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.assigned.borrow().iter().any(|p| &p.id == id)
    }

    pub fn items(&self) -> Vec<ProjectItem> {
        self.assigned
            .borrow()
            .iter()
            .cloned()
            .map(ProjectItem::new)
            .collect()
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// True if a snapshot re-rendered this list since the last call.
    pub fn take_rerendered(&self) -> bool {
        self.rerendered.replace(false)
    }

    /// Stops listening to the store. Returns false if the list was not subscribed.
    pub fn detach(&mut self, state: &mut ProjectState) -> bool {
        match self.subscription.take() {
            Some(subscription) => state.remove_listener(subscription),
            None => false,
        }
    }
}

impl Component for ProjectList {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn configure(&mut self, state: &mut ProjectState) {
        if let Some(previous) = self.subscription.take() {
            state.remove_listener(previous);
        }

        let status = self.status;
        let assigned = Rc::clone(&self.assigned);
        let rerendered = Rc::clone(&self.rerendered);
        let subscription = state.add_listener(move |snapshot| {
            *assigned.borrow_mut() = snapshot.by_status(status).cloned().collect();
            rerendered.set(true);
        });
        self.subscription = Some(subscription);
    }

    fn render(&self) -> String {
        let heading = self.heading();
        let marker = if self.droppable { " [drop here]" } else { "" };
        let mut out = format!(
            "{}{}\n{}",
            heading,
            marker,
            "=".repeat(LINE_WIDTH.min(heading.len() + marker.len()))
        );

        let items = self.items();
        if items.is_empty() {
            out.push_str("\n  (no projects)");
        }
        for item in items {
            out.push('\n');
            out.push_str(&item.render());
        }
        out
    }
}

impl DragTarget for ProjectList {
    fn on_drag_over(&mut self, payload: &DragPayload) -> bool {
        if payload.is_text() {
            self.droppable = true;
        }
        self.droppable
    }

    fn on_drop(&mut self, state: &mut ProjectState, payload: &DragPayload) -> Result<CmdResult> {
        self.droppable = false;
        if !payload.is_text() {
            tracing::debug!(mime = payload.mime(), list = %self.element_id, "drop refused");
            return Ok(CmdResult::default());
        }

        let id = ProjectId::from(payload.data());
        commands::status::run(state, &id, self.status)
    }

    fn on_drag_leave(&mut self) {
        self.droppable = false;
    }
}
