//! # API Facade
//!
//! [`BoardApi`] is the composition root of a board and the single entry
//! point for every UI client. It owns the one [`ProjectState`] of the board
//! together with the form and the two lists, and builds them in lifecycle
//! order (instantiate, attach, configure) in [`BoardApi::new`].
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to components (form, drag and drop) and commands
//! - **Normalizes inputs** (id prefixes and titles to full ids)
//! - **Returns structured types** (`Result<CmdResult>`, rendered text)
//!
//! It never prints. A terminal, a test or any other client decides how to
//! show what comes back.
//!
//! ## Reactive Output
//!
//! Lists re-render whenever the store broadcasts. [`BoardApi::take_rerendered`]
//! hands out the text of the lists that changed since it was last called, so
//! a client only redraws what moved.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::components::{Component, Host, ProjectInput, ProjectList};
use crate::config::BoardConfig;
use crate::drag_drop::{DragPayload, DragTarget, Draggable};
use crate::error::Result;
use crate::model::{Project, ProjectId, ProjectStatus};
use crate::state::{ProjectState, Snapshot, Subscription};

pub struct BoardApi {
    state: ProjectState,
    host: Host,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
    config: BoardConfig,
}

impl BoardApi {
    pub fn new(config: BoardConfig) -> Self {
        let mut state = ProjectState::new();
        let mut host = Host::new();

        let mut input = ProjectInput::new(config.clone());
        host.attach(input.element_id(), true);
        input.configure(&mut state);

        let mut active = ProjectList::new(ProjectStatus::Active);
        host.attach(active.element_id(), false);
        active.configure(&mut state);

        let mut finished = ProjectList::new(ProjectStatus::Finished);
        host.attach(finished.element_id(), false);
        finished.configure(&mut state);

        Self {
            state,
            host,
            input,
            active,
            finished,
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn form(&self) -> &ProjectInput {
        &self.input
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.input.set_title(value);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.input.set_description(value);
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.input.set_people(value);
    }

    pub fn clear_form(&mut self) {
        self.input.clear_inputs();
    }

    /// Submits whatever the form currently holds.
    pub fn submit(&mut self) -> Result<CmdResult> {
        self.input.submit(&mut self.state)
    }

    /// Fills every form field and submits in one step.
    pub fn submit_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Result<CmdResult> {
        self.input.set_title(title);
        self.input.set_description(description);
        self.input.set_people(people);
        self.submit()
    }

    /// Drags the item for `id` onto the list for `status`.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> Result<CmdResult> {
        let source = [&self.active, &self.finished]
            .into_iter()
            .flat_map(|list| list.items())
            .find(|item| &item.project().id == id);

        let Some(item) = source else {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("No project with id {}", id)));
            return Ok(result);
        };

        let payload = item.on_drag_start();
        let result = self.drop_payload(status, &payload);
        item.on_drag_end();
        result
    }

    /// Delivers a drag payload to the list for `status`.
    pub fn drop_payload(&mut self, status: ProjectStatus, payload: &DragPayload) -> Result<CmdResult> {
        let target = match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        };

        let result = if target.on_drag_over(payload) {
            target.on_drop(&mut self.state, payload)
        } else {
            let mut refused = CmdResult::default();
            refused.add_message(CmdMessage::warning(format!(
                "{} does not accept {} data",
                target.heading().to_lowercase(),
                payload.mime()
            )));
            Ok(refused)
        };
        target.on_drag_leave();
        result
    }

    pub fn list_projects(&self, status: Option<ProjectStatus>) -> Result<CmdResult> {
        commands::list::run(&self.state, status)
    }

    /// Resolves a full id, an id prefix or an exact title. Resolves to
    /// nothing unless exactly one project matches any of them.
    pub fn resolve_project(&self, selector: &str) -> Option<ProjectId> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }

        let snapshot = self.state.snapshot();
        let candidates = snapshot
            .iter()
            .filter(|p| p.id.as_str().starts_with(selector) || p.title == selector);
        let resolved = unique(candidates);
        if resolved.is_none() {
            tracing::debug!(selector, "selector matches no single project");
        }
        resolved
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Registers an extra listener next to the board's own lists.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.state.add_listener(listener)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.state.remove_listener(subscription)
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Renders every attached section in host order.
    pub fn render_board(&self) -> String {
        self.host
            .elements()
            .iter()
            .filter_map(|id| self.component(id))
            .map(|component| component.render())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Text of the lists that re-rendered since the previous call, in host order.
    pub fn take_rerendered(&self) -> Vec<String> {
        self.host
            .elements()
            .iter()
            .filter_map(|id| [&self.active, &self.finished].into_iter().find(|l| l.element_id() == id))
            .filter(|list| list.take_rerendered())
            .map(|list| list.render())
            .collect()
    }

    fn component(&self, element_id: &str) -> Option<&dyn Component> {
        let components: [&dyn Component; 3] = [&self.input, &self.active, &self.finished];
        components
            .into_iter()
            .find(|component| component.element_id() == element_id)
    }
}

fn unique<'a>(mut candidates: impl Iterator<Item = &'a Project>) -> Option<ProjectId> {
    match (candidates.next(), candidates.next()) {
        (Some(project), None) => Some(project.id.clone()),
        _ => None,
    }
}

impl Default for BoardApi {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
