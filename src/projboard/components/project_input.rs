use super::Component;
use crate::commands::{add, CmdResult};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::state::ProjectState;

/// The new-project form: three text fields and a submit action.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    title: String,
    description: String,
    people: String,
    config: BoardConfig,
}

impl ProjectInput {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            config,
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.people.is_empty()
    }

    /// Validates the fields and adds the project. On failure nothing reaches
    /// the store and the fields keep their values; on success they are cleared.
    pub fn submit(&mut self, state: &mut ProjectState) -> Result<CmdResult> {
        let input = add::gather_user_input(&self.title, &self.description, &self.people, &self.config)?;
        let result = add::run(state, input)?;
        self.clear_inputs();
        Ok(result)
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectInput {
    fn element_id(&self) -> &str {
        "user-input"
    }

    // The form only writes to the store; it has nothing to subscribe to.
    fn configure(&mut self, _state: &mut ProjectState) {}

    fn render(&self) -> String {
        format!(
            "NEW PROJECT\n  Title:       {}\n  Description: {}\n  People:      {}",
            self.title, self.description, self.people
        )
    }
}
