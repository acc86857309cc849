//! # Command Layer
//!
//! Board operations as plain functions over [`ProjectState`](crate::state::ProjectState).
//! Each returns a [`CmdResult`] carrying the projects it touched or listed and
//! user-facing messages. No function here prints or reads a terminal.

use crate::model::Project;

pub mod add;
pub mod list;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_projects: Vec<Project>,
    pub listed_projects: Vec<Project>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_projects(mut self, projects: Vec<Project>) -> Self {
        self.listed_projects = projects;
        self
    }
}
