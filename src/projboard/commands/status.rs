use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ProjectId, ProjectStatus};
use crate::state::ProjectState;

/// Moves one project to `status`. A miss or an unchanged status is not an
/// error; the result simply carries no affected project.
pub fn run(state: &mut ProjectState, id: &ProjectId, status: ProjectStatus) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !state.change_project_status(id, status) {
        result.add_message(CmdMessage::info("Nothing to move"));
        return Ok(result);
    }

    if let Some(project) = state.project(id) {
        result.add_message(CmdMessage::success(format!(
            "Project moved to {}: {}",
            status, project.title
        )));
        result.affected_projects.push(project);
    }

    Ok(result)
}
