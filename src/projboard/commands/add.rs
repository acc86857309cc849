use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::state::ProjectState;
use crate::validation::{failed_checks, Validatable};

/// A project that passed the form rules and is ready to be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Reads the people field the way a numeric form field coerces its text:
/// blank is 0, anything unparseable is NaN.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Validates the three form fields together and converts them into a [`NewProject`].
///
/// All three fields are always checked, so the debug log lists every failure.
pub fn gather_user_input(
    title: &str,
    description: &str,
    people: &str,
    config: &BoardConfig,
) -> Result<NewProject> {
    let people_value = parse_people(people);

    let fields = [
        ("title", Validatable::text(title).required()),
        (
            "description",
            Validatable::text(description)
                .required()
                .min_length(config.description_min_length),
        ),
        (
            "people",
            Validatable::number(people_value)
                .required()
                .min(config.people_min)
                .max(config.people_max),
        ),
    ];

    let mut valid = true;
    for (name, field) in &fields {
        let failed = failed_checks(field);
        if !failed.is_empty() {
            let failed: Vec<String> = failed.iter().map(ToString::to_string).collect();
            tracing::debug!(field = name, value = %field.value, failed = ?failed, "field rejected");
            valid = false;
        }
    }
    if !valid {
        return Err(BoardError::InvalidInput);
    }

    let people = whole_count(people_value).ok_or_else(|| {
        tracing::debug!(value = people_value, "people is not a whole count");
        BoardError::InvalidInput
    })?;

    Ok(NewProject {
        title: title.to_string(),
        description: description.to_string(),
        people,
    })
}

fn whole_count(value: f64) -> Option<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

pub fn run(state: &mut ProjectState, input: NewProject) -> Result<CmdResult> {
    let id = state.add_project(input.title, input.description, input.people);
    let mut result = CmdResult::default();

    if let Some(project) = state.project(&id) {
        result.add_message(CmdMessage::success(format!(
            "Project added: {}",
            project.title
        )));
        result.affected_projects.push(project);
    }

    Ok(result)
}
