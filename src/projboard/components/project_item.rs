use super::{truncate_to_width, Component, LINE_WIDTH};
use crate::drag_drop::{DragPayload, Draggable};
use crate::model::Project;
use crate::state::ProjectState;
use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

/// Characters of the id shown next to a project; enough to address it.
pub const SHORT_ID_LEN: usize = 8;

const INDENT: &str = "    ";
const TIME_WIDTH: usize = 16;

/// One project entry inside a list.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn persons(&self) -> String {
        if self.project.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.project.people)
        }
    }

    pub fn short_id(&self) -> &str {
        let id = self.project.id.as_str();
        match id.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &id[..end],
            None => id,
        }
    }
}

impl Component for ProjectItem {
    fn element_id(&self) -> &str {
        self.project.id.as_str()
    }

    // Items hold a copy of their project and never subscribe.
    fn configure(&mut self, _state: &mut ProjectState) {}

    fn render(&self) -> String {
        let time_ago = format_time_ago(self.project.created_at);
        let head = format!("  {}  ", self.short_id());
        let available = LINE_WIDTH.saturating_sub(head.width() + TIME_WIDTH);
        let title = truncate_to_width(&self.project.title, available);
        let padding = available.saturating_sub(title.width());

        let body_width = LINE_WIDTH.saturating_sub(INDENT.len());
        format!(
            "{}{}{}{:>width$}\n{}{} assigned\n{}{}",
            head,
            title,
            " ".repeat(padding),
            time_ago,
            INDENT,
            self.persons(),
            INDENT,
            truncate_to_width(&self.project.description, body_width),
            width = TIME_WIDTH,
        )
    }
}

impl Draggable for ProjectItem {
    fn on_drag_start(&self) -> DragPayload {
        DragPayload::text(self.project.id.as_str())
    }

    fn on_drag_end(&self) {
        tracing::debug!(id = %self.project.id, "drag end");
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectId;

    fn item(people: u32) -> ProjectItem {
        let mut project = Project::new("Website".into(), "New landing page".into(), people);
        project.id = ProjectId::from("0123456789abcdef");
        ProjectItem::new(project)
    }

    #[test]
    fn persons_is_singular_for_one() {
        assert_eq!(item(1).persons(), "1 person");
        assert_eq!(item(3).persons(), "3 persons");
    }

    #[test]
    fn short_id_takes_a_prefix() {
        assert_eq!(item(1).short_id(), "01234567");
    }

    #[test]
    fn render_shows_title_people_and_description() {
        let text = item(2).render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("01234567"));
        assert!(lines[0].contains("Website"));
        assert!(lines[0].ends_with("now") || lines[0].ends_with("ago"));
        assert_eq!(lines[1].trim(), "2 persons assigned");
        assert_eq!(lines[2].trim(), "New landing page");
    }

    #[test]
    fn drag_start_carries_the_id_as_text() {
        let payload = item(1).on_drag_start();
        assert!(payload.is_text());
        assert_eq!(payload.data(), "0123456789abcdef");
    }
}
