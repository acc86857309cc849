use colored::Colorize;
use projboard::commands::{CmdMessage, MessageLevel};
use projboard::components::ProjectItem;
use projboard::config::BoardConfig;
use projboard::model::{Project, ProjectStatus};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// The blocking alert of a rejected form. Goes to stderr.
pub(super) fn print_alert(text: &str) {
    eprintln!("{}", text.red().bold());
}

/// Prints text produced by a component, styling its heading and rule lines.
pub(super) fn print_rendered(text: &str) {
    for (i, line) in text.lines().enumerate() {
        if i == 0 {
            println!("{}", line.bold());
        } else if !line.is_empty() && line.chars().all(|c| c == '=') {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    for project in projects {
        let item = ProjectItem::new(project.clone());
        let status = format!("{:<8}", project.status.as_str());
        let status = match project.status {
            ProjectStatus::Active => status.yellow(),
            ProjectStatus::Finished => status.green(),
        };
        println!(
            "{}  {}  {}  {}",
            item.short_id().dimmed(),
            status,
            project.title,
            item.persons().dimmed()
        );
    }
}

pub(super) fn print_config(config: &BoardConfig) {
    println!("description_min_length = {}", config.description_min_length);
    println!("people_min = {}", config.people_min);
    println!("people_max = {}", config.people_max);
}
