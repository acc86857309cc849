use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProjectStatus;
use crate::state::ProjectState;

pub fn run(state: &ProjectState, status: Option<ProjectStatus>) -> Result<CmdResult> {
    let snapshot = state.snapshot();
    let listed = match status {
        Some(status) => snapshot.by_status(status).cloned().collect(),
        None => snapshot.projects().to_vec(),
    };

    Ok(CmdResult::default().with_listed_projects(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::StateFixture;

    #[test]
    fn lists_everything_in_insertion_order() {
        let fx = StateFixture::new()
            .with_projects(2)
            .with_finished_project("Shipped");

        let result = run(&fx.state, None).unwrap();

        let titles: Vec<_> = result.listed_projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Project 1", "Project 2", "Shipped"]);
    }

    #[test]
    fn filters_by_status() {
        let fx = StateFixture::new()
            .with_projects(2)
            .with_finished_project("Shipped");

        let active = run(&fx.state, Some(ProjectStatus::Active)).unwrap();
        let finished = run(&fx.state, Some(ProjectStatus::Finished)).unwrap();

        assert_eq!(active.listed_projects.len(), 2);
        assert_eq!(finished.listed_projects.len(), 1);
        assert_eq!(finished.listed_projects[0].title, "Shipped");
    }

    #[test]
    fn listing_does_not_broadcast() {
        let mut fx = StateFixture::new().with_projects(1);
        let (_, log) = fx.record();

        run(&fx.state, None).unwrap();

        assert!(log.borrow().is_empty());
    }
}
