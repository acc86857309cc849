use projboard::api::BoardApi;
use projboard::config::BoardConfig;
use projboard::drag_drop::DragPayload;
use projboard::error::BoardError;
use projboard::model::ProjectStatus;
use projboard::state::{ProjectState, Snapshot};
use projboard::validation::{validate, Validatable};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn listeners_get_the_whole_store_in_insertion_order() {
    let mut state = ProjectState::new();
    let seen: Rc<RefCell<Vec<Snapshot>>> = Rc::default();
    let sink = Rc::clone(&seen);
    state.add_listener(move |snapshot: &Snapshot| sink.borrow_mut().push(snapshot.clone()));

    state.add_project("A", "first", 1);
    state.add_project("B", "second", 2);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    let titles: Vec<_> = seen[1].iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    // earlier snapshots are not touched by later mutations
    assert_eq!(seen[0].len(), 1);
}

#[test]
fn status_change_keeps_position_and_skips_no_ops() {
    let mut state = ProjectState::new();
    let first = state.add_project("A", "first", 1);
    state.add_project("B", "second", 2);

    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    state.add_listener(move |_: &Snapshot| *counter.borrow_mut() += 1);

    assert!(!state.change_project_status(&first, ProjectStatus::Active));
    assert!(state.change_project_status(&first, ProjectStatus::Finished));
    assert!(!state.change_project_status(&"missing".into(), ProjectStatus::Finished));

    assert_eq!(*calls.borrow(), 1);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.projects()[0].id, first);
    assert_eq!(snapshot.projects()[0].status, ProjectStatus::Finished);
}

#[test]
fn removed_listener_is_not_called() {
    let mut state = ProjectState::new();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let subscription = state.add_listener(move |_: &Snapshot| *counter.borrow_mut() += 1);

    state.add_project("A", "first", 1);
    assert!(state.remove_listener(subscription));
    state.add_project("B", "second", 2);

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn text_and_number_bounds_differ() {
    // text minimum is exclusive, numeric minimum inclusive
    assert!(!validate(&Validatable::text("ab").min_length(2)));
    assert!(validate(&Validatable::text("abc").min_length(2)));
    assert!(validate(&Validatable::number(1.0).min(1.0)));
    assert!(!validate(&Validatable::number(6.0).max(6.0)));
    assert!(!validate(&Validatable::number(f64::NAN).min(1.0)));
}

#[test]
fn board_form_applies_default_rules() {
    let mut board = BoardApi::default();

    for (title, description, people) in [
        ("", "Landing page", "3"),
        ("Website", "ab", "3"),
        ("Website", "Landing page", "0"),
        ("Website", "Landing page", "6"),
        ("Website", "Landing page", "many"),
    ] {
        assert!(matches!(
            board.submit_project(title, description, people),
            Err(BoardError::InvalidInput)
        ));
    }
    assert!(board.snapshot().is_empty());

    board.submit_project("Website", "abc", "5").unwrap();
    assert_eq!(board.snapshot().len(), 1);
    assert!(board.form().is_blank());
}

#[test]
fn custom_rules_widen_the_form() {
    let config = BoardConfig {
        people_max: 11.0,
        ..BoardConfig::default()
    };
    let mut board = BoardApi::new(config);

    board.submit_project("Team", "Big team project", "10").unwrap();
    assert_eq!(board.snapshot().projects()[0].people, 10);
}

#[test]
fn dragging_moves_between_lists() {
    let mut board = BoardApi::default();
    board.submit_project("Website", "Landing page", "3").unwrap();
    board.take_rerendered();

    let id = board.resolve_project("Website").unwrap();
    board.move_project(&id, ProjectStatus::Finished).unwrap();

    assert!(board.list(ProjectStatus::Active).assigned_projects().is_empty());
    assert_eq!(board.list(ProjectStatus::Finished).assigned_projects()[0].id, id);
    assert_eq!(board.take_rerendered().len(), 2);
}

#[test]
fn non_text_payload_is_refused() {
    let mut board = BoardApi::default();
    board.submit_project("Website", "Landing page", "3").unwrap();
    let id = board.resolve_project("Website").unwrap();

    let payload = DragPayload::new("text/html", id.as_str());
    board.drop_payload(ProjectStatus::Finished, &payload).unwrap();

    assert_eq!(board.snapshot().projects()[0].status, ProjectStatus::Active);
}

#[test]
fn board_renders_form_then_lists() {
    let board = BoardApi::default();
    let text = board.render_board();

    let form = text.find("NEW PROJECT").unwrap();
    let active = text.find("ACTIVE PROJECTS").unwrap();
    let finished = text.find("FINISHED PROJECTS").unwrap();
    assert!(form < active && active < finished);
}
