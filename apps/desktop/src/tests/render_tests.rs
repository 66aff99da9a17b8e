use super::*;

use client_core::EditMode;
use shared::domain::{User, UserDraft, UserId};

fn ana() -> User {
    User {
        id: UserId(7),
        name: "Ana".into(),
        email: "a@x.com".into(),
        phone_number: "555-0100".into(),
    }
}

#[test]
fn empty_creating_view_marks_required_fields() {
    let out = render(&ManagerSnapshot::default());

    assert!(out.contains("== Create new user =="));
    assert!(out.contains("[Save]"));
    assert!(!out.contains("[Cancel]"));
    assert!(out.contains("(required)"));
    assert!(out.contains("(no users)"));
}

#[test]
fn editing_view_offers_update_and_cancel() {
    let snapshot = ManagerSnapshot {
        users: vec![ana()],
        draft: UserDraft::from(&ana()),
        mode: EditMode::Editing(UserId(7)),
        ..ManagerSnapshot::default()
    };

    let out = render(&snapshot);

    assert!(out.contains("== Edit user =="));
    assert!(out.contains("[Update] [Cancel]"));
    assert!(!out.contains("(required)"));
}

#[test]
fn table_shows_id_column_and_rows() {
    let snapshot = ManagerSnapshot {
        users: vec![ana()],
        ..ManagerSnapshot::default()
    };

    let out = render(&snapshot);

    assert!(out.contains("ID | Name | Email   | Phone"));
    assert!(out.contains("7  | Ana  | a@x.com | 555-0100"));
}

#[test]
fn shows_loading_error_and_pending_submit() {
    let snapshot = ManagerSnapshot {
        loading: true,
        submitting: true,
        error: Some("failed to save user".into()),
        ..ManagerSnapshot::default()
    };

    let out = render(&snapshot);

    assert!(out.contains("Loading users..."));
    assert!(out.contains("! failed to save user"));
    assert!(out.contains("(waiting for server)"));
    assert!(!out.contains("(no users)"));
}
