use super::*;

#[test]
fn user_deserializes_from_camel_case_payload() {
    let user: User = serde_json::from_str(
        r#"{"id":7,"name":"Ana","email":"a@x.com","phoneNumber":"555-0100"}"#,
    )
    .expect("user");

    assert_eq!(user.id, UserId(7));
    assert_eq!(user.phone_number, "555-0100");
}

#[test]
fn draft_serializes_without_id() {
    let draft = UserDraft::new("Ana", "a@x.com", "1");
    let value = serde_json::to_value(&draft).expect("json");

    assert_eq!(
        value,
        serde_json::json!({"name": "Ana", "email": "a@x.com", "phoneNumber": "1"})
    );
}

#[test]
fn draft_copies_editable_fields_from_user() {
    let user = User {
        id: UserId(3),
        name: "Bo".into(),
        email: "bo@x.com".into(),
        phone_number: "42".into(),
    };

    assert_eq!(UserDraft::from(&user), UserDraft::new("Bo", "bo@x.com", "42"));
}

#[test]
fn draft_field_accepts_wire_and_snake_case_names() {
    assert_eq!("phoneNumber".parse::<DraftField>(), Ok(DraftField::PhoneNumber));
    assert_eq!("phone_number".parse::<DraftField>(), Ok(DraftField::PhoneNumber));
    assert_eq!(" email ".parse::<DraftField>(), Ok(DraftField::Email));

    let err = "age".parse::<DraftField>().expect_err("unknown field");
    assert_eq!(err, UnknownDraftField("age".into()));
}

#[test]
fn set_updates_only_the_named_field() {
    let mut draft = UserDraft::new("Ana", "a@x.com", "1");
    draft.set(DraftField::Email, "ana@x.com");

    assert_eq!(draft, UserDraft::new("Ana", "ana@x.com", "1"));
}

#[test]
fn missing_fields_lists_blank_entries_in_form_order() {
    let draft = UserDraft::new("Ana", "  ", "");

    assert_eq!(
        draft.missing_fields(),
        vec![DraftField::Email, DraftField::PhoneNumber]
    );
    assert!(UserDraft::default().is_empty());
}

#[test]
fn user_id_parses_and_displays_as_plain_integer() {
    let id: UserId = "12".parse().expect("id");
    assert_eq!(id, UserId(12));
    assert_eq!(id.to_string(), "12");
}
