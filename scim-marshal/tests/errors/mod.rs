use std::collections::HashMap;

use scim_marshal::{
    DecodeErrorKind, DecodeOptions, ErrorPolicy, Object, PathSegment, Scim, Value, decode,
    decode_with, from_value, value,
};
use scim_testhelpers::test;

fn object(v: Value) -> Object {
    match v {
        Value::Object(o) => o,
        other => panic!("expected an object, got {other}"),
    }
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Form {
    first: String,
    count: u8,
    middle: String,
    active: bool,
    last: String,
}

#[test]
fn siblings_keep_decoding_after_a_failure() {
    let mut form = Form::default();
    let err = decode(
        &object(value!({
            "first": "a",
            "count": "many",
            "middle": "m",
            "last": "z"
        })),
        &mut form,
    )
    .unwrap_err();
    assert_eq!(err.path, [PathSegment::Field("count".into())]);
    assert_eq!(form.first, "a");
    assert_eq!(form.middle, "m");
    assert_eq!(form.last, "z");
    assert_eq!(form.count, 0);
}

fn two_failures() -> Object {
    object(value!({
        "active": "yes",
        "count": "many",
        "last": "z"
    }))
}

#[test]
fn the_last_error_wins() {
    let mut form = Form::default();
    let err = decode(&two_failures(), &mut form).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"at .active: type mismatch: got String, want bool");
    assert_eq!(form.last, "z");
}

#[test]
fn the_first_error_wins_on_request() {
    let mut form = Form::default();
    let options = DecodeOptions::new().error_policy(ErrorPolicy::FirstWins);
    let err = decode_with(&two_failures(), &mut form, &options).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"at .count: type mismatch: got String, want u8");
    assert_eq!(form.last, "z");
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Email {
    value: String,
    primary: bool,
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Contact {
    emails: Vec<Email>,
    phones: HashMap<String, Email>,
}

#[test]
fn list_elements_keep_decoding_after_a_failure() {
    let mut contact = Contact::default();
    let err = decode(
        &object(value!({
            "emails": [
                { "value": 1 },
                { "value": "ok" },
                { "value": "b", "primary": "no" }
            ]
        })),
        &mut contact,
    )
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"at .emails[2].primary: type mismatch: got String, want bool");
    assert_eq!(contact.emails.len(), 3);
    assert_eq!(contact.emails[1].value, "ok");
    assert_eq!(contact.emails[2].value, "b");
}

#[test]
fn map_entries_carry_their_key() {
    let mut contact = Contact::default();
    let err = decode(
        &object(value!({ "phones": { "work": { "value": true } } })),
        &mut contact,
    )
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"at .phones["work"].value: type mismatch: got bool, want String"#);
}

#[test]
fn a_mapping_into_a_list_field_is_a_mismatch() {
    let mut contact = Contact::default();
    let err = decode(&object(value!({ "emails": { "value": "x" } })), &mut contact).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"at .emails: type mismatch: got Object, want Vec<Email>");
}

#[test]
fn targets_that_cannot_take_a_mapping_are_invalid() {
    let source = object(value!({ "a": 1 }));

    let mut number = 0u32;
    let err = decode(&source, &mut number).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::InvalidTarget { .. }));
    insta::assert_snapshot!(err.to_string(), @"invalid target: u32 cannot be decoded from a mapping");

    let mut list: Vec<String> = Vec::new();
    let err = decode(&source, &mut list).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid target: Vec<String> cannot be decoded from a mapping");
}

#[test]
fn from_value_needs_an_object() {
    let err = from_value::<Form>(&value!(["a"])).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"type mismatch: got Vec<Value>, want Form");

    let form: Form = from_value(&value!({ "count": 3 })).unwrap();
    assert_eq!(form.count, 3);
}
