use scim_marshal::{DecodeErrorKind, DecodeOptions, Object, Scim, Value, decode_with, value};
use scim_testhelpers::test;

fn object(v: Value) -> Object {
    match v {
        Value::Object(o) => o,
        other => panic!("expected an object, got {other}"),
    }
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Member {
    value: String,
}

#[derive(Debug, Default, PartialEq, Scim)]
struct Group {
    display_name: String,
    members: Vec<Member>,
}

#[test]
fn long_lists_are_rejected_before_allocation() {
    let options = DecodeOptions::new().max_sequence_len(2);
    let mut group = Group {
        members: vec![Member {
            value: "kept".into(),
        }],
        ..Group::default()
    };
    let err = decode_with(
        &object(value!({
            "display_name": "g",
            "members": [{ "value": "a" }, { "value": "b" }, { "value": "c" }]
        })),
        &mut group,
        &options,
    )
    .unwrap_err();
    assert!(matches!(
        err.kind,
        DecodeErrorKind::LimitExceeded { len: 3, max: 2 }
    ));
    insta::assert_snapshot!(err.to_string(), @"at .members: list of 3 elements exceeds the limit of 2");
    assert_eq!(group.display_name, "g");
    assert_eq!(group.members, [Member { value: "kept".into() }]);
}

#[test]
fn lists_within_the_limit_decode() {
    let options = DecodeOptions::new().max_sequence_len(2);
    let mut group = Group::default();
    decode_with(
        &object(value!({ "members": [{ "value": "a" }, { "value": "b" }] })),
        &mut group,
        &options,
    )
    .unwrap();
    assert_eq!(group.members.len(), 2);
}
